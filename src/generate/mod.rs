//! AI-backed generators for pin copy and pin images.
//!
//! Neither generator ever returns an error: a failed or skipped upstream call
//! is answered with a locally built value, tagged with the reason.
pub mod copy;
pub mod image;

use std::fmt;

use crate::error::AppError;

pub use self::copy::{CopyGenerator, PinMetadata};
pub use self::image::ImageGenerator;

#[derive(Debug)]
pub enum FallbackReason {
    /// The upstream call was deliberately skipped (safe mode, no credential).
    Disabled(&'static str),
    /// The upstream call was attempted and failed.
    Failed(AppError),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Disabled(why) => write!(f, "disabled: {}", why),
            FallbackReason::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

#[derive(Debug)]
pub enum Generated<T> {
    Remote(T),
    Fallback { value: T, reason: FallbackReason },
}

impl<T> Generated<T> {
    pub fn value(&self) -> &T {
        match self {
            Generated::Remote(value) | Generated::Fallback { value, .. } => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Generated::Remote(value) | Generated::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Generated::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&FallbackReason> {
        match self {
            Generated::Remote(_) => None,
            Generated::Fallback { reason, .. } => Some(reason),
        }
    }
}
