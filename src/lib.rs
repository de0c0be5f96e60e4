//! Spiralwick pin automation library
//!
//! Modules:
//! - `catalog`: Static products and scene styles the pipeline samples from.
//! - `link`: UTM tracking parameters for outbound pin links.
//! - `openai`: Thin client for the chat-completions and image endpoints.
//! - `prompt`: Prompt construction helpers with `{{placeholder}}` replacement.
//! - `generate`: Copy and image generators with local fallbacks.
//! - `render`: Bitmap text drawing and the brand watermark.
//! - `pinterest`: Pin publishing client and the dry-run aware publisher.
//! - `pipeline`: The per-run orchestration tying it all together.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `Pipeline`,
//! `PinOutcome`, and `AppError`.
pub mod catalog;
pub mod config;
pub mod error;
pub mod generate;
pub mod link;
pub mod openai;
pub mod pinterest;
pub mod pipeline;
pub mod prompt;
pub mod render;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use pinterest::PinOutcome;
pub use pipeline::Pipeline;
