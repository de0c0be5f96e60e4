pub mod client;
pub mod publisher;

pub use client::PinterestClient;
pub use publisher::{PinOutcome, Publisher, DRY_RUN_PIN_ID};
