pub mod text;
pub mod watermark;

pub use watermark::Watermarker;
