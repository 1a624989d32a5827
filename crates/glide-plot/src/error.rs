//! Error types for the plot sink.

use thiserror::Error;

/// Result type for plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while persisting a canvas.
#[derive(Error, Debug)]
pub enum PlotError {
    /// PNG encoding or writing failed.
    #[error("PNG write failed: {0}")]
    Encode(#[from] image::ImageError),
}
