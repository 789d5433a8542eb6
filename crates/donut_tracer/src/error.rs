//! Errors surfaced by the tracer.
//!
//! Ray misses and numerically degenerate geometry are not errors; they show
//! up as invalid intersections. Only cancellation and I/O around a render
//! can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Render cancelled after {completed} of {total} buckets")]
    Cancelled { completed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid render config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
