// File: crates/tidyviz-core/src/error.rs
// Summary: Error taxonomy shared by loading, reshaping and rendering stages.

use std::io;

use thiserror::Error;

/// Any failure aborts the whole run; no stage recovers locally.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to fetch '{url}': {reason}")]
    Fetch { url: String, reason: String },
    #[error("schema mismatch: {0}")]
    Schema(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
