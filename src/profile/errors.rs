use std::path::PathBuf;

use thiserror::Error;

use crate::interpolation::errors::InterpolationError;
use crate::sampling::errors::SamplingError;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
