use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error("cannot sample from an empty series")]
    EmptySeries,

    #[error("node count must be >= 1")]
    ZeroCount,

    #[error("stride must be >= 1")]
    ZeroStep,

    #[error("index {idx} out of range for series of length {len}")]
    IndexOutOfRange { idx: usize, len: usize },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },
}
