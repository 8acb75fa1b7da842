use sampling::SourceError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid parameters n={n}, q={q}: {reason}")]
    InvalidParameters {
        n: usize,
        q: u16,
        reason: &'static str,
    },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid coefficient {value} at index {index}")]
    InvalidCoefficient { index: usize, value: u16 },

    #[error("failed to allocate {requested} coefficients")]
    AllocationFailure { requested: usize },

    #[error("random source exhausted: {0}")]
    RandomSourceExhausted(#[from] SourceError),
}
