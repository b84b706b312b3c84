//! Interpolation error types.
//!
//! ┌ [`InterpolationError`] : request validation and runtime errors
//! │   ├ missing endpoint value(s)
//! │   ├ invalid or missing step count
//! │   ├ control-point sequence missing or too short
//! │   ├ non-finite input or overflowing span
//! │   └ sample buffer too large to allocate
//! │
//! └ [`PoolError`]          : worker pool construction errors

use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;


/// Names one of the two endpoints of a pairwise span.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End   => write!(f, "end"),
        }
    }
}


#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("missing endpoint value: `{endpoint}` must be provided")]
    MissingEndpoint { endpoint: Endpoint },

    #[error("invalid step count: must be provided and >= 1. got {got:?}")]
    InvalidSteps { got: Option<i64> },

    #[error("insufficient control points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("non-finite endpoint value: `{endpoint}` = {got}")]
    NonFiniteEndpoint { endpoint: Endpoint, got: f64 },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("span [{start}, {end}] overflows: end - start is not finite")]
    SpanOverflow { start: f64, end: f64 },

    #[error("sample count overflows: {pairs} spans of {steps} steps")]
    SampleCountOverflow { steps: usize, pairs: usize },

    #[error("cannot allocate {n_evaluated} samples: {source}")]
    Allocation { n_evaluated: usize, source: TryReserveError },

    #[error(transparent)]
    Pool(#[from] PoolError),
}


/// Worker pool errors.
///
/// ┌ Invalid pool sizing
/// ├ Process-wide pool initialized twice
/// └ Thread spawn failure reported by rayon
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("invalid num_threads: must be >= 1. got {got}")]
    InvalidNumThreads { got: usize },

    #[error("process-wide worker pool is already initialized")]
    AlreadyInitialized,

    #[error("failed to build worker pool: {0}")]
    Build(#[from] rayon::ThreadPoolBuildError),
}
