//! Defines the struct returned by all interpolation algorithms.
//!
//! This report summarizes the request that produced it (algorithm,
//! number of provided values, step count) together with the sampled
//! sequence itself.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"pairwise"`)
/// - `n_provided`     : number of input values (2 for a pair, else control points)
/// - `steps`          : step count applied to every span
/// - `n_evaluated`    : number of sampled points
/// - `evaluated`      : the sampled sequence
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub steps: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    /// Zero-filled report of `n_evaluated` samples, ready to be written in place.
    ///
    /// # Errors
    /// - [`InterpolationError::Allocation`] if the sample buffer cannot be
    ///   reserved.
    pub fn new(
        algorithm: Algorithm,
        n_provided: usize,
        steps: usize,
        n_evaluated: usize,
    ) -> Result<Self, InterpolationError> {
        let mut evaluated = Vec::new();
        evaluated
            .try_reserve_exact(n_evaluated)
            .map_err(|source| InterpolationError::Allocation { n_evaluated, source })?;
        evaluated.resize(n_evaluated, 0.0);

        Ok(Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            steps,
            n_evaluated,
            evaluated,
        })
    }

    pub fn into_values(self) -> Vec<f64> {
        self.evaluated
    }
}
