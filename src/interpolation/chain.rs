//! Chain Interpolation
//!
//! Samples a polyline through an ordered sequence of control points. Each
//! consecutive pair `(values[i], values[i+1])` is sampled with the pairwise
//! subdivision and the spans are laid end to end, sharing their boundary
//! points. Spans are visited left to right on one worker; concurrency comes
//! only from the subdivision inside each span.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_span, impl_common_cfg, non_finite_idx, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::pairwise::subdivide;
use crate::interpolation::pool::{global_pool, WorkerPool};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Chain interpolation configuration
///
/// # Fields
/// - `values` : control points, in order
/// - `common` : [`CommonCfg`]; `steps` applies to every consecutive pair
///
/// # Construction
/// - Use [`ChainCfg::new`] then setters. `values` and `steps` have no
///   defaults and must be set.
#[derive(Debug, Clone, Copy)]
pub struct ChainCfg<'a> {
    values: &'a [f64],
    common: CommonCfg,
}
impl<'a> ChainCfg<'a> {
    pub fn new() -> Self {
        Self { values: &[], common: CommonCfg::new() }
    }

    pub fn set_values(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if v.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: v.len() });
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        for pair in v.windows(2) {
            check_span(pair[0], pair[1])?;
        }

        self.values = v;
        Ok(self)
    }

    pub fn values(&self) -> &'a [f64] { self.values }

    /// Checks completeness in caller order: control points, then steps.
    /// Returns `(steps, n_evaluated)`.
    fn resolve(&self) -> Result<(usize, usize), InterpolationError> {
        let n = self.values.len();
        if n < 2 {
            return Err(InterpolationError::InsufficientPoints { got: n });
        }
        let steps = self.common.validate()?;

        let pairs = n - 1;
        let n_evaluated = pairs
            .checked_mul(steps)
            .and_then(|len| len.checked_add(1))
            .ok_or(InterpolationError::SampleCountOverflow { steps, pairs })?;

        Ok((steps, n_evaluated))
    }
}
impl Default for ChainCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(ChainCfg<'a>, 'a);


/// Performs chain interpolation on the process-wide pool.
///
/// Validation happens before the pool is touched. See [`interpolate_in`].
pub fn interpolate(cfg: ChainCfg) -> Result<InterpolationReport, InterpolationError> {
    let sizes = cfg.resolve()?;
    interpolate_resolved(cfg, sizes, global_pool()?)
}

/// Performs chain interpolation on `pool`.
///
/// # Behavior
/// For `n` control points, span `k` fills indices `k * steps .. (k + 1) * steps`
/// of the output. Its trailing endpoint is written by the span after it, or
/// directly for the last control point, so each control point appears exactly
/// once, at index `k * steps`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"chain"`
/// - `n_provided`     : number of control points
/// - `steps`          : step count per pair
/// - `n_evaluated`    : `1 + (n - 1) * steps`
/// - `evaluated`      : the stitched sequence
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] if fewer than 2 control points were set.
/// - [`InterpolationError::InvalidSteps`] if `steps` was never set.
/// - [`InterpolationError::SampleCountOverflow`] if `1 + (n - 1) * steps` overflows.
/// - [`InterpolationError::Allocation`] if the samples cannot be allocated.
pub fn interpolate_in(
    cfg: ChainCfg,
    pool: &WorkerPool,
) -> Result<InterpolationReport, InterpolationError> {
    let sizes = cfg.resolve()?;
    interpolate_resolved(cfg, sizes, pool)
}

fn interpolate_resolved(
    cfg: ChainCfg,
    (steps, n_evaluated): (usize, usize),
    pool: &WorkerPool,
) -> Result<InterpolationReport, InterpolationError> {
    let values = cfg.values;
    let cutoff = cfg.common.sequential_cutoff();
    let n      = values.len();

    tracing::debug!(n_points = n, steps, "chain interpolation");

    let mut report = InterpolationReport::new(Algorithm::Chain, n, steps, n_evaluated)?;
    let (body, last) = report.evaluated.split_at_mut(n_evaluated - 1);

    pool.install(|| {
        for (span, pair) in body.chunks_mut(steps).zip(values.windows(2)) {
            subdivide(span, pair[0], pair[1], steps, cutoff);
        }
    });
    last[0] = values[n - 1];

    Ok(report)
}


impl Interpolator for ChainCfg<'_> {
    fn validate(&self) -> Result<(), InterpolationError> {
        self.resolve().map(|_| ())
    }

    fn interpolate_in(&self, pool: &WorkerPool) -> Result<InterpolationReport, InterpolationError> {
        interpolate_in(*self, pool)
    }

    fn interpolate(&self) -> Result<InterpolationReport, InterpolationError> {
        interpolate(*self)
    }
}
