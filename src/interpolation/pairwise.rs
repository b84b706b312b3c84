//! Pairwise Interpolation
//!
//! Samples `steps + 1` evenly-spaced values from `start` to `end` by
//! [divide and conquer](https://en.wikipedia.org/wiki/Fork%E2%80%93join_model).
//!
//! A span whose step count is even and above [`LOWEST_STEP`] is halved at
//! its midpoint. The left half runs on the calling worker while the right
//! half is offered to the pool, and the caller joins on both. Odd spans and
//! the base case are filled directly. Both halves write into disjoint parts
//! of one preallocated buffer, so the shared midpoint is written once (by
//! the right half) and the merge order never depends on which half finishes
//! first.


use crate::interpolation::algorithms::{Algorithm, LOWEST_STEP};
use crate::interpolation::config::{check_span, impl_common_cfg, CommonCfg};
use crate::interpolation::errors::{Endpoint, InterpolationError};
use crate::interpolation::pool::{global_pool, WorkerPool};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Pairwise interpolation configuration
///
/// # Fields
/// - `start`  : first endpoint
/// - `end`    : last endpoint
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`PairwiseCfg::new`] then setters. `start`, `end` and `steps`
///   have no defaults and must be set.
///
/// # Defaults
/// - Every subdivided span forks;
///   [`crate::interpolation::config::DEFAULT_SEQUENTIAL_CUTOFF`] by default.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseCfg {
    start: Option<f64>,
    end: Option<f64>,
    common: CommonCfg,
}
impl PairwiseCfg {
    pub fn new() -> Self {
        Self { start: None, end: None, common: CommonCfg::new() }
    }

    pub fn set_start(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteEndpoint { endpoint: Endpoint::Start, got: v });
        }
        self.start = Some(v);
        Ok(self)
    }

    pub fn set_end(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteEndpoint { endpoint: Endpoint::End, got: v });
        }
        self.end = Some(v);
        Ok(self)
    }

    pub fn start(&self) -> Option<f64> { self.start }
    pub fn end(&self) -> Option<f64> { self.end }

    /// Checks completeness in caller order: endpoints, then steps, then span.
    fn resolve(&self) -> Result<(f64, f64, usize), InterpolationError> {
        let start = self.start
            .ok_or(InterpolationError::MissingEndpoint { endpoint: Endpoint::Start })?;
        let end = self.end
            .ok_or(InterpolationError::MissingEndpoint { endpoint: Endpoint::End })?;
        let steps = self.common.validate()?;
        check_span(start, end)?;
        Ok((start, end, steps))
    }
}
impl Default for PairwiseCfg {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(PairwiseCfg);


#[inline]
fn midpoint(start: f64, end: f64) -> f64 {
    start + (end - start) / 2.0
}

#[inline]
fn is_base_case(steps: usize) -> bool {
    steps % 2 != 0 || steps == LOWEST_STEP
}

/// Writes `start + i * (end - start) / steps` for each slot of `out`,
/// pinning index 0 to `start` and index `steps` (if present) to `end`.
#[inline]
fn fill_direct(out: &mut [f64], start: f64, end: f64, steps: usize) {
    let interval = (end - start) / steps as f64;
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = if i == 0 {
            start
        } else if i == steps {
            end
        } else {
            start + i as f64 * interval
        };
    }
}

/// Writes the leading `out.len()` samples of `steps` equal steps from
/// `start` to `end`.
///
/// `out.len()` is `steps + 1` for a closed span, or `steps` when the
/// trailing endpoint is written by a neighbouring span.
///
/// Spans with `steps <= cutoff` keep the same recursion shape but run both
/// halves on the current worker, so the cutoff never changes a value.
pub(crate) fn subdivide(out: &mut [f64], start: f64, end: f64, steps: usize, cutoff: usize) {
    subdivide_with(out, start, end, steps, cutoff, &fill_direct);
}

/// [`subdivide`] with the base-case filler supplied by the caller.
fn subdivide_with<F>(
    out: &mut [f64],
    start: f64,
    end: f64,
    steps: usize,
    cutoff: usize,
    leaf: &F,
) where
    F: Fn(&mut [f64], f64, f64, usize) + Sync,
{
    debug_assert!(out.len() == steps || out.len() == steps + 1);

    if is_base_case(steps) {
        leaf(out, start, end, steps);
        return;
    }

    let half = steps / 2;
    let mid  = midpoint(start, end);

    // left omits the midpoint; right starts with it
    let (left, right) = out.split_at_mut(half);
    if steps > cutoff {
        rayon::join(
            || subdivide_with(left, start, mid, half, cutoff, leaf),
            || subdivide_with(right, mid, end, half, cutoff, leaf),
        );
    } else {
        subdivide_with(left, start, mid, half, cutoff, leaf);
        subdivide_with(right, mid, end, half, cutoff, leaf);
    }
}


/// Performs pairwise interpolation on the process-wide pool.
///
/// Validation happens before the pool is touched, so invalid requests never
/// start a worker. See [`interpolate_in`].
pub fn interpolate(cfg: PairwiseCfg) -> Result<InterpolationReport, InterpolationError> {
    let span = cfg.resolve()?;
    interpolate_resolved(cfg, span, global_pool()?)
}

/// Performs pairwise interpolation on `pool`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"pairwise"`
/// - `n_provided`     : 2
/// - `steps`          : requested step count
/// - `n_evaluated`    : `steps + 1`
/// - `evaluated`      : `[start, start + h, ..., end]` with `h = (end - start) / steps`;
///                      the first and last values are exactly `start` and `end`
///
/// # Errors
/// - [`InterpolationError::MissingEndpoint`] if `start` or `end` was never set.
/// - [`InterpolationError::InvalidSteps`] if `steps` was never set.
/// - [`InterpolationError::SpanOverflow`] if `end - start` is not finite.
/// - [`InterpolationError::Allocation`] if `steps + 1` samples cannot be allocated.
pub fn interpolate_in(
    cfg: PairwiseCfg,
    pool: &WorkerPool,
) -> Result<InterpolationReport, InterpolationError> {
    let span = cfg.resolve()?;
    interpolate_resolved(cfg, span, pool)
}

fn interpolate_resolved(
    cfg: PairwiseCfg,
    (start, end, steps): (f64, f64, usize),
    pool: &WorkerPool,
) -> Result<InterpolationReport, InterpolationError> {
    let cutoff = cfg.common.sequential_cutoff();

    // usize::MAX samples can never be reserved, so saturating is enough
    let n_evaluated = steps.saturating_add(1);

    tracing::debug!(start, end, steps, "pairwise interpolation");

    let mut report = InterpolationReport::new(Algorithm::Pairwise, 2, steps, n_evaluated)?;
    let out = &mut report.evaluated[..];
    pool.install(|| subdivide(out, start, end, steps, cutoff));

    Ok(report)
}


impl Interpolator for PairwiseCfg {
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
