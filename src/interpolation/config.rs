//! Shared configuration for interpolation requests.
//!
//! Provides [`CommonCfg`] with the fields every request carries, and the
//! `impl_common_cfg!` macro which gives each request config the same
//! validating setters.
//!
//! [`CommonCfg`] — universal fields
//! - `steps`             : number of equal sub-intervals per span (unset by default)
//! - `sequential_cutoff` : spans with `steps <= cutoff` are halved without forking;
//!                         [`DEFAULT_SEQUENTIAL_CUTOFF`] by default
//!
//! [`CommonCfg::new`] initializes configuration with no step count.


use crate::interpolation::errors::InterpolationError;

/// Every subdivided span forks its right half.
pub const DEFAULT_SEQUENTIAL_CUTOFF: usize = 0;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    pub(crate) steps: Option<usize>,
    pub(crate) sequential_cutoff: usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            steps: None,
            sequential_cutoff: DEFAULT_SEQUENTIAL_CUTOFF,
        }
    }

    /// Step count, or [`InterpolationError::InvalidSteps`] if it was never set.
    pub fn validate(&self) -> Result<usize, InterpolationError> {
        self.steps.ok_or(InterpolationError::InvalidSteps { got: None })
    }

    // getters
    pub fn steps(&self) -> Option<usize> { self.steps }
    pub fn sequential_cutoff(&self) -> usize { self.sequential_cutoff }

    // setters
    pub(crate) fn with_steps(&mut self, v: usize) { self.steps = Some(v); }
    pub(crate) fn with_sequential_cutoff(&mut self, v: usize) { self.sequential_cutoff = v; }
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Rejects spans whose width is not representable.
pub(crate) fn check_span(start: f64, end: f64) -> Result<(), InterpolationError> {
    if !(end - start).is_finite() {
        return Err(InterpolationError::SpanOverflow { start, end });
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty $(, $lt:lifetime)?) => {
        impl $(<$lt>)? $cfg {
            pub fn set_steps(
                mut self,
                v: i64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v < 1 {
                    return Err(InterpolationError::InvalidSteps { got: Some(v) });
                }
                let steps = usize::try_from(v)
                    .map_err(|_| InterpolationError::InvalidSteps { got: Some(v) })?;

                self.common.with_steps(steps);
                Ok(self)
            }

            pub fn set_sequential_cutoff(mut self, v: usize) -> Self {
                self.common.with_sequential_cutoff(v);
                self
            }

            pub fn steps(&self) -> Option<usize> { self.common.steps() }
            pub fn sequential_cutoff(&self) -> usize { self.common.sequential_cutoff() }
        }
    };
}
pub(crate) use impl_common_cfg;
