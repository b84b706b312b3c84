use crate::interpolation::errors::InterpolationError;
use crate::interpolation::pool::{global_pool, WorkerPool};
use crate::interpolation::report::InterpolationReport;

pub trait Interpolator {
    /// checks the request is complete and well-formed
    fn validate(&self) -> Result<(), InterpolationError>;

    /// samples the request on `pool`
    /// defined separately in each method
    fn interpolate_in(&self, pool: &WorkerPool) -> Result<InterpolationReport, InterpolationError>;

    /// samples the request on the process-wide pool
    #[inline]
    fn interpolate(&self) -> Result<InterpolationReport, InterpolationError> {
        self.validate()?;
        self.interpolate_in(global_pool()?)
    }
}
