//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which names the operation behind an
//! [`crate::interpolation::report::InterpolationReport`], along with the
//! [`LOWEST_STEP`] base case shared by both.

/// Smallest even span that is filled directly instead of being halved.
///
/// Spans with an odd step count are also filled directly, so any
/// `steps >= 1` is accepted.
pub const LOWEST_STEP: usize = 2;


/// Interpolation algorithm variants.
/// - [`Algorithm::Pairwise`] samples between two endpoints
/// - [`Algorithm::Chain`]    samples through consecutive control points
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Pairwise,
    Chain,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Pairwise => "pairwise",
            Algorithm::Chain    => "chain",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
