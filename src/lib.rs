//! Evenly-spaced linear interpolation, computed by recursively halving the
//! interval and solving the halves on a fork-join worker pool.
//!
//! - [`interpolation::pairwise`] : samples between two endpoints
//! - [`interpolation::chain`]    : samples through a sequence of control points

pub mod interpolation;
