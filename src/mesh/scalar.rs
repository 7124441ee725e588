//! `MeshScalar`: floating-point scalar type of a mesh descriptor.
//!
//! Divisibility and cell-size-agreement checks compare against an absolute
//! tolerance of 100 machine epsilons of the scalar type, so the same
//! construction logic stays correct in single and double precision. A fixed
//! epsilon would be either too loose for `f64` or too tight for `f32`.

use std::fmt::Debug;

use num_traits::Float;

/// Floating-point scalar usable as mesh coordinate type.
///
/// The associated tolerance is the absolute round-off bound used by all
/// construction-time consistency checks. Extents are assumed to be of
/// moderate magnitude; there is no relative scaling.
pub trait MeshScalar: Float + Debug + Send + Sync + 'static {
    /// Absolute round-off tolerance: 100 machine epsilons.
    const ROUND_OFF_TOL: Self;

    /// Converts a cell count to the scalar type.
    fn from_cell_count(count: usize) -> Self;

    /// Lossy conversion for error reporting.
    fn to_f64_lossy(self) -> f64;
}

impl MeshScalar for f32 {
    const ROUND_OFF_TOL: f32 = 100.0 * f32::EPSILON;

    #[inline]
    fn from_cell_count(count: usize) -> f32 {
        count as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}

impl MeshScalar for f64 {
    const ROUND_OFF_TOL: f64 = 100.0 * f64::EPSILON;

    #[inline]
    fn from_cell_count(count: usize) -> f64 {
        count as f64
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}
