//! MeshError: Unified error type for structured-mesh public APIs
//!
//! All geometric inconsistencies are detected synchronously at descriptor
//! construction time and surfaced through this type; no partial descriptor is
//! ever produced and no input is silently clamped or corrected.

use thiserror::Error;

use crate::mesh::dim::Dim;

/// Unified error type for structured-mesh operations.
///
/// Scalar values are reported as `f64` regardless of the descriptor's
/// precision; this is a display concession only, the checks themselves run in
/// the descriptor's scalar type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// The low corner is at or above the high corner along some axis.
    #[error("invalid corners along {dim}: low corner {low} must be below high corner {high}")]
    InvalidCorner { dim: Dim, low: f64, high: f64 },
    /// The uniform cell size is zero, negative, or non-finite.
    #[error("uniform cell size must be positive and finite, got {cell_size}")]
    InvalidCellSize { cell_size: f64 },
    /// A requested global cell count of zero along some axis.
    #[error("global cell count along {dim} must be at least one")]
    EmptyCellCount { dim: Dim },
    /// The domain extent is not an integer multiple of the cell size within
    /// round-off tolerance along some axis.
    #[error("extent {extent} along {dim} is not evenly divisible by uniform cell size {cell_size}")]
    ExtentNotDivisible {
        dim: Dim,
        extent: f64,
        cell_size: f64,
    },
    /// Per-axis cell sizes derived from independently supplied cell counts
    /// disagree beyond round-off tolerance.
    #[error("cell sizes not equal: {found} along {dim} vs {expected} along I")]
    CellSizeMismatch {
        dim: Dim,
        expected: f64,
        found: f64,
    },
    /// The cell count re-derived from the adopted cell size does not match the
    /// caller's requested count along some axis.
    #[error("global cell count mismatch along {dim}: requested {requested}, derived {derived}")]
    CellCountMismatch {
        dim: Dim,
        requested: usize,
        derived: usize,
    },
    /// A non-uniform edge array has fewer than two entries.
    #[error("edge array along {dim} must have at least two entries, got {len}")]
    TooFewEdges { dim: Dim, len: usize },
    /// A non-uniform edge array is not strictly increasing.
    #[error("edge array along {dim} is not strictly increasing at index {index}")]
    EdgesNotIncreasing { dim: Dim, index: usize },
}
