//! Global mesh descriptors for structured grids.
//!
//! A global mesh descriptor is an immutable record of the full simulation
//! domain's geometry, prior to any partitioning across workers. Two
//! mutually-exclusive representations share the [`GlobalMesh`] query surface:
//!
//! - [`UniformMesh`]: one scalar cell size for all three axes; cell counts
//!   are derived from the bounding box.
//! - [`NonUniformMesh`]: explicit strictly-increasing cell-boundary arrays
//!   per axis; cell size may vary along an axis.
//!
//! Descriptors are validated eagerly at construction and read-only
//! thereafter. The `create_*` factory functions wrap construction in `Arc`
//! so partitioners and local-grid builders can retain independent references
//! through the mesh's lifetime.

pub mod dim;
pub mod nonuniform;
pub mod scalar;
pub mod uniform;

pub use dim::Dim;
pub use nonuniform::NonUniformMesh;
pub use scalar::MeshScalar;
pub use uniform::UniformMesh;

/// Read-only query surface shared by all global mesh descriptors.
///
/// All methods are O(1), allocation-free, and safe to call concurrently from
/// any number of threads.
pub trait GlobalMesh {
    /// Scalar type of the physical coordinates.
    type Scalar: MeshScalar;

    /// Global low corner of the domain along `dim`.
    fn low_corner(&self, dim: Dim) -> Self::Scalar;

    /// Global high corner of the domain along `dim`.
    fn high_corner(&self, dim: Dim) -> Self::Scalar;

    /// Physical extent of the domain along `dim`.
    #[inline]
    fn extent(&self, dim: Dim) -> Self::Scalar {
        self.high_corner(dim) - self.low_corner(dim)
    }

    /// Global number of cells along `dim`.
    fn global_num_cell(&self, dim: Dim) -> usize;
}
