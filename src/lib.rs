//! # structured-mesh
//!
//! structured-mesh provides immutable global mesh descriptors for 3-D
//! rectangular structured-grid simulation domains. A descriptor records the
//! physical extent, resolution, and (for non-uniform grids) the explicit
//! per-axis cell-boundary coordinates of the global domain, and is the single
//! source of truth from which domain partitioners, local-grid builders, and
//! halo-exchange layers derive global geometry.
//!
//! ## Features
//! - [`UniformMesh`](mesh::UniformMesh): domain described by a single scalar
//!   cell size, constructible either from the cell size or from per-axis
//!   global cell counts.
//! - [`NonUniformMesh`](mesh::NonUniformMesh): domain described by strictly
//!   increasing per-axis edge coordinate arrays.
//! - Eager, tolerance-aware validation at construction time: geometrically
//!   inconsistent inputs are rejected with a [`MeshError`](mesh_error::MeshError)
//!   rather than silently corrected.
//! - `Arc`-based factory functions so independent downstream consumers
//!   (partitioners, local-grid builders) can hold long-lived references to
//!   the same global geometry.
//!
//! ## Immutability
//!
//! Descriptors are never mutated after construction, so any number of threads
//! may call the query methods concurrently without synchronization.
//!
//! ## Usage
//! ```
//! use structured_mesh::prelude::*;
//!
//! let mesh = create_uniform_global_mesh([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], 0.25)?;
//! assert_eq!(mesh.global_num_cell(Dim::I), 4);
//! # Ok::<(), structured_mesh::mesh_error::MeshError>(())
//! ```

pub mod mesh;
pub mod mesh_error;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::mesh::GlobalMesh;
    pub use crate::mesh::dim::Dim;
    pub use crate::mesh::nonuniform::{NonUniformMesh, create_non_uniform_global_mesh};
    pub use crate::mesh::scalar::MeshScalar;
    pub use crate::mesh::uniform::{
        UniformMesh, create_uniform_global_mesh, create_uniform_global_mesh_from_cells,
    };
    pub use crate::mesh_error::MeshError;
}
