//! Uniform global mesh descriptor.
//!
//! A uniform mesh is described by its physical bounding box and a single
//! scalar cell size shared by all three axes; per-axis cell counts are
//! derived, never stored. Two construction paths converge on the same
//! invariant set:
//!
//! - [`UniformMesh::from_cell_size`]: the caller supplies the cell size and
//!   the box must be tiled by it an integer number of times per axis.
//! - [`UniformMesh::from_global_num_cell`]: the caller supplies per-axis cell
//!   counts, which must imply one common cell size.
//!
//! All consistency checks use the absolute round-off tolerance of
//! [`MeshScalar::ROUND_OFF_TOL`] and round-to-nearest cell counts, so
//! floating round-off accumulated in subtraction and division cannot shift a
//! count by one.

use std::sync::Arc;

use num_traits::ToPrimitive;

use crate::mesh::GlobalMesh;
use crate::mesh::dim::Dim;
use crate::mesh::scalar::MeshScalar;
use crate::mesh_error::MeshError;

/// Global mesh descriptor with one uniform cell size for all axes.
///
/// Immutable after construction; share between consumers via the
/// [`create_uniform_global_mesh`] and [`create_uniform_global_mesh_from_cells`]
/// factories.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UniformMesh<T: MeshScalar> {
    global_low_corner: [T; 3],
    global_high_corner: [T; 3],
    cell_size: T,
}

impl<T: MeshScalar> UniformMesh<T> {
    /// Construct from the bounding box and a uniform cell size.
    ///
    /// Fails with [`MeshError::ExtentNotDivisible`] if the cell size does not
    /// tile the extent an integer number of times along every axis within
    /// round-off tolerance. This guards against a uniform-cell assumption
    /// being silently wrong downstream.
    pub fn from_cell_size(
        global_low_corner: [T; 3],
        global_high_corner: [T; 3],
        cell_size: T,
    ) -> Result<Self, MeshError> {
        check_corners(&global_low_corner, &global_high_corner)?;
        if !cell_size.is_finite() || cell_size <= T::zero() {
            return Err(MeshError::InvalidCellSize {
                cell_size: cell_size.to_f64_lossy(),
            });
        }
        let mesh = Self {
            global_low_corner,
            global_high_corner,
            cell_size,
        };
        mesh.check_even_divisibility()?;
        log::debug!(
            "constructed uniform global mesh: {} x {} x {} cells",
            mesh.global_num_cell(Dim::I),
            mesh.global_num_cell(Dim::J),
            mesh.global_num_cell(Dim::K),
        );
        Ok(mesh)
    }

    /// Construct from the bounding box and per-axis global cell counts.
    ///
    /// The three counts must imply one common cell size: the candidate sizes
    /// `extent(d) / count(d)` are required to agree with the I-axis candidate
    /// within round-off tolerance ([`MeshError::CellSizeMismatch`] otherwise),
    /// and the adopted size must reproduce both the extents
    /// ([`MeshError::ExtentNotDivisible`]) and the requested counts
    /// ([`MeshError::CellCountMismatch`]). The count round-trip exists because
    /// rounding in the size-from-count division can silently produce an
    /// off-by-one count under adversarial input.
    pub fn from_global_num_cell(
        global_low_corner: [T; 3],
        global_high_corner: [T; 3],
        global_num_cell: [usize; 3],
    ) -> Result<Self, MeshError> {
        check_corners(&global_low_corner, &global_high_corner)?;
        for dim in Dim::ALL {
            if global_num_cell[dim.index()] == 0 {
                return Err(MeshError::EmptyCellCount { dim });
            }
        }

        // Candidate cell size per axis; a uniform mesh means they all agree.
        let mut cell_sizes = [T::zero(); 3];
        for dim in Dim::ALL {
            cell_sizes[dim.index()] = (global_high_corner[dim.index()]
                - global_low_corner[dim.index()])
                / T::from_cell_count(global_num_cell[dim.index()]);
        }
        for dim in [Dim::J, Dim::K] {
            if (cell_sizes[dim.index()] - cell_sizes[Dim::I.index()]).abs() > T::ROUND_OFF_TOL {
                return Err(MeshError::CellSizeMismatch {
                    dim,
                    expected: cell_sizes[Dim::I.index()].to_f64_lossy(),
                    found: cell_sizes[dim.index()].to_f64_lossy(),
                });
            }
        }

        let mesh = Self {
            global_low_corner,
            global_high_corner,
            cell_size: cell_sizes[Dim::I.index()],
        };
        mesh.check_even_divisibility()?;
        for dim in Dim::ALL {
            let derived = mesh.global_num_cell(dim);
            if derived != global_num_cell[dim.index()] {
                return Err(MeshError::CellCountMismatch {
                    dim,
                    requested: global_num_cell[dim.index()],
                    derived,
                });
            }
        }
        Ok(mesh)
    }

    /// The uniform cell size shared by all three axes.
    #[inline]
    pub fn uniform_cell_size(&self) -> T {
        self.cell_size
    }

    /// Checks that the cell count times the cell size reproduces the extent
    /// along every axis within round-off tolerance.
    fn check_even_divisibility(&self) -> Result<(), MeshError> {
        for dim in Dim::ALL {
            let tiled = T::from_cell_count(self.global_num_cell(dim)) * self.cell_size;
            if (tiled - self.extent(dim)).abs() > T::ROUND_OFF_TOL {
                return Err(MeshError::ExtentNotDivisible {
                    dim,
                    extent: self.extent(dim).to_f64_lossy(),
                    cell_size: self.cell_size.to_f64_lossy(),
                });
            }
        }
        Ok(())
    }
}

impl<T: MeshScalar> GlobalMesh for UniformMesh<T> {
    type Scalar = T;

    #[inline]
    fn low_corner(&self, dim: Dim) -> T {
        self.global_low_corner[dim.index()]
    }

    #[inline]
    fn high_corner(&self, dim: Dim) -> T {
        self.global_high_corner[dim.index()]
    }

    #[inline]
    fn global_num_cell(&self, dim: Dim) -> usize {
        // Corners and cell size are validated at construction, so the rounded
        // ratio is a non-negative integer representable as usize.
        (self.extent(dim) / self.cell_size)
            .round()
            .to_usize()
            .unwrap_or(0)
    }
}

fn check_corners<T: MeshScalar>(low: &[T; 3], high: &[T; 3]) -> Result<(), MeshError> {
    for dim in Dim::ALL {
        if !(high[dim.index()] > low[dim.index()]) {
            return Err(MeshError::InvalidCorner {
                dim,
                low: low[dim.index()].to_f64_lossy(),
                high: high[dim.index()].to_f64_lossy(),
            });
        }
    }
    Ok(())
}

/// Creates a uniform global mesh from a cell size, wrapped for shared
/// ownership by multiple downstream consumers.
pub fn create_uniform_global_mesh<T: MeshScalar>(
    global_low_corner: [T; 3],
    global_high_corner: [T; 3],
    cell_size: T,
) -> Result<Arc<UniformMesh<T>>, MeshError> {
    Ok(Arc::new(UniformMesh::from_cell_size(
        global_low_corner,
        global_high_corner,
        cell_size,
    )?))
}

/// Creates a uniform global mesh from per-axis cell counts, wrapped for
/// shared ownership by multiple downstream consumers.
pub fn create_uniform_global_mesh_from_cells<T: MeshScalar>(
    global_low_corner: [T; 3],
    global_high_corner: [T; 3],
    global_num_cell: [usize; 3],
) -> Result<Arc<UniformMesh<T>>, MeshError> {
    Ok(Arc::new(UniformMesh::from_global_num_cell(
        global_low_corner,
        global_high_corner,
        global_num_cell,
    )?))
}
