//! Non-uniform global mesh descriptor.
//!
//! A non-uniform mesh is described by one strictly increasing cell-boundary
//! coordinate array per axis; the cell size may vary from cell to cell.
//! Corners, extents, and cell counts are all derived from the edge arrays.
//! Edge arrays are validated at construction: at least two entries per axis
//! (one cell) and strictly ascending order.

use std::sync::Arc;

use itertools::Itertools;

use crate::mesh::GlobalMesh;
use crate::mesh::dim::Dim;
use crate::mesh::scalar::MeshScalar;
use crate::mesh_error::MeshError;

/// Global mesh descriptor with explicit per-axis cell boundaries.
///
/// Immutable after construction; share between consumers via the
/// [`create_non_uniform_global_mesh`] factory.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NonUniformMesh<T: MeshScalar> {
    edges: [Vec<T>; 3],
}

impl<T: MeshScalar> NonUniformMesh<T> {
    /// Construct from per-axis edge coordinate arrays.
    ///
    /// Each array must hold at least two entries and be strictly increasing;
    /// [`MeshError::EdgesNotIncreasing`] reports the index of the first entry
    /// that is not above its predecessor.
    pub fn new(i_edges: Vec<T>, j_edges: Vec<T>, k_edges: Vec<T>) -> Result<Self, MeshError> {
        let edges = [i_edges, j_edges, k_edges];
        for dim in Dim::ALL {
            check_edges(dim, &edges[dim.index()])?;
        }
        log::debug!(
            "constructed non-uniform global mesh: {} x {} x {} cells",
            edges[0].len() - 1,
            edges[1].len() - 1,
            edges[2].len() - 1,
        );
        Ok(Self { edges })
    }

    /// Borrowed view of the ordered edge coordinates along `dim`.
    ///
    /// Consumers use this to carve local sub-ranges of edges for partitioned
    /// blocks; no copy is made.
    #[inline]
    pub fn non_uniform_edge(&self, dim: Dim) -> &[T] {
        &self.edges[dim.index()]
    }
}

impl<T: MeshScalar> GlobalMesh for NonUniformMesh<T> {
    type Scalar = T;

    #[inline]
    fn low_corner(&self, dim: Dim) -> T {
        self.edges[dim.index()][0]
    }

    #[inline]
    fn high_corner(&self, dim: Dim) -> T {
        let axis = &self.edges[dim.index()];
        axis[axis.len() - 1]
    }

    #[inline]
    fn global_num_cell(&self, dim: Dim) -> usize {
        self.edges[dim.index()].len() - 1
    }
}

fn check_edges<T: MeshScalar>(dim: Dim, edges: &[T]) -> Result<(), MeshError> {
    if edges.len() < 2 {
        return Err(MeshError::TooFewEdges {
            dim,
            len: edges.len(),
        });
    }
    for (index, (a, b)) in edges.iter().tuple_windows().enumerate() {
        if !(*b > *a) {
            return Err(MeshError::EdgesNotIncreasing {
                dim,
                index: index + 1,
            });
        }
    }
    Ok(())
}

/// Creates a non-uniform global mesh from per-axis edge arrays, wrapped for
/// shared ownership by multiple downstream consumers.
pub fn create_non_uniform_global_mesh<T: MeshScalar>(
    i_edges: Vec<T>,
    j_edges: Vec<T>,
    k_edges: Vec<T>,
) -> Result<Arc<NonUniformMesh<T>>, MeshError> {
    Ok(Arc::new(NonUniformMesh::new(i_edges, j_edges, k_edges)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_derive_from_edges() {
        let mesh = NonUniformMesh::new(
            vec![0.0, 1.0, 3.0, 6.0],
            vec![0.0, 2.0, 4.0],
            vec![0.0, 5.0],
        )
        .unwrap();
        assert_eq!(mesh.global_num_cell(Dim::I), 3);
        assert_eq!(mesh.global_num_cell(Dim::J), 2);
        assert_eq!(mesh.global_num_cell(Dim::K), 1);
        assert_eq!(mesh.low_corner(Dim::I), 0.0);
        assert_eq!(mesh.high_corner(Dim::I), 6.0);
        assert_eq!(mesh.extent(Dim::J), 4.0);
        assert_eq!(mesh.non_uniform_edge(Dim::K), &[0.0, 5.0]);
    }

    #[test]
    fn rejects_short_edge_arrays() {
        let err =
            NonUniformMesh::new(vec![0.0, 1.0], vec![0.0], vec![0.0, 1.0]).unwrap_err();
        assert_eq!(err, MeshError::TooFewEdges { dim: Dim::J, len: 1 });
        let err = NonUniformMesh::new(vec![], vec![0.0, 1.0], vec![0.0, 1.0]).unwrap_err();
        assert_eq!(err, MeshError::TooFewEdges { dim: Dim::I, len: 0 });
    }

    #[test]
    fn rejects_non_increasing_edges() {
        let err = NonUniformMesh::new(
            vec![0.0, 1.0, 1.0, 2.0],
            vec![0.0, 1.0],
            vec![0.0, 1.0],
        )
        .unwrap_err();
        assert_eq!(err, MeshError::EdgesNotIncreasing { dim: Dim::I, index: 2 });
        let err = NonUniformMesh::new(
            vec![0.0, 1.0],
            vec![0.0, 1.0],
            vec![0.0, 2.0, 1.0],
        )
        .unwrap_err();
        assert_eq!(err, MeshError::EdgesNotIncreasing { dim: Dim::K, index: 2 });
    }

    #[test]
    fn variable_spacing_is_preserved() {
        let mesh = NonUniformMesh::new(
            vec![0.0, 0.1, 0.5, 2.0],
            vec![-1.0, 0.0, 1.0],
            vec![0.0, 1.0],
        )
        .unwrap();
        let edges = mesh.non_uniform_edge(Dim::I);
        let spacings: Vec<f64> = edges.windows(2).map(|w| w[1] - w[0]).collect();
        assert_eq!(spacings.len(), mesh.global_num_cell(Dim::I));
        assert!(spacings[0] < spacings[2]);
    }

    #[test]
    fn factory_shares_one_descriptor() {
        let mesh =
            create_non_uniform_global_mesh(vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0])
                .unwrap();
        let view = Arc::clone(&mesh);
        drop(mesh);
        assert_eq!(view.global_num_cell(Dim::I), 1);
    }
}
