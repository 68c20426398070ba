use log::trace;
use tinyvec::ArrayVec;

use crate::{adapter::GridAdapter, vertex::{Corners, VertexKey}, Lattice, Point};

impl<G: GridAdapter> Lattice<G> {
    /// Vertices one lattice edge away from `vertex`.
    ///
    /// Three in the interior of a grid, fewer along its edge, none off-grid.
    /// Nothing is stored: the owning cell supplies two neighbors along its
    /// own outline and the cells around it supply the third.
    pub fn adjacent_vertices(&self, vertex: Point) -> ArrayVec<[Point; 3]> {
        let mut found = ArrayVec::new();
        let key = self.vertex_key(vertex);
        let Some((owner, index)) = self.owner_of(key, vertex) else {
            trace!("no cell owns vertex {vertex}");
            return found;
        };
        found.push(owner.previous(index));
        found.push(owner.next(index));

        for neighbor in owner.neighbors {
            let Some(corners) = self.corners(neighbor) else { continue };
            let Some(i) = self.locate(&corners, key) else { continue };
            for candidate in [corners.previous(i), corners.next(i)] {
                if found.iter().any(|&it| self.vertices_equal(it, candidate)) { continue; }
                found.push(candidate);
                if found.len() == 3 { return found; }
            }
        }
        found
    }

    /// A cell having `vertex` among its corners, searching the cell under the
    /// point and then that cell's neighbors.
    pub(crate) fn owner_of(&self, key: VertexKey, vertex: Point) -> Option<(Corners, usize)> {
        let cell = self.grid.cell_at(vertex);
        std::iter::once(cell)
            .chain(self.grid.neighbors_of(cell))
            .filter_map(|it| self.corners(it))
            .find_map(|corners| self.locate(&corners, key).map(|i| (corners, i)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;
    use axial::{Axial, Layout, Orientation};
    use glam::DVec2;

    use super::*;
    use crate::HexGrid;

    fn all_vertices<G: GridAdapter>(lattice: &Lattice<G>, cells: &[Axial]) -> Vec<Point> {
        let mut seen = HashSet::new();
        cells.iter()
            .filter_map(|&cell| lattice.vertices_of(cell))
            .flatten()
            .filter(|&v| seen.insert(lattice.vertex_key(v)))
            .collect()
    }

    // ===== DEGREE TESTS =====

    #[test]
    fn test_interior_vertices_have_three_neighbors() {
        for orientation in [Orientation::POINTY, Orientation::FLAT] {
            let lattice = Lattice::new(HexGrid::unbounded(Layout::new(orientation, 10.)));
            for v in all_vertices(&lattice, &Axial::ORIGIN.range(2)) {
                let adjacent = lattice.adjacent_vertices(v);
                assert_eq!(adjacent.len(), 3, "Vertex {v} should have three neighbors");
                for u in adjacent {
                    assert_relative_eq!(u.distance(v), 10., epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_degree_holds_on_half_unit_origin() {
        let layout = Layout::new(Orientation::POINTY, 10.).with_origin(DVec2::new(0.0005, 0.0005));
        let lattice = Lattice::new(HexGrid::unbounded(layout));
        for v in all_vertices(&lattice, &Axial::ORIGIN.range(2)) {
            assert_eq!(lattice.adjacent_vertices(v).len(), 3,
                "Vertex {v} keyed on a rounding boundary should keep three neighbors");
        }
    }

    #[test]
    fn test_adjacent_vertices_are_distinct() {
        let lattice = Lattice::new(HexGrid::unbounded(Layout::new(Orientation::POINTY, 10.)));
        for v in all_vertices(&lattice, &[Axial::ORIGIN]) {
            let keys: HashSet<_> = lattice.adjacent_vertices(v).iter()
                .map(|&it| lattice.vertex_key(it))
                .collect();
            assert_eq!(keys.len(), 3);
            assert!(!keys.contains(&lattice.vertex_key(v)), "A vertex is not its own neighbor");
        }
    }

    #[test]
    fn test_boundary_vertices_have_at_most_three() {
        let grid = HexGrid::hexagon(Layout::new(Orientation::POINTY, 10.), Axial::ORIGIN, 2);
        let lattice = Lattice::new(&grid);
        let vertices = all_vertices(&lattice, &Axial::ORIGIN.range(2));
        assert!(!vertices.is_empty());
        for v in vertices {
            let adjacent = lattice.adjacent_vertices(v);
            assert!((2..=3).contains(&adjacent.len()), "Vertex {v} has {} neighbors", adjacent.len());
        }
    }

    // ===== SYMMETRY TESTS =====

    #[test]
    fn test_adjacency_is_symmetric() {
        let layout = Layout::with_scale(Orientation::FLAT, DVec2::new(14., 10.));
        let lattice = Lattice::new(HexGrid::unbounded(layout));
        for v in all_vertices(&lattice, &Axial::new(-3, 1).range(1)) {
            for u in lattice.adjacent_vertices(v) {
                assert!(lattice.adjacent_vertices(u).iter().any(|&w| lattice.vertices_equal(w, v)),
                    "{u} is adjacent to {v} but not the other way round");
            }
        }
    }

    // ===== OFF-GRID TESTS =====

    #[test]
    fn test_off_grid_point_has_no_neighbors() {
        let grid = HexGrid::hexagon(Layout::new(Orientation::POINTY, 10.), Axial::ORIGIN, 1);
        let lattice = Lattice::new(&grid);
        assert!(lattice.adjacent_vertices(DVec2::new(500., -500.)).is_empty());
    }

    #[test]
    fn test_non_vertex_point_has_no_neighbors() {
        let lattice = Lattice::new(HexGrid::unbounded(Layout::new(Orientation::POINTY, 10.)));
        assert!(lattice.adjacent_vertices(DVec2::new(1., 2.)).is_empty(), "Cell interior is not a vertex");
    }
}
