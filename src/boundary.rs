use std::collections::{HashMap, HashSet};

use axial::Axial;

use crate::{adapter::GridAdapter, hit_test::Segment, vertex::VertexKey, Lattice, Point};

impl<G: GridAdapter> Lattice<G> {
    /// Outline of a filled area: every cell edge whose far side is not in `cells`.
    ///
    /// Edges shared by two filled cells are dropped. Cells without geometry
    /// contribute nothing. Segments wind the same way around their own cell
    /// and come out in cell iteration order.
    pub fn boundary_edges(&self, cells: &HashSet<Axial>) -> Vec<Segment> {
        let mut segments = Vec::new();
        for &cell in cells {
            let Some(corners) = self.corners(cell) else { continue };
            for edge in 0..6 {
                if cells.contains(&corners.across(edge)) { continue; }
                segments.push(Segment::new(corners.vertices[edge], corners.next(edge)));
            }
        }
        segments
    }

    /// `boundary_edges` chained into polylines, one per outline or hole.
    ///
    /// A closed loop does not repeat its first point. Loops come back open
    /// only where missing geometry breaks the outline.
    pub fn boundary_loops(&self, cells: &HashSet<Axial>) -> Vec<Vec<Point>> {
        let segments = self.boundary_edges(cells);
        let by_start: HashMap<VertexKey, usize> = segments.iter().enumerate()
            .map(|(i, it)| (self.vertex_key(it.start), i))
            .collect();

        let mut used = vec![false; segments.len()];
        let mut loops = Vec::new();
        for first in 0..segments.len() {
            if used[first] { continue; }
            let mut points = Vec::new();
            let mut at = first;
            loop {
                used[at] = true;
                points.push(segments[at].start);
                match by_start.get(&self.vertex_key(segments[at].end)) {
                    Some(&next) if !used[next] => at = next,
                    Some(_) => break,
                    None => {
                        points.push(segments[at].end);
                        break;
                    }
                }
            }
            loops.push(points);
        }
        loops
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use axial::{Layout, Orientation};
    use glam::DVec2;

    use super::*;
    use crate::HexGrid;

    fn lattice() -> Lattice<HexGrid> {
        Lattice::new(HexGrid::unbounded(Layout::new(Orientation::POINTY, 10.)))
    }

    fn set(cells: &[Axial]) -> HashSet<Axial> {
        cells.iter().copied().collect()
    }

    // ===== EDGE TESTS =====

    #[test]
    fn test_single_cell_has_six_edges() {
        let lattice = lattice();
        assert_eq!(lattice.boundary_edges(&set(&[Axial::new(2, 3)])).len(), 6);
    }

    #[test]
    fn test_unit_hexagon_outline_is_closed() {
        // neighbor centers one unit from the origin
        let lattice = Lattice::new(HexGrid::unbounded(Layout::new(Orientation::POINTY, 1. / 3_f64.sqrt())));
        let segments = lattice.boundary_edges(&set(&[Axial::ORIGIN]));
        assert_eq!(segments.len(), 6);
        for it in &segments {
            assert!(segments.iter().any(|other| lattice.vertices_equal(it.end, other.start)),
                "Segment ending at {} has no successor", it.end);
            assert!(segments.iter().any(|other| lattice.vertices_equal(it.start, other.end)),
                "Segment starting at {} has no predecessor", it.start);
            assert_relative_eq!(it.length(), 1. / 3_f64.sqrt(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_shared_edge_is_suppressed() {
        let lattice = lattice();
        let pair = set(&[Axial::ORIGIN, Axial::new(1, 0)]);
        let segments = lattice.boundary_edges(&pair);
        assert_eq!(segments.len(), 10);

        // the shared edge is the vertical one halfway between the two centers
        let midpoint_x = 5. * 3_f64.sqrt();
        assert!(segments.iter().all(|it| (it.start.x - midpoint_x).abs() > 1e-6
                || (it.end.x - midpoint_x).abs() > 1e-6),
            "Edge between the two cells should not be drawn");
    }

    #[test]
    fn test_flower_outline_counts() {
        let lattice = lattice();
        let flower = set(&Axial::ORIGIN.range(1));
        assert_eq!(lattice.boundary_edges(&flower).len(), 18);
    }

    #[test]
    fn test_empty_set_has_no_edges() {
        assert!(lattice().boundary_edges(&HashSet::new()).is_empty());
    }

    #[test]
    fn test_cells_without_geometry_are_skipped() {
        let grid = HexGrid::hexagon(Layout::new(Orientation::FLAT, 10.), Axial::ORIGIN, 1);
        let lattice = Lattice::new(&grid);
        let edges = lattice.boundary_edges(&set(&[Axial::ORIGIN, Axial::new(1, 0), Axial::new(9, 9)]));
        assert_eq!(edges.len(), 5, "Only the interior cell has geometry, minus its filled side");
    }

    // ===== LOOP TESTS =====

    #[test]
    fn test_single_cell_forms_one_closed_loop() {
        let lattice = lattice();
        let loops = lattice.boundary_loops(&set(&[Axial::ORIGIN]));
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].len(), 6);
    }

    #[test]
    fn test_ring_has_outline_and_hole() {
        let lattice = lattice();
        let ring = set(&Axial::ORIGIN.ring(1));
        let mut loops = lattice.boundary_loops(&ring);
        loops.sort_by_key(Vec::len);
        assert_eq!(loops.len(), 2);
        assert_eq!(loops[0].len(), 6, "The hole is the missing center cell");
        assert_eq!(loops[1].len(), 18);
        for v in &loops[0] {
            assert_relative_eq!(v.distance(DVec2::ZERO), 10., epsilon = 1e-9);
        }
    }

    #[test]
    fn test_separate_cells_form_separate_loops() {
        let lattice = lattice();
        let loops = lattice.boundary_loops(&set(&[Axial::ORIGIN, Axial::new(3, 0)]));
        assert_eq!(loops.len(), 2);
        assert!(loops.iter().all(|it| it.len() == 6));
    }
}
