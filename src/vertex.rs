//! # Vertex Derivation and Identity
//!
//! A hex corner is shared by exactly three cells, so it is the centroid of
//! their centers. Sorting a cell's neighbors by angle around its center puts
//! each pair of cells meeting at a corner side by side, without knowing the
//! grid's orientation or offset scheme.
//!
//! The same corner is derived independently from each of its three cells.
//! The centers are added in cell order, so all three copies come out
//! bit-identical. Vertices from other sources (analytic corners, pointer
//! positions) still differ by rounding error, so comparisons go through
//! `VertexKey`, which rounds to a fixed number of decimal places.

use axial::Axial;

use crate::{adapter::GridAdapter, Lattice, Point};

/// Rounded vertex coordinates, usable as a map key.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexKey(i64, i64);

impl VertexKey {
    pub fn new(point: Point, precision: u32) -> Self {
        let scale = 10_f64.powi(precision as i32);
        // `as` saturates, and -0.0 lands on 0, so both signs of zero share a key
        VertexKey((point.x * scale).round() as i64, (point.y * scale).round() as i64)
    }
}

/// The six corners of one cell plus its neighbors in the same angular order.
///
/// `vertices[i]` lies between `neighbors[i]` and `neighbors[(i + 1) % 6]`, so
/// edge `i` (from `vertices[i]` to `vertices[i + 1]`) borders `neighbors[i + 1]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Corners {
    pub vertices: [Point; 6],
    pub neighbors: [Axial; 6],
}

impl Corners {
    /// The neighbor on the far side of edge `edge`.
    pub fn across(&self, edge: usize) -> Axial {
        self.neighbors[(edge + 1) % 6]
    }

    pub fn previous(&self, index: usize) -> Point {
        self.vertices[(index + 5) % 6]
    }

    pub fn next(&self, index: usize) -> Point {
        self.vertices[(index + 1) % 6]
    }
}

impl<G: GridAdapter> Lattice<G> {
    /// The six corners of `cell`, or `None` where the grid has no geometry:
    /// off-grid cells and cells without six on-grid neighbors.
    pub fn vertices_of(&self, cell: Axial) -> Option<[Point; 6]> {
        self.corners(cell).map(|it| it.vertices)
    }

    pub fn vertex_key(&self, point: Point) -> VertexKey {
        VertexKey::new(point, self.config.key_precision)
    }

    pub fn vertices_equal(&self, a: Point, b: Point) -> bool {
        self.vertex_key(a) == self.vertex_key(b)
    }

    pub(crate) fn corners(&self, cell: Axial) -> Option<Corners> {
        let center = self.grid.center_of(cell)?;
        let neighbors = self.grid.neighbors_of(cell);
        if neighbors.len() != 6 { return None; }

        let mut around = Vec::with_capacity(6);
        for neighbor in neighbors {
            let at = self.grid.center_of(neighbor)?;
            let d = at - center;
            assert!(d != Point::ZERO, "neighbor {neighbor} of {cell} shares its center");
            around.push((d.y.atan2(d.x), neighbor, at));
        }
        around.sort_by(|a, b| a.0.total_cmp(&b.0));

        let vertices = std::array::from_fn(|i| {
            let (_, p, a) = around[i];
            let (_, q, b) = around[(i + 1) % 6];
            // summed in cell order, so every sharing cell gets the same bits
            let mut triple = [(cell, center), (p, a), (q, b)];
            triple.sort_by_key(|it| it.0);
            (triple[0].1 + triple[1].1 + triple[2].1) / 3.
        });
        let neighbors = std::array::from_fn(|i| around[i].1);
        Some(Corners { vertices, neighbors })
    }

    /// Index of the vertex keyed `key` among `corners`, if the cell owns it.
    pub(crate) fn locate(&self, corners: &Corners, key: VertexKey) -> Option<usize> {
        corners.vertices.iter().position(|&it| self.vertex_key(it) == key)
    }
}
