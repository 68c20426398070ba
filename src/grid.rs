//! # HexGrid: Reference Grid Adapter
//!
//! A `GridAdapter` backed by an `axial::Layout` and an optional tile set.
//! Without a tile set every cell is on-grid; with one, only stored cells have
//! a center and cells along the edge of the set report fewer than six
//! neighbors.

use std::collections::HashSet;

use axial::{Axial, Convert, Layout};

use crate::{adapter::GridAdapter, Point};

#[derive(Clone, Debug)]
pub struct HexGrid {
    layout: Layout,
    tiles: Option<HashSet<Axial>>,
}

impl HexGrid {
    pub fn unbounded(layout: Layout) -> Self {
        Self { layout, tiles: None }
    }

    /// A hexagonal board of every cell within `radius` of `center`.
    pub fn hexagon(layout: Layout, center: Axial, radius: u32) -> Self {
        Self::from_cells(layout, center.range(radius))
    }

    pub fn from_cells(layout: Layout, cells: impl IntoIterator<Item = Axial>) -> Self {
        Self { layout, tiles: Some(cells.into_iter().collect()) }
    }

    pub fn layout(&self) -> &Layout { &self.layout }

    pub fn contains(&self, cell: Axial) -> bool {
        self.tiles.as_ref().is_none_or(|tiles| tiles.contains(&cell))
    }

    /// Adds a cell to a bounded grid. Unbounded grids already contain every cell.
    pub fn insert(&mut self, cell: Axial) {
        if let Some(tiles) = self.tiles.as_mut() { tiles.insert(cell); }
    }

    /// Removes a cell from a bounded grid. Unbounded grids are left as they are.
    pub fn remove(&mut self, cell: Axial) -> bool {
        self.tiles.as_mut().is_some_and(|tiles| tiles.remove(&cell))
    }

    pub fn tile_count(&self) -> Option<usize> {
        self.tiles.as_ref().map(HashSet::len)
    }
}

impl GridAdapter for HexGrid {
    fn cell_at(&self, point: Point) -> Axial {
        self.layout.convert(point)
    }

    fn center_of(&self, cell: Axial) -> Option<Point> {
        self.contains(cell).then(|| self.layout.convert(cell))
    }

    fn neighbors_of(&self, cell: Axial) -> Vec<Axial> {
        cell.neighbors().into_iter().filter(|&it| self.contains(it)).collect()
    }
}
