use axial::Axial;

use crate::Point;

/// The grid primitives a host exposes to the engine.
///
/// Orientation and offset conventions stay on the host side; the engine only
/// relies on the relative placement of cell centers.
pub trait GridAdapter {
    /// The cell owning `point`. May be off-grid, in which case `center_of` reports `None`.
    fn cell_at(&self, point: Point) -> Axial;

    fn center_of(&self, cell: Axial) -> Option<Point>;

    /// On-grid neighbors of `cell`; six for an interior cell.
    fn neighbors_of(&self, cell: Axial) -> Vec<Axial>;

    /// Step distance between cells. Hosts with their own addressing override this.
    fn hex_distance(&self, a: Axial, b: Axial) -> u32 {
        a.distance(&b)
    }
}

impl<G: GridAdapter + ?Sized> GridAdapter for &G {
    fn cell_at(&self, point: Point) -> Axial { (**self).cell_at(point) }
    fn center_of(&self, cell: Axial) -> Option<Point> { (**self).center_of(cell) }
    fn neighbors_of(&self, cell: Axial) -> Vec<Axial> { (**self).neighbors_of(cell) }
    fn hex_distance(&self, a: Axial, b: Axial) -> u32 { (**self).hex_distance(a, b) }
}
