//! # hex-lattice
//!
//! Geometry and graph queries over the corners of a hex grid, for hosts that
//! only expose three primitives: the cell under a point, the center of a cell
//! and the neighbors of a cell (see [`GridAdapter`]).
//!
//! Corners are never read from a hex-size constant. They are derived from
//! the centers of the three cells that meet there, so any orientation or
//! offset scheme works, including squashed isometric boards.
//!
//! ```rust
//! use hex_lattice::{Axial, HexGrid, Lattice, Layout, Orientation};
//!
//! let grid = HexGrid::unbounded(Layout::new(Orientation::POINTY, 10.));
//! let lattice = Lattice::new(&grid);
//!
//! let corners = lattice.vertices_of(Axial::ORIGIN).unwrap();
//! assert_eq!(lattice.adjacent_vertices(corners[0]).len(), 3);
//! assert_eq!(lattice.find_hex_path(Axial::ORIGIN, Axial::new(3, -1)).len(), 4);
//! ```

mod adapter;
mod adjacency;
mod boundary;
mod cell_path;
mod config;
mod error;
mod grid;
mod vertex;
mod vertex_path;

pub use axial::{Axial, Convert, Layout, Orientation};
pub use glam::DVec2;

pub use adapter::GridAdapter;
pub use config::LatticeConfig;
pub use error::LatticeError;
pub use grid::HexGrid;
pub use hit_test::{box_contains, box_intersects_segment, distance_to_line, Bounds, Drawing, Segment};
pub use vertex::VertexKey;
pub use vertex_path::Corridor;

/// A pixel-space location. Lattice vertices are points too.
pub type Point = DVec2;

/// Query engine over a host grid.
///
/// Holds the adapter and its tuning, nothing else: every query re-reads the
/// adapter, so a host may mutate its grid between calls.
#[derive(Clone, Debug)]
pub struct Lattice<G> {
    grid: G,
    config: LatticeConfig,
}

impl<G: GridAdapter> Lattice<G> {
    pub fn new(grid: G) -> Self {
        Self { grid, config: LatticeConfig::default() }
    }

    pub fn with_config(grid: G, config: LatticeConfig) -> Result<Self, LatticeError> {
        config.validate()?;
        Ok(Self { grid, config })
    }

    pub fn grid(&self) -> &G { &self.grid }
    pub fn config(&self) -> &LatticeConfig { &self.config }
}
