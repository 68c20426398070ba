use std::collections::HashSet;

use axial::Axial;
use log::debug;
use pathfinding::prelude::*;

use crate::{adapter::GridAdapter, Lattice};

impl<G: GridAdapter> Lattice<G> {
    pub fn hex_distance(&self, a: Axial, b: Axial) -> u32 {
        self.grid.hex_distance(a, b)
    }

    /// Every on-grid cell within `radius` of `center`, flooded through the
    /// grid's adjacency. Empty when `center` is off-grid.
    pub fn hexes_in_range(&self, center: Axial, radius: u32) -> Vec<Axial> {
        if self.grid.center_of(center).is_none() { return Vec::new(); }
        bfs_reach(center, |&cell| self.grid.neighbors_of(cell).into_iter()
                .filter(|&it| self.hex_distance(center, it) <= radius && self.grid.center_of(it).is_some())
                .collect::<Vec<_>>())
            .collect()
    }

    /// Cells reachable from `origin` in at most `steps` moves.
    ///
    /// Unlike `hexes_in_range`, movement has to go around holes and walls.
    pub fn reachable_within(&self, origin: Axial, steps: u32) -> Vec<Axial> {
        if self.grid.center_of(origin).is_none() { return Vec::new(); }
        // first visit is the shallowest, so later ones are never expanded
        let mut seen = HashSet::from([origin]);
        bfs_reach((origin, 0), |&(cell, depth)| {
                if depth == steps { return Vec::new(); }
                self.passable(cell)
                    .filter(|&it| seen.insert(it))
                    .map(|it| (it, depth + 1))
                    .collect()
            })
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Shortest path from `a` to `b` inclusive, or empty if `b` can't be reached.
    pub fn find_hex_path(&self, a: Axial, b: Axial) -> Vec<Axial> {
        if self.grid.center_of(a).is_none() || self.grid.center_of(b).is_none() {
            debug!("hex path {a} -> {b} has an off-grid endpoint");
            return Vec::new();
        }
        let (path, _) = astar(
                &a,
                |&cell| self.passable(cell).map(|it| (it, 1_u32)),
                |&cell| self.hex_distance(cell, b),
                |&cell| cell == b
            ).unwrap_or_else(|| {
                debug!("no hex path {a} -> {b}");
                Default::default()
            });
        path
    }

    fn passable(&self, cell: Axial) -> impl Iterator<Item = Axial> + '_ {
        self.grid.neighbors_of(cell).into_iter().filter(move |&it| self.grid.center_of(it).is_some())
    }
}
