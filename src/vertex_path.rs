//! # Corridor-Constrained Vertex Paths
//!
//! Freehand lines snap to hex edges. The shortest route over the vertex
//! lattice can wander away from the user's drag, so the search is confined to
//! a corridor: the cells under samples taken along the straight drag, the
//! cells owning both snapped endpoints, and every neighbor of those.

use std::{
    collections::HashSet,
    hash::{Hash, Hasher},
};

use axial::Axial;
use log::{debug, trace};
use pathfinding::prelude::*;

use crate::{adapter::GridAdapter, vertex::VertexKey, Lattice, Point};

/// Edge costs are whole thousandths of a pixel so they are totally ordered.
const COST_SCALE: f64 = 1000.;

/// The cells and vertices a drawn line is allowed to follow.
#[derive(Clone, Debug, Default)]
pub struct Corridor {
    cells: Vec<Axial>,
    vertices: HashSet<VertexKey>,
}

impl Corridor {
    /// Corridor cells in sampling order: the spine along the drag, then the
    /// endpoint owners, then their neighbors.
    pub fn cells(&self) -> &[Axial] { &self.cells }

    pub fn contains_cell(&self, cell: Axial) -> bool {
        self.cells.contains(&cell)
    }

    pub fn contains_vertex(&self, key: VertexKey) -> bool {
        self.vertices.contains(&key)
    }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }
}

/// A lattice vertex during search; identity is the key, not the raw point.
#[derive(Clone, Copy, Debug)]
struct Waypoint {
    key: VertexKey,
    at: Point,
}

impl PartialEq for Waypoint {
    fn eq(&self, other: &Self) -> bool { self.key == other.key }
}

impl Eq for Waypoint {}

impl Hash for Waypoint {
    fn hash<H: Hasher>(&self, state: &mut H) { self.key.hash(state) }
}

impl<G: GridAdapter> Lattice<G> {
    /// The lattice vertex closest to `point`, looking at the corners of the
    /// cell under it and of that cell's neighbors.
    pub fn find_nearest_vertex(&self, point: Point) -> Option<Point> {
        self.snap(point).map(|(vertex, _)| vertex)
    }

    pub fn corridor(&self, start: Point, end: Point) -> Corridor {
        let owners = [self.snap(start), self.snap(end)].into_iter().flatten().map(|(_, cell)| cell);
        self.corridor_around(start, end, owners)
    }

    /// Lattice points from the vertex nearest `start` to the vertex nearest
    /// `end`, following edges inside the corridor of the drag.
    ///
    /// Never empty: when either end can't be snapped, or no path fits the
    /// corridor, the straight `[start, end]` segment comes back instead.
    pub fn find_vertex_path(&self, start: Point, end: Point) -> Vec<Point> {
        let (Some((from, from_cell)), Some((to, to_cell))) = (self.snap(start), self.snap(end)) else {
            debug!("vertex path {start} -> {end} leaves the lattice, drawing it straight");
            return vec![start, end];
        };
        let corridor = self.corridor_around(start, end, [from_cell, to_cell]);
        let from = Waypoint { key: self.vertex_key(from), at: from };
        let goal = self.vertex_key(to);
        if !corridor.contains_vertex(from.key) || !corridor.contains_vertex(goal) {
            debug!("snapped endpoints of {start} -> {end} fall outside their corridor");
            return vec![start, end];
        }

        let found = astar(
                &from,
                |&current| self.adjacent_vertices(current.at).into_iter()
                    .map(|at| Waypoint { key: self.vertex_key(at), at })
                    .filter(|next| corridor.contains_vertex(next.key))
                    .map(|next| (next, cost(current.at, next.at)))
                    .collect::<Vec<_>>(),
                |it| heuristic(it.at, to),
                |it| it.key == goal
            );
        match found {
            Some((path, _)) => path.into_iter().map(|it| it.at).collect(),
            None => {
                debug!("no vertex path {from:?} -> {to} inside corridor of {} cells", corridor.cells.len());
                vec![start, end]
            }
        }
    }

    /// Nearest vertex to `point` and the cell it was taken from.
    fn snap(&self, point: Point) -> Option<(Point, Axial)> {
        let cell = self.grid.cell_at(point);
        let mut best: Option<(f64, Point, Axial)> = None;
        for candidate in std::iter::once(cell).chain(self.grid.neighbors_of(cell)) {
            let Some(corners) = self.corners(candidate) else { continue };
            for vertex in corners.vertices {
                let d = vertex.distance_squared(point);
                // strict so the first candidate wins a tie
                if best.is_none_or(|(nearest, ..)| d < nearest) {
                    best = Some((d, vertex, candidate));
                }
            }
        }
        best.map(|(_, vertex, cell)| (vertex, cell))
    }

    fn corridor_around(&self, start: Point, end: Point, owners: impl IntoIterator<Item = Axial>) -> Corridor {
        let steps = ((start.distance(end) / self.config.corridor_sample_spacing).ceil() as usize).max(1);
        let mut seen = HashSet::new();
        let mut spine = Vec::new();
        for i in 0..=steps {
            let cell = self.grid.cell_at(start.lerp(end, i as f64 / steps as f64));
            if seen.insert(cell) { spine.push(cell); }
        }
        for cell in owners {
            if seen.insert(cell) { spine.push(cell); }
        }

        let mut cells = spine.clone();
        for cell in spine {
            for neighbor in self.grid.neighbors_of(cell) {
                if seen.insert(neighbor) { cells.push(neighbor); }
            }
        }
        let vertices = cells.iter()
            .filter_map(|&cell| self.vertices_of(cell))
            .flatten()
            .map(|it| self.vertex_key(it))
            .collect::<HashSet<_>>();
        trace!("corridor {start} -> {end}: {steps} samples, {} cells, {} vertices", cells.len(), vertices.len());
        Corridor { cells, vertices }
    }
}

fn cost(a: Point, b: Point) -> u64 {
    (a.distance(b) * COST_SCALE).round() as u64
}

fn heuristic(a: Point, b: Point) -> u64 {
    (a.distance(b) * COST_SCALE).floor() as u64
}
