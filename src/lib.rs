//! # edge_astar
//!
//! Shortest paths over an explicit set of undirected, unit-cost edges between integer
//! coordinates. The edges are turned into an [AdjacencyGraph] once, after which any number of
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) queries can be run against it. The
//! heuristic is the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), which
//! never overestimates on a 4-connected grid, so the first path reaching the goal is a
//! shortest one. Ties between equally promising nodes are broken deterministically, making
//! repeated queries return identical paths.
//!
//! [Pathfinder] additionally pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
mod astar;
mod error;
mod graph;
pub mod lattice;
mod pathfinder;
pub mod session;

pub use crate::astar::{astar, SearchFailure};
pub use crate::error::{Endpoint, PathError, PathResult};
pub use crate::graph::{AdjacencyGraph, Components, Edge};
pub use crate::pathfinder::{find_path, Pathfinder};

use grid_util::point::Point;

/// Vertex identity of the graph: an integer `(x, y)` pair.
pub type Coordinate = Point;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two coordinates.
/// Computed in [i64] since coordinates at opposite ends of the [i32] range are further apart
/// than [i32::MAX].
#[inline]
pub fn manhattan(a: &Coordinate, b: &Coordinate) -> i64 {
    (i64::from(a.x) - i64::from(b.x)).abs() + (i64::from(a.y) - i64::from(b.y)).abs()
}

/// Turns a list of edges into an [AdjacencyGraph]. The edges themselves are left untouched.
pub fn build_graph(edges: &[Edge]) -> AdjacencyGraph {
    AdjacencyGraph::build(edges)
}

/// Number of steps taken along a path, which is its cost since every edge costs one.
pub fn path_cost(path: &[Coordinate]) -> usize {
    path.len().saturating_sub(1)
}
