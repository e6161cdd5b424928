use crate::astar::{astar, SearchFailure};
use crate::error::{PathError, PathResult};
use crate::{manhattan, Coordinate};
use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// An undirected connection of unit cost between two coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: Coordinate,
    pub b: Coordinate,
}

impl Edge {
    pub fn new(a: Coordinate, b: Coordinate) -> Edge {
        Edge { a, b }
    }
    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Edge {
        Edge::new(Coordinate::new(x1, y1), Coordinate::new(x2, y2))
    }
    /// Checks if both edges join the same two coordinates, in either orientation.
    pub fn matches(&self, other: &Edge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// [AdjacencyGraph] maps every coordinate that occurs in an edge to the coordinates it is
/// connected to. Keys keep the order in which they first appeared in the edge list, so anything
/// derived from the graph (components, search results) is reproducible.
///
/// Duplicate edges are kept as duplicate neighbour entries; the search tolerates them.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    adjacency: FxIndexMap<Coordinate, Vec<Coordinate>>,
}

impl AdjacencyGraph {
    /// Builds the adjacency structure, registering every edge in both directions. Self-loops
    /// make a coordinate its own neighbour.
    pub fn build<'a, I>(edges: I) -> AdjacencyGraph
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut adjacency: FxIndexMap<Coordinate, Vec<Coordinate>> = FxIndexMap::default();
        for edge in edges {
            adjacency.entry(edge.a).or_default().push(edge.b);
            adjacency.entry(edge.b).or_default().push(edge.a);
        }
        debug!("Built graph with {} coordinates", adjacency.len());
        AdjacencyGraph { adjacency }
    }
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.adjacency.contains_key(coordinate)
    }
    /// Neighbours of a coordinate in edge order. Coordinates outside the graph have none.
    pub fn neighbors(&self, coordinate: &Coordinate) -> &[Coordinate] {
        self.adjacency
            .get(coordinate)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
    pub fn is_adjacent(&self, a: &Coordinate, b: &Coordinate) -> bool {
        self.neighbors(a).contains(b)
    }
    /// Number of coordinates in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
    pub fn coordinates(&self) -> impl Iterator<Item = &Coordinate> {
        self.adjacency.keys()
    }
    /// Number of undirected edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
    /// Checks that `path` is non-empty, lies in the graph and only steps along edges.
    pub fn is_path(&self, path: &[Coordinate]) -> bool {
        !path.is_empty()
            && path.iter().all(|c| self.contains(c))
            && path
                .iter()
                .tuple_windows()
                .all(|(a, b)| self.is_adjacent(a, b))
    }
    /// Generates a [UnionFind] structure linking up every pair of neighbours.
    pub fn components(&self) -> Components {
        let mut sets = UnionFind::new(self.adjacency.len());
        for (ix, neighbours) in self.adjacency.values().enumerate() {
            for neighbour in neighbours {
                if let Some(neighbour_ix) = self.adjacency.get_index_of(neighbour) {
                    sets.union(ix, neighbour_ix);
                }
            }
        }
        Components {
            vertices: self.adjacency.keys().copied().collect(),
            sets,
        }
    }
    /// Runs A* from `start` to `goal` with unit edge costs and the Manhattan distance as
    /// heuristic. Neither endpoint is validated: a coordinate outside the graph behaves like
    /// one without neighbours.
    pub fn search(&self, start: Coordinate, goal: Coordinate) -> PathResult {
        self.search_bounded(start, goal, None)
    }
    pub(crate) fn search_bounded(
        &self,
        start: Coordinate,
        goal: Coordinate,
        max_expansions: Option<usize>,
    ) -> PathResult {
        debug!("Searching path from {} to {}", start, goal);
        astar(
            &start,
            |node| self.neighbors(node).iter().map(|&n| (n, 1i64)),
            |node| manhattan(node, &goal),
            |node| *node == goal,
            max_expansions,
        )
        .map(|(path, cost)| {
            debug!("Found path from {} to {} of {} steps", start, goal, cost);
            path
        })
        .map_err(|failure| match failure {
            SearchFailure::Exhausted => PathError::NoPath { start, goal },
            SearchFailure::ExpansionLimit { expanded } => {
                warn!(
                    "Gave up on path from {} to {} after {} expansions",
                    start, goal, expanded
                );
                PathError::ExpansionLimit { limit: expanded }
            }
        })
    }
}

/// Connected components of an [AdjacencyGraph], kept in a [UnionFind] over vertex indices.
#[derive(Clone, Debug)]
pub struct Components {
    vertices: FxIndexSet<Coordinate>,
    sets: UnionFind<usize>,
}

impl Default for Components {
    fn default() -> Components {
        Components {
            vertices: FxIndexSet::default(),
            sets: UnionFind::new(0),
        }
    }
}

impl Components {
    /// Retrieves the component id a given coordinate belongs to.
    pub fn component_of(&self, coordinate: &Coordinate) -> Option<usize> {
        self.vertices
            .get_index_of(coordinate)
            .map(|ix| self.sets.find(ix))
    }
    /// Checks if start and goal are on the same component. Coordinates outside the graph
    /// are only reachable from themselves.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if start == goal {
            return true;
        }
        match (self.component_of(start), self.component_of(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
    /// Number of distinct components.
    pub fn count(&self) -> usize {
        (0..self.vertices.len())
            .filter(|&ix| self.sets.find(ix) == ix)
            .count()
    }
}
