use crate::error::{Endpoint, PathError, PathResult};
use crate::graph::{AdjacencyGraph, Components, Edge};
use crate::Coordinate;
use log::info;

fn validate_endpoints(
    graph: &AdjacencyGraph,
    start: Coordinate,
    goal: Coordinate,
) -> Result<(), PathError> {
    for (endpoint, coordinate) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if !graph.contains(&coordinate) {
            info!("{} {} is not part of the graph", endpoint, coordinate);
            return Err(PathError::InvalidEndpoint {
                endpoint,
                coordinate,
            });
        }
    }
    Ok(())
}

/// Computes a shortest path after checking that both endpoints are vertices of `graph`.
pub fn find_path(graph: &AdjacencyGraph, start: Coordinate, goal: Coordinate) -> PathResult {
    validate_endpoints(graph, start, goal)?;
    graph.search(start, goal)
}

/// [Pathfinder] owns an [AdjacencyGraph] together with its [Components] so that queries between
/// disconnected coordinates are answered without flood-filling the start's component.
/// The public fields configure how [get_path](Self::get_path) searches.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    graph: AdjacencyGraph,
    components: Components,
    /// Upper bound on the nodes a single search may expand, [None] for no bound.
    pub max_expansions: Option<usize>,
    /// Whether to consult the components before searching.
    pub check_components: bool,
}

impl Default for Pathfinder {
    fn default() -> Pathfinder {
        Pathfinder {
            graph: AdjacencyGraph::default(),
            components: Components::default(),
            max_expansions: None,
            check_components: true,
        }
    }
}

impl Pathfinder {
    pub fn new(edges: &[Edge]) -> Pathfinder {
        Pathfinder::from_graph(AdjacencyGraph::build(edges))
    }
    pub fn from_graph(graph: AdjacencyGraph) -> Pathfinder {
        info!("Generating connected components");
        Pathfinder {
            components: graph.components(),
            graph,
            ..Default::default()
        }
    }
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }
    pub fn components(&self) -> &Components {
        &self.components
    }
    /// Replaces the graph and regenerates the components. Configuration is kept.
    pub fn set_edges(&mut self, edges: &[Edge]) {
        self.graph = AdjacencyGraph::build(edges);
        info!("Edges replaced: regenerating components");
        self.components = self.graph.components();
    }
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.graph.contains(coordinate)
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        self.components.reachable(start, goal)
    }
    /// Computes a shortest path from start to goal. Fails with
    /// [InvalidEndpoint](PathError::InvalidEndpoint) if either is not in the graph,
    /// [NoPath](PathError::NoPath) if they are not connected and
    /// [ExpansionLimit](PathError::ExpansionLimit) if [max_expansions](Self::max_expansions)
    /// is exceeded.
    pub fn get_path(&self, start: Coordinate, goal: Coordinate) -> PathResult {
        validate_endpoints(&self.graph, start, goal)?;
        if self.check_components && !self.reachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(PathError::NoPath { start, goal });
        }
        self.graph.search_bounded(start, goal, self.max_expansions)
    }
}
