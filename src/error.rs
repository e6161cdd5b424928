use crate::Coordinate;
use core::fmt;

/// Outcome of a path query: the coordinates from start to goal inclusive, or why there is none.
pub type PathResult = Result<Vec<Coordinate>, PathError>;

/// Which end of a query a coordinate was meant to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Errors returned by path queries. None of them are fatal; the graph is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The start or goal coordinate is not a vertex of the graph.
    #[error("{endpoint} {coordinate} is not part of the available paths")]
    InvalidEndpoint {
        endpoint: Endpoint,
        coordinate: Coordinate,
    },

    /// Both endpoints exist but no sequence of edges connects them.
    #[error("no path found between {start} and {goal}")]
    NoPath { start: Coordinate, goal: Coordinate },

    /// The search expanded the configured maximum number of nodes without reaching the goal.
    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },
}
