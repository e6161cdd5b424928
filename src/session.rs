//! Selection state of an interactive front-end: the first picked coordinate becomes the start,
//! the second the goal (which immediately triggers a search) and a third pick starts over.
//! The session owns its [Pathfinder]; searches only ever borrow the graph.
use crate::error::{Endpoint, PathError, PathResult};
use crate::graph::Edge;
use crate::pathfinder::Pathfinder;
use crate::Coordinate;
use log::info;

/// What a call to [Session::select] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    StartSet(Coordinate),
    /// The goal was set and a path computed right away.
    GoalSet {
        goal: Coordinate,
        result: PathResult,
    },
    /// Both endpoints were already set; the selection was cleared and a new start picked.
    Restarted(Coordinate),
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    pathfinder: Pathfinder,
    start: Option<Coordinate>,
    goal: Option<Coordinate>,
    current_path: Option<Vec<Coordinate>>,
}

impl Session {
    pub fn new(pathfinder: Pathfinder) -> Session {
        Session {
            pathfinder,
            ..Default::default()
        }
    }
    pub fn pathfinder(&self) -> &Pathfinder {
        &self.pathfinder
    }
    pub fn pathfinder_mut(&mut self) -> &mut Pathfinder {
        &mut self.pathfinder
    }
    pub fn start(&self) -> Option<Coordinate> {
        self.start
    }
    pub fn goal(&self) -> Option<Coordinate> {
        self.goal
    }
    /// The path found by the last successful search since the selection was last cleared.
    pub fn current_path(&self) -> Option<&[Coordinate]> {
        self.current_path.as_deref()
    }

    /// Picks a coordinate. Coordinates that are not vertices of the graph are rejected and leave
    /// the selection unchanged.
    pub fn select(&mut self, coordinate: Coordinate) -> Result<Selection, PathError> {
        if !self.pathfinder.contains(&coordinate) {
            let endpoint = match (self.start, self.goal) {
                (Some(_), None) => Endpoint::Goal,
                _ => Endpoint::Start,
            };
            info!("{} is not a valid node", coordinate);
            return Err(PathError::InvalidEndpoint {
                endpoint,
                coordinate,
            });
        }
        match (self.start, self.goal) {
            (Some(start), None) => {
                self.goal = Some(coordinate);
                info!("Goal set to {}", coordinate);
                let result = self.compute(start, coordinate);
                Ok(Selection::GoalSet {
                    goal: coordinate,
                    result,
                })
            }
            (Some(_), Some(_)) => {
                self.clear();
                self.start = Some(coordinate);
                info!("Start reset to {}", coordinate);
                Ok(Selection::Restarted(coordinate))
            }
            (None, _) => {
                self.start = Some(coordinate);
                info!("Start set to {}", coordinate);
                Ok(Selection::StartSet(coordinate))
            }
        }
    }

    /// Searches between the selected endpoints. Returns [None] while either is missing.
    pub fn find_path(&mut self) -> Option<PathResult> {
        let (start, goal) = (self.start?, self.goal?);
        Some(self.compute(start, goal))
    }

    fn compute(&mut self, start: Coordinate, goal: Coordinate) -> PathResult {
        let result = self.pathfinder.get_path(start, goal);
        self.current_path = result.as_ref().ok().cloned();
        result
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.goal = None;
        self.current_path = None;
    }

    /// Swaps in a new set of edges, e.g. a freshly generated random grid, and clears the
    /// selection.
    pub fn set_edges(&mut self, edges: &[Edge]) {
        self.pathfinder.set_edges(edges);
        self.clear();
    }
}
