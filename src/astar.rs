//! A generic A* search in the style of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! except that nodes are finalized in a closed set. A node may sit in the open set several times
//! when a cheaper route to it turns up later; entries for nodes that are already closed are
//! discarded when popped.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// Why [astar] stopped without reaching a goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// The open set ran empty.
    Exhausted,
    /// The configured number of expansions was used up.
    ExpansionLimit { expanded: usize },
}

/// Open set entry. `index` points into the search arena and doubles as insertion sequence
/// number since every push allocates a new arena slot.
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the entry furthest from the start,
        // then the entry that was pushed first. The last step makes the pop order fully
        // deterministic.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                Ordering::Equal => other.index.cmp(&self.index),
                s => s,
            },
            s => s,
        }
    }
}

/// Search-local record of a discovered node and the arena slot it was reached from.
struct SearchNode<N> {
    node: N,
    parent: usize,
}

fn reverse_path<N: Clone>(arena: &[SearchNode<N>], start: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(arena.get(start), |n| arena.get(n.parent))
        .map(|n| n.node.clone())
        .collect();
    path.reverse();
    path
}

/// Computes a minimum-cost path from `start` to the first node for which `success` holds.
///
/// `successors` yields neighbouring nodes with the cost of moving there and `heuristic` must
/// never overestimate the remaining cost. A successor is only pushed when no open entry for the
/// same node already has an equal or lower cost. When `max_expansions` is set, the search gives
/// up after expanding that many nodes.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> Result<(Vec<N>, C), SearchFailure>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut arena = vec![SearchNode {
        node: start.clone(),
        parent: usize::MAX,
    }];
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    // Lowest cost among the open entries of each node that is not closed yet.
    let mut open_costs: FxIndexMap<N, C> = FxIndexMap::default();
    open_costs.insert(start.clone(), Zero::zero());
    let mut closed: FxHashSet<N> = FxHashSet::default();
    let mut expanded = 0;

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let node = arena[index].node.clone();
        // Stale entry, the node was already reached more cheaply.
        if !closed.insert(node.clone()) {
            continue;
        }
        if success(&node) {
            debug!("Goal reached after {} expansions", expanded);
            return Ok((reverse_path(&arena, index), cost));
        }
        if max_expansions.is_some_and(|limit| expanded >= limit) {
            return Err(SearchFailure::ExpansionLimit { expanded });
        }
        expanded += 1;

        for (successor, move_cost) in successors(&node) {
            if closed.contains(&successor) {
                continue;
            }
            let new_cost = cost + move_cost;
            match open_costs.entry(successor.clone()) {
                Vacant(e) => {
                    e.insert(new_cost);
                }
                Occupied(mut e) => {
                    if *e.get() <= new_cost {
                        continue;
                    }
                    e.insert(new_cost);
                }
            }
            let h = heuristic(&successor);
            let n = arena.len();
            arena.push(SearchNode {
                node: successor,
                parent: index,
            });
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!("Open set exhausted after {} expansions", expanded);
    Err(SearchFailure::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_successors(n: &i32) -> Vec<(i32, i32)> {
        [n - 1, n + 1]
            .into_iter()
            .filter(|m| (0..10).contains(m))
            .map(|m| (m, 1))
            .collect()
    }

    #[test]
    fn test_holder_ordering() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, cost, index) in [(5, 1, 0), (4, 0, 1), (4, 2, 2), (4, 2, 3)] {
            heap.push(SmallestCostHolder {
                estimated_cost,
                cost,
                index,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|h| h.index)).collect();
        assert_eq!(order, vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_line_search() {
        let (path, cost) =
            astar(&2, line_successors, |n| (7 - n).abs(), |n| *n == 7, None).unwrap();
        assert_eq!(path, vec![2, 3, 4, 5, 6, 7]);
        assert_eq!(cost, 5);
    }

    #[test]
    fn test_start_is_goal() {
        let result = astar(&3, line_successors, |_| 0, |n| *n == 3, Some(0));
        assert_eq!(result, Ok((vec![3], 0)));
    }

    #[test]
    fn test_exhausted() {
        let result = astar(&3, line_successors, |_| 0, |n| *n == 42, None);
        assert_eq!(result, Err(SearchFailure::Exhausted));
    }

    #[test]
    fn test_expansion_limit() {
        let result = astar(&0, line_successors, |n| 9 - n, |n| *n == 9, Some(4));
        assert_eq!(result, Err(SearchFailure::ExpansionLimit { expanded: 4 }));
    }

    #[test]
    fn test_equal_cost_route_not_pushed_again() {
        // Node 3 is reached with cost 2 both through 1 and through 2.
        let successors = |n: &u8| -> Vec<(u8, u32)> {
            match *n {
                0 => vec![(1, 1), (2, 1)],
                1 | 2 => vec![(3, 1)],
                3 => vec![(4, 1)],
                _ => vec![],
            }
        };
        // The heuristic is evaluated once for the start and once per push.
        let mut pushes = 0;
        let result = astar(
            &0,
            successors,
            |_| {
                pushes += 1;
                0
            },
            |n| *n == 4,
            None,
        );
        assert_eq!(result, Ok((vec![0, 1, 3, 4], 3)));
        assert_eq!(pushes, 5);
    }

    #[test]
    fn test_cheaper_route_found_later() {
        // Moving 0 -> 1 costs 10 directly but only 2 through node 2.
        let successors = |n: &u8| -> Vec<(u8, u32)> {
            match *n {
                0 => vec![(1, 10), (2, 1)],
                2 => vec![(1, 1)],
                _ => vec![],
            }
        };
        let (path, cost) = astar(&0, successors, |_| 0, |n| *n == 1, None).unwrap();
        assert_eq!(path, vec![0, 2, 1]);
        assert_eq!(cost, 2);
    }
}
