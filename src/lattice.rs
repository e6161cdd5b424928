//! Edge lists for rectangular 4-connected grids, optionally with edges knocked out to form
//! walls.
use crate::graph::Edge;
use rand::Rng;

/// Width and height of the [demo_edges] map.
pub const DEMO_SIZE: i32 = 10;
/// Chance that [random_lattice_edges] leaves out a candidate edge.
pub const DEFAULT_BLOCK_PROBABILITY: f64 = 0.2;

const DEMO_WALLS: [(i32, i32, i32, i32); 8] = [
    (3, 3, 3, 4),
    (3, 4, 3, 5),
    (3, 5, 3, 6),
    (6, 2, 7, 2),
    (7, 2, 8, 2),
    (5, 6, 6, 6),
    (6, 6, 7, 6),
    (7, 6, 8, 6),
];

/// Visits every candidate edge of a `width` x `height` lattice column by column, offering the
/// horizontal edge of a cell before its vertical one.
fn lattice_edges_filtered<F>(width: i32, height: i32, mut keep: F) -> Vec<Edge>
where
    F: FnMut(&Edge) -> bool,
{
    let mut edges = Vec::new();
    for x in 0..width {
        for y in 0..height {
            if x < width - 1 {
                let edge = Edge::from_coords(x, y, x + 1, y);
                if keep(&edge) {
                    edges.push(edge);
                }
            }
            if y < height - 1 {
                let edge = Edge::from_coords(x, y, x, y + 1);
                if keep(&edge) {
                    edges.push(edge);
                }
            }
        }
    }
    edges
}

/// All edges of a fully connected `width` x `height` grid with corners (0, 0) and
/// (width - 1, height - 1).
pub fn lattice_edges(width: i32, height: i32) -> Vec<Edge> {
    lattice_edges_filtered(width, height, |_| true)
}

/// Keeps every edge that does not match one of the `obstacles`, in either orientation.
pub fn remove_edges(edges: &[Edge], obstacles: &[Edge]) -> Vec<Edge> {
    edges
        .iter()
        .filter(|edge| !obstacles.iter().any(|o| o.matches(edge)))
        .copied()
        .collect()
}

/// A lattice where each candidate edge is independently dropped with `block_probability`.
pub fn random_lattice_edges<R>(
    width: i32,
    height: i32,
    block_probability: f64,
    rng: &mut R,
) -> Vec<Edge>
where
    R: Rng + ?Sized,
{
    lattice_edges_filtered(width, height, |_| rng.gen::<f64>() > block_probability)
}

/// The 10x10 sample map: a full lattice with a vertical wall at x = 3 and two horizontal walls.
pub fn demo_edges() -> Vec<Edge> {
    let walls = DEMO_WALLS.map(|(x1, y1, x2, y2)| Edge::from_coords(x1, y1, x2, y2));
    remove_edges(&lattice_edges(DEMO_SIZE, DEMO_SIZE), &walls)
}
