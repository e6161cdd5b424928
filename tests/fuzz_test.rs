/// Fuzzes the search by checking on many random lattices that a path is found exactly when the
/// goal lies in the start's connected component, that it is as short as a breadth-first search
/// says it can be, and that it only steps along edges of the graph.
use edge_astar::lattice::random_lattice_edges;
use edge_astar::{
    build_graph, find_path, path_cost, AdjacencyGraph, Coordinate, Edge, PathError, Pathfinder,
};
use fxhash::FxHashMap;
use rand::prelude::*;
use std::collections::VecDeque;

fn bfs_distance(graph: &AdjacencyGraph, start: Coordinate, goal: Coordinate) -> Option<usize> {
    let mut distances: FxHashMap<Coordinate, usize> = FxHashMap::default();
    let mut queue = VecDeque::new();
    distances.insert(start, 0);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        let d = distances[&current];
        if current == goal {
            return Some(d);
        }
        for &n in graph.neighbors(&current) {
            if !distances.contains_key(&n) {
                distances.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

fn random_point(n: i32, rng: &mut StdRng) -> Coordinate {
    Coordinate::new(rng.gen_range(0..n), rng.gen_range(0..n))
}

fn visualize_edges(edges: &[Edge], n: i32, start: &Coordinate, end: &Coordinate) {
    let graph = build_graph(edges);
    for y in (0..n).rev() {
        let mut row = String::new();
        let mut below = String::new();
        for x in 0..n {
            let p = Coordinate::new(x, y);
            row.push(if *start == p {
                'S'
            } else if *end == p {
                'G'
            } else {
                'o'
            });
            let right = graph.is_adjacent(&p, &Coordinate::new(x + 1, y));
            row.push(if right { '-' } else { ' ' });
            let down = graph.is_adjacent(&p, &Coordinate::new(x, y - 1));
            below.push_str(if down { "| " } else { "  " });
        }
        println!("{row}");
        println!("{below}");
    }
}

#[test]
fn fuzz() {
    const N: i32 = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for block_probability in [0.2, 0.45] {
        for _ in 0..N_GRIDS {
            let edges = random_lattice_edges(N, N, block_probability, &mut rng);
            let pathfinder = Pathfinder::new(&edges);
            let graph = pathfinder.graph();
            let start = random_point(N, &mut rng);
            let end = random_point(N, &mut rng);
            if !graph.contains(&start) || !graph.contains(&end) {
                assert!(matches!(
                    pathfinder.get_path(start, end),
                    Err(PathError::InvalidEndpoint { .. })
                ));
                continue;
            }
            let reachable = pathfinder.reachable(&start, &end);
            let path = find_path(graph, start, end);
            // Show the grid if the search disagrees with the components
            if path.is_ok() != reachable {
                visualize_edges(&edges, N, &start, &end);
            }
            assert_eq!(path.is_ok(), reachable);
            assert_eq!(pathfinder.get_path(start, end), path);
            match path {
                Ok(path) => {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&end));
                    assert!(graph.is_path(&path));
                    assert_eq!(Some(path_cost(&path)), bfs_distance(graph, start, end));
                }
                Err(e) => {
                    assert_eq!(e, PathError::NoPath { start, goal: end });
                    assert_eq!(bfs_distance(graph, start, end), None);
                }
            }
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N: i32 = 12;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let edges = random_lattice_edges(N, N, 0.1, &mut rng);
        let start = random_point(N, &mut rng);
        let end = random_point(N, &mut rng);
        let first = find_path(&build_graph(&edges), start, end);
        let second = find_path(&build_graph(&edges), start, end);
        assert_eq!(first, second);
    }
}

#[test]
fn fuzz_duplicate_edges() {
    const N: i32 = 8;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..500 {
        let edges = random_lattice_edges(N, N, 0.3, &mut rng);
        let mut doubled = edges.clone();
        doubled.extend(edges.iter().map(|e| Edge::new(e.b, e.a)));
        let graph = build_graph(&edges);
        let doubled_graph = build_graph(&doubled);
        let start = random_point(N, &mut rng);
        let end = random_point(N, &mut rng);
        let single = find_path(&graph, start, end).map(|p| path_cost(&p));
        let double = find_path(&doubled_graph, start, end).map(|p| path_cost(&p));
        assert_eq!(single, double);
    }
}
