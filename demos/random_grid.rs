use edge_astar::lattice::{random_lattice_edges, DEFAULT_BLOCK_PROBABILITY, DEMO_SIZE};
use edge_astar::{path_cost, Coordinate, Pathfinder};
use rand::prelude::*;

// Generates a few random grids with 20% of the edges removed and tries to
// cross each of them from corner to corner.
fn main() {
    let mut rng = StdRng::seed_from_u64(3);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(DEMO_SIZE - 1, DEMO_SIZE - 1);
    for _ in 0..5 {
        let edges =
            random_lattice_edges(DEMO_SIZE, DEMO_SIZE, DEFAULT_BLOCK_PROBABILITY, &mut rng);
        let pathfinder = Pathfinder::new(&edges);
        println!(
            "Random grid generated: {} edges, {} components",
            pathfinder.graph().edge_count(),
            pathfinder.components().count()
        );
        match pathfinder.get_path(start, end) {
            Ok(path) => println!("Path found in {} steps: {:?}", path_cost(&path), path),
            Err(e) => println!("Error: {e}"),
        }
    }
}
