use edge_astar::lattice::demo_edges;
use edge_astar::{build_graph, find_path, path_cost, Coordinate};

// In this example a path is found on the 10x10 sample map, which has a wall
// along x = 3 between y = 3 and y = 6 and two walls along y = 2 and y = 6.
fn main() {
    let graph = build_graph(&demo_edges());
    let start = Coordinate::new(2, 4);
    let end = Coordinate::new(7, 4);
    match find_path(&graph, start, end) {
        Ok(path) => {
            println!("A path has been found:");
            for p in &path {
                println!("{:?}", p);
            }
            println!("Path length: {} nodes", path.len());
            println!("Path cost: {} steps", path_cost(&path));
        }
        Err(e) => println!("Error: {e}"),
    }
}
