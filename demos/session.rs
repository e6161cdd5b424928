use edge_astar::lattice::{demo_edges, random_lattice_edges, DEFAULT_BLOCK_PROBABILITY, DEMO_SIZE};
use edge_astar::session::{Selection, Session};
use edge_astar::{Coordinate, Pathfinder};
use rand::prelude::*;

// Replays a sequence of picks the way an interactive front-end would feed them
// into a [Session]: start, an invalid pick, goal, a restart and a new grid.
fn main() {
    let mut session = Session::new(Pathfinder::new(&demo_edges()));
    let picks = [
        Coordinate::new(1, 5),
        Coordinate::new(12, 3),
        Coordinate::new(8, 5),
        Coordinate::new(4, 1),
    ];
    for pick in picks {
        match session.select(pick) {
            Ok(Selection::StartSet(c)) => println!("Start point set to: {c}"),
            Ok(Selection::Restarted(c)) => println!("Start point reset to: {c}"),
            Ok(Selection::GoalSet { goal, result }) => {
                println!("Goal point set to: {goal}");
                match result {
                    Ok(path) => println!("Path found: {:?}", path),
                    Err(e) => println!("Error: {e}"),
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    let mut rng = StdRng::seed_from_u64(0);
    session.set_edges(&random_lattice_edges(
        DEMO_SIZE,
        DEMO_SIZE,
        DEFAULT_BLOCK_PROBABILITY,
        &mut rng,
    ));
    println!("Random grid generated!");
    session.pathfinder_mut().max_expansions = Some(50);
    for pick in [Coordinate::new(0, 0), Coordinate::new(9, 9)] {
        if let Err(e) = session.select(pick) {
            println!("{e}");
        }
    }
    match session.find_path() {
        Some(Ok(path)) => println!("Path found: {:?}", path),
        Some(Err(e)) => println!("Error: {e}"),
        None => println!("Please set both start and goal points!"),
    }
}
