use robot_grid::Simulation;

// Walk the robot around a 2x2 square and report each corner.
fn main() {
    let commands = [
        "PLACE 1,1,NORTH",
        "MOVE", "MOVE", "REPORT",
        "RIGHT",
        "MOVE", "MOVE", "REPORT",
        "RIGHT",
        "MOVE", "MOVE", "REPORT",
        "RIGHT",
        "MOVE", "MOVE", "REPORT",
    ];

    let end = Simulation::new().with_tracing().run(commands);
    println!("final state: {end:?}");
}
