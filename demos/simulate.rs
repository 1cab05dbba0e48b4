use robot_grid::{Simulation, report_line};
use std::io;

// Feed commands on stdin, e.g.:
//   printf 'PLACE 0,0,NORTH\nMOVE\nREPORT\n' | cargo run --example simulate
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let end = Simulation::new().run_reader(stdin.lock())?;

    println!("final: {}", report_line(end.as_ref()));
    println!("snapshot: {}", serde_json::to_string(&end)?);
    Ok(())
}
