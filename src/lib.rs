//! A toy robot simulator: a line-command interpreter for a single agent on
//! a bounded 5×5 grid.
//!
//! Input is one command per line (PLACE, MOVE, LEFT, RIGHT, REPORT). Each
//! command is a pure transition over an optional [`Robot`]; malformed input
//! never errors, it falls back to a defined value. [`Simulation`] folds a
//! sequence of lines into the final state.
//!
//! # Quick start
//!
//! ```rust
//! use robot_grid::{Direction, Robot, Simulation};
//!
//! let end = Simulation::new()
//!     .on_report(|line| eprintln!("{line}"))
//!     .run("PLACE 0,0,NORTH\nMOVE\nRIGHT\nREPORT".lines());
//!
//! assert_eq!(end, Some(Robot { x: 0, y: 1, dir: Direction::East }));
//! ```

mod command;
mod parse;
mod robot;
mod sim;

pub use command::{Command, NOT_PLACED_MSG, report_line};
pub use parse::{ParsedLine, parse_line};
pub use robot::{BOARD_SIZE, Direction, Robot, is_valid_pos};
pub use sim::{SimError, Simulation, StepEvent};
