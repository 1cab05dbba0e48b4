use crate::robot::{Direction, Robot, is_valid_pos};

/// The line REPORT emits when no robot has been placed.
pub const NOT_PLACED_MSG: &str = "Robot has not been validly placed yet";

/// The closed set of commands the simulator understands.
///
/// Every command is a pure transition over `Option<Robot>`: it takes the
/// current state and the parsed arguments and returns the next state. No
/// command panics or errors on malformed input; each degrades to a defined
/// fallback value instead (keep the previous state, or clear it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl Command {
    /// Look up a command by name. Case-sensitive exact match; unrecognized
    /// names yield `None` and the caller skips the line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PLACE" => Some(Self::Place),
            "MOVE" => Some(Self::Move),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "REPORT" => Some(Self::Report),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Place => "PLACE",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Report => "REPORT",
        }
    }

    /// Apply this command to the current state, producing the next state.
    ///
    /// MOVE, LEFT, RIGHT, and REPORT ignore `args`. REPORT is a pure
    /// pass-through here; emitting its line is the driver's job (see
    /// [`report_line`] and [`crate::Simulation`]).
    pub fn apply(self, current: Option<Robot>, args: &[String]) -> Option<Robot> {
        match self {
            Self::Place => place(current, args),
            Self::Move => advance(current),
            Self::Left => current.map(|r| Robot { dir: r.dir.left(), ..r }),
            Self::Right => current.map(|r| Robot { dir: r.dir.right(), ..r }),
            Self::Report => current,
        }
    }
}

/// The human-readable line REPORT emits for a given state.
pub fn report_line(state: Option<&Robot>) -> String {
    match state {
        Some(robot) => robot.to_string(),
        None => NOT_PLACED_MSG.to_string(),
    }
}

/// PLACE: put a fresh robot at `(args[0], args[1])` facing `args[2]`,
/// discarding any previous robot. Arguments past the third are ignored.
///
/// Fallbacks, in check order:
/// - fewer than 3 args: previous state kept
/// - x or y not an integer: state cleared to `None`
/// - position off the board: previous state kept
/// - unknown direction name: previous state kept
fn place(current: Option<Robot>, args: &[String]) -> Option<Robot> {
    if args.len() < 3 {
        return current;
    }
    // Parse failure is the one case that clears the robot, so it is checked
    // before bounds: "abc" must clear while "-1" must keep.
    let (Ok(x), Ok(y)) = (args[0].parse::<i32>(), args[1].parse::<i32>()) else {
        return None;
    };
    if !is_valid_pos(x, y) {
        return current;
    }
    let Some(dir) = Direction::from_name(&args[2]) else {
        return current;
    };
    Some(Robot { x, y, dir })
}

/// MOVE: one step along the current heading. A step off the board is a
/// no-op, not an error.
fn advance(current: Option<Robot>) -> Option<Robot> {
    let robot = current?;
    let next = robot.step();
    if is_valid_pos(next.x, next.y) {
        Some(next)
    } else {
        Some(robot)
    }
}
