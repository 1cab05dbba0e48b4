use crate::command::{Command, report_line};
use crate::parse::parse_line;
use crate::robot::Robot;
use std::fmt;
use std::io::BufRead;

/// Passed to the `on_step` hook after each recognized command is applied.
pub struct StepEvent {
    /// 1-based input line number.
    pub line_number: usize,
    /// The command that was applied.
    pub command: Command,
    /// The state after applying it.
    pub state: Option<Robot>,
}

/// Error type for a simulation run. The transition logic itself never
/// errors; only reading input can.
#[derive(Debug)]
pub enum SimError {
    Io(std::io::Error),
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read input: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

/// Drives a simulation: folds input lines through the command transitions,
/// one optional [`Robot`] threaded through the whole run.
///
/// Each line is parsed, its command looked up (unrecognized names are
/// silently skipped), and the matching transition applied. REPORT lines are
/// printed to stdout unless an `on_report` hook is installed.
pub struct Simulation {
    state: Option<Robot>,
    on_step: Option<Box<dyn FnMut(&StepEvent)>>,
    on_report: Option<Box<dyn FnMut(&str)>>,
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            state: None,
            on_step: None,
            on_report: None,
        }
    }

    /// Register a callback that receives each REPORT line instead of it
    /// going to stdout.
    pub fn on_report(mut self, cb: impl FnMut(&str) + 'static) -> Self {
        self.on_report = Some(Box::new(cb));
        self
    }

    /// Register a callback that fires after every recognized command.
    pub fn on_step(mut self, cb: impl FnMut(&StepEvent) + 'static) -> Self {
        self.on_step = Some(Box::new(cb));
        self
    }

    /// Set `on_step` to print each applied command and the resulting state
    /// to stderr.
    pub fn with_tracing(self) -> Self {
        self.on_step(|e| {
            eprintln!(
                "[line {}] {} -> {:?}",
                e.line_number,
                e.command.name(),
                e.state
            );
        })
    }

    /// The current state. `None` until a PLACE succeeds.
    pub fn state(&self) -> Option<Robot> {
        self.state
    }

    /// Run the simulation over a sequence of lines and return the final
    /// state. An empty sequence yields `None`.
    pub fn run<I>(&mut self, lines: I) -> Option<Robot>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for (i, line) in lines.into_iter().enumerate() {
            self.apply_line(i + 1, line.as_ref());
        }
        self.state
    }

    /// Run the simulation over a line-oriented reader (stdin, a file, an
    /// in-memory buffer). Only the reader can fail; malformed commands
    /// never do.
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> Result<Option<Robot>, SimError> {
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            self.apply_line(i + 1, &line);
        }
        Ok(self.state)
    }

    fn apply_line(&mut self, line_number: usize, line: &str) {
        let parsed = parse_line(line);
        let Some(command) = Command::from_name(&parsed.command) else {
            return;
        };

        self.state = command.apply(self.state, &parsed.args);

        if command == Command::Report {
            let msg = report_line(self.state.as_ref());
            match &mut self.on_report {
                Some(cb) => cb(&msg),
                None => println!("{msg}"),
            }
        }

        if let Some(cb) = &mut self.on_step {
            cb(&StepEvent {
                line_number,
                command,
                state: self.state,
            });
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
