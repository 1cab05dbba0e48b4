/// One input line split into a command name and its arguments. Transient,
/// produced and consumed per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The command token, possibly empty for a blank line.
    pub command: String,
    /// Comma-separated arguments, each trimmed. Empty pieces are kept:
    /// argument count is significant.
    pub args: Vec<String>,
}

/// Split a raw line into `(command, args)`.
///
/// The command is everything up to the first run of spaces; the remainder is
/// split on `,` with each piece trimmed. A line with no argument region
/// yields an empty argument list, not a single empty string. Total: every
/// input, including the empty string, produces a well-formed result.
///
/// ```
/// use robot_grid::parse_line;
///
/// let parsed = parse_line("PLACE 1, 2 ,NORTH");
/// assert_eq!(parsed.command, "PLACE");
/// assert_eq!(parsed.args, ["1", "2", "NORTH"]);
/// ```
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();
    let Some((command, rest)) = line.split_once(' ') else {
        return ParsedLine {
            command: line.to_string(),
            args: vec![],
        };
    };

    ParsedLine {
        command: command.to_string(),
        args: rest.split(',').map(|arg| arg.trim().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(command: &str, args: &[&str]) -> ParsedLine {
        ParsedLine {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn command_and_args() {
        assert_eq!(parse_line("command x,y,z"), parsed("command", &["x", "y", "z"]));
    }

    #[test]
    fn spaces_trimmed_around_args() {
        assert_eq!(
            parse_line("command x , y , z"),
            parsed("command", &["x", "y", "z"])
        );
    }

    #[test]
    fn empty_args_preserved() {
        assert_eq!(parse_line("command x,,z"), parsed("command", &["x", "", "z"]));
        assert_eq!(parse_line("command ,"), parsed("command", &["", ""]));
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert_eq!(parse_line("   command   "), parsed("command", &[]));
        assert_eq!(parse_line("  command  a , b "), parsed("command", &["a", "b"]));
    }

    #[test]
    fn no_argument_region_gives_empty_list() {
        let p = parse_line("REPORT");
        assert_eq!(p.command, "REPORT");
        assert!(p.args.is_empty());
    }

    #[test]
    fn blank_lines() {
        assert_eq!(parse_line(""), parsed("", &[]));
        assert_eq!(parse_line("     "), parsed("", &[]));
    }
}
