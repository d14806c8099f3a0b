use sweeper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Coord2),
    Flag(Coord2),
    New,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command `{0}`, type `help` to list commands")]
    Unknown(String),
    #[error("`{0}` needs an X and a Y coordinate")]
    MissingCoords(&'static str),
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String),
    #[error("Unexpected input `{0}`")]
    TrailingInput(String),
}

/// Parses a command line, returning `None` for blank input.
///
/// Coordinates may be separated by spaces or a comma: `open 3 4`, `o 3,4`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty());

    let Some(name) = words.next() else {
        return Ok(None);
    };

    let command = match name.to_ascii_lowercase().as_str() {
        "open" | "o" => Command::Open(parse_coords("open", &mut words)?),
        "flag" | "f" => Command::Flag(parse_coords("flag", &mut words)?),
        "new" | "n" | "restart" => Command::New,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(name.to_string())),
    };

    if let Some(extra) = words.next() {
        return Err(CommandError::TrailingInput(extra.to_string()));
    }

    Ok(Some(command))
}

fn parse_coords<'a>(
    command: &'static str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, CommandError> {
    let mut next_coord = || {
        let word = words.next().ok_or(CommandError::MissingCoords(command))?;
        word.parse::<Coord>()
            .map_err(|_| CommandError::InvalidCoord(word.to_string()))
    };

    let x = next_coord()?;
    let y = next_coord()?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(parse("open 3 4"), Ok(Some(Command::Open((3, 4)))));
        assert_eq!(parse("  O 0,7 "), Ok(Some(Command::Open((0, 7)))));
        assert_eq!(parse("flag 2, 1"), Ok(Some(Command::Flag((2, 1)))));
        assert_eq!(parse("f 0 0"), Ok(Some(Command::Flag((0, 0)))));
        assert_eq!(parse("new"), Ok(Some(Command::New)));
        assert_eq!(parse("?"), Ok(Some(Command::Help)));
        assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t"), Ok(None));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            parse("dig 1 1"),
            Err(CommandError::Unknown("dig".to_string()))
        );
        assert_eq!(parse("open 1"), Err(CommandError::MissingCoords("open")));
        assert_eq!(
            parse("flag x 1"),
            Err(CommandError::InvalidCoord("x".to_string()))
        );
        assert_eq!(
            parse("open 300 1"),
            Err(CommandError::InvalidCoord("300".to_string()))
        );
        assert_eq!(
            parse("quit now"),
            Err(CommandError::TrailingInput("now".to_string()))
        );
    }
}
