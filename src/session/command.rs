//! Text commands accepted by the interactive front end.

use crate::core::{BoardSize, Result, Square, TourError};
use crate::prefs::VisitedStyle;

/// One user command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place or move the knight.
    Play(Square),
    /// Take back the last placement or move.
    Undo,
    /// Clear progress, keeping the board size.
    Reset,
    /// Start a new tour, optionally on a different board.
    New(Option<BoardSize>),
    /// Change how visited squares are drawn.
    Style(VisitedStyle),
    /// Redraw the board.
    Show,
    /// Print command help.
    Help,
    /// Leave the session.
    Quit,
}

/// Command reference shown by `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>      place the knight, or move it (also <row>,<col>)
  undo, z          take back the last move
  reset, r         clear the tour, keep the board size
  new [N], n [N]   start a new tour, optionally on an NxN board
  style, s icon|number
                   draw visited squares as knights or move numbers
  show             redraw the board
  help, ?          show this help
  quit, q, exit    leave the session
";

impl std::str::FromStr for Command {
    type Err = TourError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Show);
        };
        let arg = words.next();

        let command = match head.to_ascii_lowercase().as_str() {
            "undo" | "z" => Command::Undo,
            "reset" | "r" => Command::Reset,
            "new" | "n" => Command::New(arg.map(str::parse).transpose()?),
            "style" | "s" => {
                let style = arg
                    .ok_or_else(|| TourError::UnknownCommand(line.to_string()))?
                    .parse()?;
                Command::Style(style)
            }
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => {
                return line
                    .parse()
                    .map(Command::Play)
                    .map_err(|_| TourError::UnknownCommand(line.to_string()))
            }
        };

        if words.next().is_some() || (arg.is_some() && !matches!(command, Command::New(_) | Command::Style(_))) {
            return Err(TourError::UnknownCommand(line.to_string()));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command> {
        s.parse()
    }

    #[test]
    fn test_parse_play() {
        assert_eq!(parse("2 1").unwrap(), Command::Play(Square::new(2, 1)));
        assert_eq!(parse("2,1").unwrap(), Command::Play(Square::new(2, 1)));
        assert!(parse("2").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse("undo").unwrap(), Command::Undo);
        assert_eq!(parse("Z").unwrap(), Command::Undo);
        assert_eq!(parse("r").unwrap(), Command::Reset);
        assert_eq!(parse("q").unwrap(), Command::Quit);
        assert_eq!(parse("?").unwrap(), Command::Help);
        assert_eq!(parse("").unwrap(), Command::Show);
    }

    #[test]
    fn test_parse_new() {
        assert_eq!(parse("new").unwrap(), Command::New(None));
        assert_eq!(
            parse("new 5").unwrap(),
            Command::New(Some(BoardSize::new(5).unwrap()))
        );
        assert!(matches!(parse("new 0"), Err(TourError::InvalidBoardSize(0))));
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(parse("style number").unwrap(), Command::Style(VisitedStyle::Number));
        assert!(parse("style").is_err());
        assert!(parse("style glitter").is_err());
    }

    #[test]
    fn test_trailing_arguments_rejected() {
        assert!(parse("undo now").is_err());
        assert!(parse("new 5 6").is_err());
    }

    /// Every keyword the parser accepts is listed in the help text.
    #[test]
    fn test_help_lists_every_alias() {
        let aliases = [
            "undo", "z", "reset", "r", "new", "n", "style", "s", "show", "help", "?", "quit", "q",
            "exit",
        ];
        for alias in aliases {
            let listed = HELP
                .lines()
                .filter_map(|line| line.trim_start().split("  ").next())
                .any(|names| names.split([',', ' ']).any(|word| word == alias));
            assert!(listed, "{alias} missing from help");
        }
        assert_eq!(parse("n").unwrap(), Command::New(None));
        assert_eq!(parse("n 6").unwrap(), Command::New(Some(BoardSize::new(6).unwrap())));
        assert_eq!(parse("s icon").unwrap(), Command::Style(VisitedStyle::Icon));
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }
}
