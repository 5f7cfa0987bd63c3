//! Terminal input surface
//!
//! The terminal stands in for the text field and the two dropdowns: every
//! line the user enters is parsed into one [`UserIntent`].

use crate::catalog::ShowId;
use crate::controller::EpisodeChoice;
use thiserror::Error;

/// Usage text printed for `help` and after unrecognized input
pub const HELP: &str = "\
Commands:
  show <id>       load the episodes of a show
  shows           back to the list of all shows
  episode <id>    show a single episode
  episode all     show all episodes again
  search <text>   filter episodes by name or summary
  clear           clear the search
  help            print this help
  quit            leave the explorer";

/// Something the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    /// A show picked in the show dropdown (or a show card clicked)
    SelectShow(ShowId),
    /// The "all shows" sentinel picked in the show dropdown
    ReturnToShows,
    /// A value picked in the episode dropdown
    SelectEpisode(EpisodeChoice),
    /// New content of the search field; empty when cleared
    Search(String),
    Help,
    Quit,
}

/// Errors that can occur while parsing a command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("'{command}' expects a numeric id, got '{value}'")]
    InvalidId { command: String, value: String },

    #[error("'{0}' expects an argument")]
    MissingArgument(String),
}

/// Parses one line of user input.
///
/// Command words are case-insensitive; the search text is taken verbatim
/// (minus surrounding whitespace).
pub fn parse_command(line: &str) -> Result<UserIntent, CommandParseError> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "" => Err(CommandParseError::Empty),
        "show" if argument.eq_ignore_ascii_case("all") => Ok(UserIntent::ReturnToShows),
        "show" => parse_id("show", argument).map(UserIntent::SelectShow),
        "shows" => Ok(UserIntent::ReturnToShows),
        "episode" | "ep" if argument.eq_ignore_ascii_case("all") => {
            Ok(UserIntent::SelectEpisode(EpisodeChoice::All))
        }
        "episode" | "ep" => parse_id("episode", argument)
            .map(|id| UserIntent::SelectEpisode(EpisodeChoice::Single(id))),
        "search" | "/" => Ok(UserIntent::Search(argument.to_string())),
        "clear" => Ok(UserIntent::Search(String::new())),
        "help" | "?" => Ok(UserIntent::Help),
        "quit" | "exit" | "q" => Ok(UserIntent::Quit),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_id(command: &str, argument: &str) -> Result<u32, CommandParseError> {
    if argument.is_empty() {
        return Err(CommandParseError::MissingArgument(command.to_string()));
    }
    argument.parse().map_err(|_| CommandParseError::InvalidId {
        command: command.to_string(),
        value: argument.to_string(),
    })
}
