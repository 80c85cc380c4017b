use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup(String),
    LoadMore,
    /// 1-based position in the result list.
    ToggleFavorite(usize),
    /// 1-based position in the favorites list.
    RemoveFavorite(usize),
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("'{0}' needs a position starting at 1")]
    BadPosition(String),
}

pub const HELP: &str = "\
commands:
  lookup <keyword>   search (alias: l)
  more               load the next page (alias: m)
  fav <n>            toggle favorite for result n
  unfav <n>          remove favorite n
  show               print results and favorites
  help               this text
  quit               exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, "")
        };

        match name {
            "" => Err(CommandError::Empty),
            "lookup" | "l" => Ok(Command::Lookup(rest.to_string())),
            "more" | "m" => Ok(Command::LoadMore),
            "fav" => position(name, rest).map(Command::ToggleFavorite),
            "unfav" => position(name, rest).map(Command::RemoveFavorite),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn position(name: &str, arg: &str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadPosition(name.to_string()))
    }
}
