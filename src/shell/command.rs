//! Parsing of shell input lines.

use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Incr,
    Decr,
    /// Open the "is this prime?" modal for the current count.
    OpenPrimeModal,
    CloseModal,
    Save,
    Remove,
    NthPrime,
    Favorites,
    Delete(BTreeSet<usize>),
    Feed,
    Dump,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("delete needs at least one index")]
    MissingIndices,

    #[error("invalid index '{0}'")]
    InvalidIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "+" | "incr" => Command::Incr,
            "-" | "decr" => Command::Decr,
            "prime" | "prime?" => Command::OpenPrimeModal,
            "close" => Command::CloseModal,
            "save" => Command::Save,
            "remove" => Command::Remove,
            "nth" => Command::NthPrime,
            "favorites" | "fav" => Command::Favorites,
            "delete" | "del" => {
                let indices = words
                    .map(|word| {
                        word.parse::<usize>()
                            .map_err(|_| CommandError::InvalidIndex(word.to_string()))
                    })
                    .collect::<Result<BTreeSet<_>, _>>()?;
                if indices.is_empty() {
                    return Err(CommandError::MissingIndices);
                }
                return Ok(Command::Delete(indices));
            }
            "feed" | "activity" => Command::Feed,
            "dump" => Command::Dump,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
