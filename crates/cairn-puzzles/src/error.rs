//! Error types for puzzle solving.

use std::error::Error;
use std::fmt;

use cairn_arena::ArenaError;
use cairn_input::InputError;

use crate::puzzle::Day;

/// Errors from parsing or solving a puzzle.
#[derive(Debug)]
pub enum PuzzleError {
    /// Reading or tokenising the input failed.
    Input(InputError),
    /// The arena refused an allocation the solver needed.
    Arena(ArenaError),
    /// The input does not have the shape the puzzle expects.
    Malformed {
        /// The puzzle being solved.
        day: Day,
        /// What was wrong.
        reason: String,
    },
    /// No solver is registered for the requested day.
    UnknownDay(Day),
}

impl PuzzleError {
    pub(crate) fn malformed(day: Day, reason: impl Into<String>) -> Self {
        Self::Malformed {
            day,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(err) => write!(f, "input error: {err}"),
            Self::Arena(err) => write!(f, "arena error: {err}"),
            Self::Malformed { day, reason } => {
                write!(f, "malformed input for day {day}: {reason}")
            }
            Self::UnknownDay(day) => write!(f, "no solver registered for day {day}"),
        }
    }
}

impl Error for PuzzleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Arena(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for PuzzleError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<ArenaError> for PuzzleError {
    fn from(err: ArenaError) -> Self {
        Self::Arena(err)
    }
}
