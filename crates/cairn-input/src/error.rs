//! Error types for input loading and parsing.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use cairn_arena::ArenaError;

/// Errors from reading or parsing puzzle input.
#[derive(Debug)]
pub enum InputError {
    /// The file could not be opened or read.
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file exists but holds no bytes.
    Empty {
        /// The empty file.
        path: PathBuf,
    },
    /// The file is not valid UTF-8.
    NotUtf8 {
        /// The offending file.
        path: PathBuf,
        /// Byte offset of the first invalid sequence.
        valid_up_to: usize,
    },
    /// The arena could not hold the contents.
    Arena(ArenaError),
    /// A token was not a number in the requested radix, or overflowed `i64`.
    InvalidInteger {
        /// The token as it appeared in the input.
        text: String,
        /// The radix it was parsed in.
        radix: u32,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
            Self::Empty { path } => write!(f, "input file '{}' is empty", path.display()),
            Self::NotUtf8 { path, valid_up_to } => write!(
                f,
                "input file '{}' is not UTF-8 (invalid byte at offset {valid_up_to})",
                path.display()
            ),
            Self::Arena(err) => write!(f, "arena error while loading input: {err}"),
            Self::InvalidInteger { text, radix } => {
                write!(f, "failed to convert \"{text}\" to a base-{radix} i64")
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Arena(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArenaError> for InputError {
    fn from(err: ArenaError) -> Self {
        Self::Arena(err)
    }
}
