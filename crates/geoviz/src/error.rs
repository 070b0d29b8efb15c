//! Error taxonomy shared by every parser, the generator and the flipper.
//!
//! All variants are terminal for the operation that raised them: no partial
//! results are returned alongside an error.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid caller input: bad point count, bad domain, unusable path.
    #[error("invalid input: {0}")]
    Input(String),

    /// A significant line did not hold the expected numeric tokens.
    #[error("line {line}: {reason}: {content:?}")]
    Parse {
        line: usize,
        reason: String,
        content: String,
    },

    /// The requested number of unique points does not fit the domain, or the
    /// attempt ceiling was reached before the set was complete.
    #[error("cannot place {requested} unique points: {detail}")]
    Capacity { requested: usize, detail: String },

    /// A file could not be read, written or replaced.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an unnamed stream (stdin, in-memory reader) failed.
    #[error("stream read failed: {0}")]
    Stream(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(line: usize, reason: impl Into<String>, content: &str) -> Self {
        Error::Parse {
            line,
            reason: reason.into(),
            content: content.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
