// src/error.rs
//
// Errors at the file/CLI boundary. Each one is reported once and ends the
// process with a non-zero status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the file/CLI boundary. Conversion itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Usage: markdown2html <input.md> <output.html>")]
    MissingArguments,

    #[error("Missing {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    InputRead { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite { path: PathBuf, source: io::Error },
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingArguments
            | Error::InputNotFound { .. }
            | Error::InputRead { .. }
            | Error::OutputWrite { .. } => 1,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn input_not_found_message() {
        let err = Error::InputNotFound {
            path: PathBuf::from("README.md"),
        };
        assert_eq!(err.to_string(), "Missing README.md");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err = Error::OutputWrite {
            path: PathBuf::from("out.html"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write out.html: denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
