//! Error types shared by every interchange package.

use std::path::PathBuf;

use crate::format::Format;

/// Errors raised by codecs, the file store and the transport.
///
/// The "nothing to return" outcomes of object deserialization and the CSV
/// bridge are not errors; those operations report them through their return
/// values instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The value holds something the target format cannot represent.
    #[error("type validation error ({format}): {message}")]
    TypeValidation { format: Format, message: String },

    /// Input bytes or text are not well-formed for the format.
    #[error("parse error ({format}): {message}")]
    Parse { format: Format, message: String },

    /// File or socket failure, surfaced unmodified.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file store root that is missing, not a directory or read-only.
    #[error("invalid store root {}: {message}", path.display())]
    InvalidRoot { path: PathBuf, message: String },

    /// No codec handles the requested format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(Format),

    /// The one-shot server already handled its connection.
    #[error("server is closed")]
    Closed,

    /// Generic error with message.
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a type validation error.
    pub fn type_validation(format: Format, message: impl Into<String>) -> Self {
        Error::TypeValidation {
            format,
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(format: Format, message: impl Into<String>) -> Self {
        Error::Parse {
            format,
            message: message.into(),
        }
    }

    /// Whether this error came from malformed input.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
