//! Error types for the keymorph core library
//!
//! Every failure the transformation engine can produce is a variant of [`Error`].
//! None of them are retried internally: they describe a bad input shape that the
//! caller has to fix before calling again.

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Main error type for keymorph operations
#[derive(Error, Debug)]
pub enum Error {
    /// No usable payload was supplied to a transformation
    #[error("A payload is needed for the transformation")]
    MissingPayload,

    /// One of the key sets is empty at transform time
    #[error("A {role} key definition is needed for the transformation")]
    MissingKeyDefinition {
        role: KeyRole,
    },

    /// Strict mode is active and the key sets differ in length
    #[error("Source and target key sets are not equal in length ({source_len} != {target_len})")]
    KeyLengthMismatch {
        source_len: usize,
        target_len: usize,
    },

    /// Positional lookup past the end of a key set
    #[error("Key position {index} is out of range for a key set of length {len}")]
    OutOfRange {
        index: usize,
        len: usize,
    },

    /// A cast was requested with a null value, an unknown type or an unconvertible value
    #[error("Invalid cast input for type '{type_name}': {message}")]
    InvalidCastInput {
        type_name: String,
        message: String,
    },

    /// The transformed result was requested before any transformation ran
    #[error("transform must be called before the transformed result can be read")]
    NotYetTransformed,

    /// Invalid transformer configuration
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a key mapping an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyRole {
    /// Keys expected in the incoming payload
    Source,
    /// Keys the matched fields are renamed to
    Target,
}

/// Field-less discriminant of [`Error`], handy for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingPayload,
    MissingKeyDefinition,
    KeyLengthMismatch,
    OutOfRange,
    InvalidCastInput,
    NotYetTransformed,
    Configuration,
    Json,
}

impl Error {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingPayload => ErrorKind::MissingPayload,
            Error::MissingKeyDefinition { .. } => ErrorKind::MissingKeyDefinition,
            Error::KeyLengthMismatch { .. } => ErrorKind::KeyLengthMismatch,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
            Error::InvalidCastInput { .. } => ErrorKind::InvalidCastInput,
            Error::NotYetTransformed => ErrorKind::NotYetTransformed,
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::Json { .. } => ErrorKind::Json,
        }
    }

    pub(crate) fn invalid_cast(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidCastInput {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Source => write!(f, "source"),
            KeyRole::Target => write!(f, "target"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
