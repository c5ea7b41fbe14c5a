//! The `error` module contains `ChainbuildError`, the error enumeration used to communicate
//! library errors, and [`Malformation`], the detail carried by a malformed configuration.

use std::convert::From;
use thiserror::Error;

/// The list of errors that the library can generate.
#[derive(Error, Debug)]
pub enum ChainbuildError {
    #[error("IO error: {0}")]
    IO(std::io::Error),

    /// An error indicating that JSON serialization failed.
    #[error("JSON error occurred: {0}")]
    JSON(serde_json::Error),

    /// An error indicating that the JSON pretty-printer rejected its input.
    #[error("Unable to format JSON: {0}")]
    JSONFormat(String),

    /// An error indicating that the tool received a configuration file that does not have the
    /// correct file extension.
    #[error("Configuration file {0} does not have the correct extension")]
    ConfigFileBadExtension(String),

    /// The configuration in the named source is missing keys, has values of the wrong type, or
    /// holds values the toolchain cannot use.
    #[error("Malformed configuration in {0}: {1}")]
    MalformedConfiguration(String, Malformation),
}

impl ChainbuildError {
    /// Return true if the error is the `MalformedConfiguration` kind.
    pub fn is_malformed_configuration(&self) -> bool {
        matches!(self, ChainbuildError::MalformedConfiguration(_, _))
    }

    /// Return the detail of a `MalformedConfiguration` error, or `None` for other kinds.
    pub fn malformation(&self) -> Option<&Malformation> {
        match self {
            ChainbuildError::MalformedConfiguration(_, m) => Some(m),
            _ => None,
        }
    }
}

/// The specific reason a configuration failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    /// The text is not parseable JSON.
    #[error("not valid JSON: {0}")]
    Syntax(String),

    /// The top level JSON value is not an object.
    #[error("the top level value is not a JSON object")]
    NotAnObject,

    /// Required keys are absent.
    #[error("missing required keys: {0:?}")]
    MissingKeys(Vec<String>),

    /// The key is present but holds a value of another JSON type.
    #[error("value for key {key} is not {expected}")]
    WrongType { key: String, expected: &'static str },

    /// A count holds a negative number.
    #[error("value for key {key} must not be negative, found {value}")]
    Negative { key: String, value: i64 },

    /// A path value is the empty string.
    #[error("value for key {0} must be a non-empty path")]
    EmptyPath(String),

    /// The value has the right JSON type but is not one the toolchain accepts.
    #[error("value {value:?} for key {key} is not supported")]
    UnsupportedValue { key: String, value: String },

    /// An input directory does not exist.
    #[error("path {path} for key {key} does not exist")]
    PathNotFound { key: String, path: String },
}

impl From<std::io::Error> for ChainbuildError {
    fn from(e: std::io::Error) -> Self {
        ChainbuildError::IO(e)
    }
}

impl From<serde_json::Error> for ChainbuildError {
    fn from(e: serde_json::Error) -> Self {
        ChainbuildError::JSON(e)
    }
}
