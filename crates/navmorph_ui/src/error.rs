//! # Navigation Error Types
//!
//! Only configuration loading can fail. Interaction and animation paths
//! degrade to no-ops instead of returning errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading navigation data.
#[derive(Error, Debug)]
pub enum NavError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two entries in one list share an identifier.
    #[error("duplicate {list} id: {id}")]
    DuplicateId {
        /// Which list (`nav` or `social`).
        list: &'static str,
        /// The repeated identifier.
        id: String,
    },

    /// A required text field is empty.
    #[error("{list} entry {index} has an empty {field}")]
    EmptyField {
        /// Which list (`nav` or `social`).
        list: &'static str,
        /// Position of the entry in its list.
        index: usize,
        /// Name of the empty field.
        field: &'static str,
    },

    /// A motion timing value is negative or not finite.
    #[error("invalid motion setting: {0}")]
    InvalidMotion(String),
}

/// Result type for navigation config operations.
pub type NavResult<T> = Result<T, NavError>;
