use std::io;
use thiserror::Error;

/// Failure taxonomy for every fallible operation in the crate.
///
/// None of these are fatal: callers decide whether to retry or give up.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("table '{0}' does not exist")]
    TableNotFound(String),

    #[error("table '{0}' already exists")]
    TableExists(String),

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("invalid condition '{0}': expected '<column> = <value>'")]
    BadCondition(String),

    /// Command text could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Persisted database file is structurally malformed.
    #[error("malformed database file: {0}")]
    Corrupt(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
