//! Error types.
//!
//! Lookups never fail: a missing key is `None` or `false`. Errors only arise
//! from rejected table configuration and from I/O while loading a dictionary
//! or running an interactive session.

use std::io;

use thiserror::Error;

/// Rejected table configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("table capacity must be greater than zero")]
    ZeroCapacity,

    #[error("max load factor must be a positive finite number, got {0}")]
    InvalidLoadFactor(f64),
}

/// Errors surfaced while loading a dictionary or serving queries.
#[derive(Error, Debug)]
pub enum SpellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("table error: {0}")]
    Table(#[from] TableError),
}

pub type Result<T> = std::result::Result<T, SpellError>;
