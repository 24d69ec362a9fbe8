//! Error types for netterm_core
//!
//! Completion itself only ever fails on corrupted player state; everything
//! else a user can type resolves to an empty candidate list.

use thiserror::Error;

/// Game state is inconsistent in a way completion cannot recover from
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The player's current-host pointer names a host that is not registered
    #[error("current host '{hostname}' is not a registered server")]
    DanglingCurrentHost { hostname: String },
}

/// Failures loading or validating a world snapshot
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("duplicate hostname: {0}")]
    DuplicateHost(String),
    #[error("invalid hostname: {0:?}")]
    InvalidHostname(String),
    #[error("{from} links to unknown server {to}")]
    DanglingLink { from: String, to: String },
    #[error("{from} links to {to} but {to} does not link back")]
    AsymmetricLink { from: String, to: String },
    #[error("player is on unknown server {0}")]
    UnknownCurrentServer(String),
}

/// Failures loading completion configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}
