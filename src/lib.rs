//! netterm_core - tab completion for the in-game network terminal
//!
//! Modules:
//! - paths: directory view over flat file keys, relative path resolution
//! - world: game-state read interface and snapshot loading
//! - network: current host and one-hop neighbours
//! - providers: candidate providers per kind
//! - dispatch: command keyword x argument slot -> candidate kinds
//! - cmdline: tokenizer for partially typed lines
//! - completions: top-level resolver
//! - catalog: store catalog and terminal keywords
//! - config: completion configuration
//! - structured_log: JSON event logging

pub mod structured_log;
pub mod error;
pub mod paths;
pub mod world;
pub mod catalog;
pub mod config;
pub mod network;
pub mod providers;
pub mod dispatch;
pub mod cmdline;
pub mod completions;

#[cfg(feature = "napi")]
pub mod napi_bridge;

// Re-export key types for convenience
pub use error::{ConfigError, StateError, WorldError};

pub use world::{GameState, Host, Player, World};

pub use config::CompletionConfig;

pub use completions::{complete_shared, CompletionReport, TabCompleter};

pub use providers::CandidateKind;

pub use paths::{list_immediate_children, resolve_relative_prefix, PathContext};
