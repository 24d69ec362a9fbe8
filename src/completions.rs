//! Tab Completion Resolver for netterm_core
//!
//! Turns a partially typed terminal line into the full set of candidates
//! for the slot under the cursor. The resolver does no prefix filtering and
//! no sorting: the UI narrows and orders as it sees fit.

use crate::catalog::TERMINAL_COMMANDS;
use crate::cmdline::CommandLine;
use crate::config::CompletionConfig;
use crate::dispatch;
use crate::error::StateError;
use crate::network;
use crate::paths::{self, PathContext};
use crate::providers::{self, CandidateKind, ProviderScope};
use crate::structured_log::make_id;
use crate::world::{GameState, World};
use crate::slog_debug;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// What the resolver produced for one request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompletionReport {
    /// Correlates log events of this request
    pub id: String,
    /// Command keyword after alias expansion
    pub command: String,
    /// Argument slot; `None` when completing the keyword itself
    pub slot: Option<usize>,
    /// The token under the cursor as typed
    pub token: String,
    pub candidates: Vec<String>,
}

/// The main completion resolver
pub struct TabCompleter<'a, S: GameState + ?Sized> {
    state: &'a S,
    config: CompletionConfig,
}

impl<'a, S: GameState + ?Sized> TabCompleter<'a, S> {
    /// Create a resolver over a game-state snapshot with default config
    pub fn new(state: &'a S) -> Self {
        Self::with_config(state, CompletionConfig::default())
    }

    pub fn with_config(state: &'a S, config: CompletionConfig) -> Self {
        Self { state, config }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Candidates for argument `index` of `input`, resolved against
    /// `working_dir` on the player's current host
    pub fn complete(
        &self,
        input: &str,
        index: usize,
        working_dir: &str,
    ) -> Result<Vec<String>, StateError> {
        self.complete_report(input, index, working_dir)
            .map(|report| report.candidates)
    }

    /// Like [`complete`](Self::complete), with request metadata
    pub fn complete_report(
        &self,
        input: &str,
        index: usize,
        working_dir: &str,
    ) -> Result<CompletionReport, StateError> {
        let id = make_id("complete");
        let line = CommandLine::parse(input);
        let command = self.expand_alias(line.keyword()).to_string();
        let kinds = dispatch::kinds_for(&command, index);

        let candidates = self.run(&id, kinds, &line.current, working_dir)?;

        slog_debug!(
            "RESOLVER",
            "complete",
            json!({
                "id": id,
                "command": command,
                "slot": index,
                "kinds": kinds,
                "candidates": candidates.len(),
            })
        );

        Ok(CompletionReport {
            id,
            command,
            slot: Some(index),
            token: line.current,
            candidates,
        })
    }

    /// Candidates for the command keyword itself.
    ///
    /// A keyword starting with `./` runs a file directly, so it completes
    /// like the first argument of `run`. Anything else gets every terminal
    /// command followed by alias names.
    pub fn complete_command(
        &self,
        input: &str,
        working_dir: &str,
    ) -> Result<Vec<String>, StateError> {
        let id = make_id("keyword");
        let line = CommandLine::parse(input);
        let token = line.keyword();

        let (marker, _) = paths::resolve_relative_prefix(token);
        if !marker.is_empty() {
            return self.run(&id, dispatch::kinds_for("run", 0), token, working_dir);
        }

        let mut keywords: Vec<String> = TERMINAL_COMMANDS.iter().map(|c| c.to_string()).collect();
        keywords.extend(self.state.alias_names().into_iter().map(String::from));
        if self.config.dedupe {
            dedupe(&mut keywords);
        }

        slog_debug!(
            "RESOLVER",
            "complete_keyword",
            json!({ "id": id, "candidates": keywords.len() })
        );
        Ok(keywords)
    }

    /// Known commands stay as typed; an alias becomes the first word of
    /// its expansion
    fn expand_alias<'k>(&'k self, keyword: &'k str) -> &'k str {
        if crate::catalog::is_terminal_command(keyword) {
            return keyword;
        }
        self.state
            .alias(keyword)
            .and_then(|expansion| expansion.split_whitespace().next())
            .unwrap_or(keyword)
    }

    fn run(
        &self,
        id: &str,
        kinds: &[CandidateKind],
        token: &str,
        working_dir: &str,
    ) -> Result<Vec<String>, StateError> {
        if kinds.is_empty() {
            return Ok(vec![]);
        }

        let mut candidates = if kinds.iter().any(|k| k.needs_host()) {
            let host = network::current_host(self.state)?;
            let path = if kinds.iter().any(|k| k.reads_path()) {
                match PathContext::new(token, working_dir) {
                    Some(path) => path,
                    None => {
                        slog_debug!(
                            "RESOLVER",
                            "invalid_path",
                            json!({ "id": id, "token": token, "working_dir": working_dir })
                        );
                        return Ok(vec![]);
                    }
                }
            } else {
                PathContext::root()
            };
            let scope = ProviderScope {
                state: self.state,
                host,
                path: &path,
                config: &self.config,
            };
            scope.collect(kinds)
        } else {
            providers::purchasable_programs()
        };

        if self.config.dedupe {
            dedupe(&mut candidates);
        }
        Ok(candidates)
    }
}

/// Remove repeats, keeping the first occurrence
pub fn dedupe(candidates: &mut Vec<String>) {
    let mut seen = HashSet::new();
    candidates.retain(|c| seen.insert(c.clone()));
}

/// Resolve against a shared world. The read guard is held for the whole
/// evaluation, so a writer cannot change the world mid-request.
pub async fn complete_shared(
    world: &RwLock<World>,
    config: &CompletionConfig,
    input: &str,
    index: usize,
    working_dir: &str,
) -> Result<Vec<String>, StateError> {
    let snapshot = world.read().await;
    TabCompleter::with_config(&*snapshot, config.clone()).complete(input, index, working_dir)
}
