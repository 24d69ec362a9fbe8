//! Candidate providers - one function per kind of thing a slot can accept
//!
//! Providers read a single host through a [`PathContext`] and never touch
//! game state beyond it; network-wide kinds go through [`crate::network`].
//! Flat kinds (programs, contracts, messages) live at the root only and are
//! never re-prefixed with the typed directory.

use crate::catalog::{self, NUKE};
use crate::config::CompletionConfig;
use crate::network;
use crate::paths::PathContext;
use crate::world::{GameState, Host};
use serde::{Deserialize, Serialize};

/// Kinds of completion candidates, in the vocabulary of the dispatch table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Scripts,
    Programs,
    TextFiles,
    Contracts,
    /// `.msg` inbox entries
    Messages,
    /// Non-`.msg` inbox entries (`.lit` and friends)
    Literature,
    Directories,
    /// Hosts one hop from the current host
    Neighbors,
    /// `home` plus the current host's neighbours
    RemoteTargets,
    /// The store catalog
    Purchasable,
}

impl CandidateKind {
    /// False for kinds that read nothing from game state
    pub fn needs_host(self) -> bool {
        !matches!(self, CandidateKind::Purchasable)
    }

    /// False for kinds whose candidates ignore the typed path
    pub fn reads_path(self) -> bool {
        !matches!(
            self,
            CandidateKind::Neighbors | CandidateKind::RemoteTargets | CandidateKind::Purchasable
        )
    }
}

pub const SCRIPTS_AND_DIRECTORIES: &[CandidateKind] =
    &[CandidateKind::Scripts, CandidateKind::Directories];

pub const ALL_FILES_AND_DIRECTORIES: &[CandidateKind] = &[
    CandidateKind::Scripts,
    CandidateKind::Literature,
    CandidateKind::TextFiles,
    CandidateKind::Contracts,
    CandidateKind::Directories,
];

pub const REMOVABLE_FILES_AND_DIRECTORIES: &[CandidateKind] = &[
    CandidateKind::Scripts,
    CandidateKind::Programs,
    CandidateKind::Literature,
    CandidateKind::TextFiles,
    CandidateKind::Contracts,
    CandidateKind::Directories,
];

pub const DIRECTORIES_ONLY: &[CandidateKind] = &[CandidateKind::Directories];

fn is_message(name: &str) -> bool {
    name.ends_with(".msg")
}

/// Scripts visible from the path context
pub fn scripts(host: &Host, ctx: &PathContext) -> Vec<String> {
    host.script_keys().filter_map(|key| ctx.file_candidate(key)).collect()
}

/// Text files visible from the path context
pub fn text_files(host: &Host, ctx: &PathContext) -> Vec<String> {
    host.text_keys().filter_map(|key| ctx.file_candidate(key)).collect()
}

pub fn contracts(host: &Host, ctx: &PathContext) -> Vec<String> {
    if !ctx.is_root() {
        return vec![];
    }
    host.contracts.clone()
}

pub fn messages(host: &Host, ctx: &PathContext) -> Vec<String> {
    if !ctx.is_root() {
        return vec![];
    }
    host.messages.iter().filter(|m| is_message(m)).cloned().collect()
}

pub fn literature(host: &Host, ctx: &PathContext) -> Vec<String> {
    if !ctx.is_root() {
        return vec![];
    }
    host.messages.iter().filter(|m| !is_message(m)).cloned().collect()
}

/// Installed programs. NUKE.exe leads the list when it is offered but not
/// installed.
pub fn programs(host: &Host, ctx: &PathContext, config: &CompletionConfig) -> Vec<String> {
    if !ctx.is_root() {
        return vec![];
    }
    let mut names = Vec::with_capacity(host.programs.len() + 1);
    if config.offer_nuke && !host.has_program(NUKE) {
        names.push(NUKE.to_string());
    }
    names.extend(host.programs.iter().cloned());
    names
}

/// Directory entries below the resolved directory
pub fn directories(host: &Host, ctx: &PathContext) -> Vec<String> {
    ctx.directory_candidates(host.path_keys())
}

pub fn purchasable_programs() -> Vec<String> {
    catalog::purchasable_programs()
}

/// Candidates of a kind that only needs the host itself
fn host_candidates(
    host: &Host,
    ctx: &PathContext,
    config: &CompletionConfig,
    kind: CandidateKind,
) -> Vec<String> {
    match kind {
        CandidateKind::Scripts => scripts(host, ctx),
        CandidateKind::Programs => programs(host, ctx, config),
        CandidateKind::TextFiles => text_files(host, ctx),
        CandidateKind::Contracts => contracts(host, ctx),
        CandidateKind::Messages => messages(host, ctx),
        CandidateKind::Literature => literature(host, ctx),
        CandidateKind::Directories => directories(host, ctx),
        CandidateKind::Purchasable => purchasable_programs(),
        CandidateKind::Neighbors | CandidateKind::RemoteTargets => vec![],
    }
}

fn concat(
    host: &Host,
    ctx: &PathContext,
    config: &CompletionConfig,
    kinds: &[CandidateKind],
) -> Vec<String> {
    kinds
        .iter()
        .flat_map(|kind| host_candidates(host, ctx, config, *kind))
        .collect()
}

pub fn scripts_and_directories(host: &Host, ctx: &PathContext) -> Vec<String> {
    concat(host, ctx, &CompletionConfig::default(), SCRIPTS_AND_DIRECTORIES)
}

pub fn all_files_and_directories(host: &Host, ctx: &PathContext) -> Vec<String> {
    concat(host, ctx, &CompletionConfig::default(), ALL_FILES_AND_DIRECTORIES)
}

pub fn removable_files_and_directories(
    host: &Host,
    ctx: &PathContext,
    config: &CompletionConfig,
) -> Vec<String> {
    concat(host, ctx, config, REMOVABLE_FILES_AND_DIRECTORIES)
}

pub fn directories_only(host: &Host, ctx: &PathContext) -> Vec<String> {
    concat(host, ctx, &CompletionConfig::default(), DIRECTORIES_ONLY)
}

/// Everything a provider may consult for one completion request
pub struct ProviderScope<'a, S: GameState + ?Sized> {
    pub state: &'a S,
    pub host: &'a Host,
    pub path: &'a PathContext,
    pub config: &'a CompletionConfig,
}

impl<'a, S: GameState + ?Sized> ProviderScope<'a, S> {
    pub fn candidates(&self, kind: CandidateKind) -> Vec<String> {
        match kind {
            CandidateKind::Neighbors => network::connectable_neighbors(self.state, self.host),
            CandidateKind::RemoteTargets => {
                network::remote_targets(self.state, self.host, &self.config.home_hostname)
            }
            other => host_candidates(self.host, self.path, self.config, other),
        }
    }

    /// Run providers in order and concatenate their output
    pub fn collect(&self, kinds: &[CandidateKind]) -> Vec<String> {
        kinds.iter().flat_map(|kind| self.candidates(*kind)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Host {
        let mut host = Host::new("home");
        host.install_program(NUKE);
        host.write_script("/www/script.js", "");
        host.write_text_file("note.txt", "");
        host.add_contract("linklist.cct");
        host.add_message("asl.msg");
        host.add_message("af.lit");
        host
    }

    #[test]
    fn test_inbox_split() {
        let host = home();
        let root = PathContext::root();
        assert_eq!(messages(&host, &root), vec!["asl.msg"]);
        assert_eq!(literature(&host, &root), vec!["af.lit"]);
    }

    #[test]
    fn test_flat_kinds_only_at_root() {
        let host = home();
        let www = PathContext::new("www/", "").unwrap();
        assert!(contracts(&host, &www).is_empty());
        assert!(literature(&host, &www).is_empty());
        assert!(programs(&host, &www, &CompletionConfig::default()).is_empty());
        assert_eq!(scripts(&host, &www), vec!["www/script.js"]);
    }

    #[test]
    fn test_nuke_offered_once() {
        let root = PathContext::root();
        let config = CompletionConfig::default();

        let installed = home();
        assert_eq!(programs(&installed, &root, &config), vec![NUKE]);

        let mut bare = Host::new("n00dles");
        bare.install_program("BruteSSH.exe");
        assert_eq!(programs(&bare, &root, &config), vec![NUKE, "BruteSSH.exe"]);

        let strict = CompletionConfig {
            offer_nuke: false,
            ..CompletionConfig::default()
        };
        assert_eq!(programs(&bare, &root, &strict), vec!["BruteSSH.exe"]);
    }

    #[test]
    fn test_composites_keep_kind_order() {
        let host = home();
        let root = PathContext::root();
        assert_eq!(
            all_files_and_directories(&host, &root),
            vec!["/www/script.js", "af.lit", "note.txt", "linklist.cct", "www/"]
        );
        assert_eq!(
            removable_files_and_directories(&host, &root, &CompletionConfig::default()),
            vec!["/www/script.js", "NUKE.exe", "af.lit", "note.txt", "linklist.cct", "www/"]
        );
        assert_eq!(scripts_and_directories(&host, &root), vec!["/www/script.js", "www/"]);
        assert_eq!(directories_only(&host, &root), vec!["www/"]);
    }

    #[test]
    fn test_directory_flattening() {
        let mut host = Host::new("home");
        host.write_script("/www/a.js", "");
        host.write_script("/www/b.js", "");
        assert_eq!(directories(&host, &PathContext::root()), vec!["www/"]);
    }

    #[test]
    fn test_empty_host_yields_empty_lists() {
        let host = Host::new("blank");
        let root = PathContext::root();
        assert!(all_files_and_directories(&host, &root).is_empty());
        assert!(directories_only(&host, &root).is_empty());
    }
}
