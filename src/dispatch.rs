//! Command dispatch table: which candidate kinds each argument slot accepts

use crate::providers::{
    CandidateKind, ALL_FILES_AND_DIRECTORIES, DIRECTORIES_ONLY, REMOVABLE_FILES_AND_DIRECTORIES,
    SCRIPTS_AND_DIRECTORIES,
};
use CandidateKind::*;

const RUN: &[CandidateKind] = &[Scripts, Programs, Contracts, Directories];
const CAT: &[CandidateKind] = &[Messages, Literature, TextFiles, Directories];
const EDITABLE: &[CandidateKind] = &[Scripts, TextFiles, Directories];

/// Candidate kinds for `command` at argument `slot`, in invocation order.
///
/// Lookup is case-sensitive; unknown commands and undefined slots get an
/// empty slice.
pub fn kinds_for(command: &str, slot: usize) -> &'static [CandidateKind] {
    match (command, slot) {
        ("connect", 0) => &[Neighbors],
        ("buy", 0) => &[Purchasable],
        ("scp", 0) => ALL_FILES_AND_DIRECTORIES,
        ("scp", 1) => &[RemoteTargets],
        ("kill" | "tail" | "mem" | "check", 0) => SCRIPTS_AND_DIRECTORIES,
        ("nano" | "vim", 0) => EDITABLE,
        ("rm", 0) => REMOVABLE_FILES_AND_DIRECTORIES,
        ("run", 0) => RUN,
        ("cat", 0) => CAT,
        ("download" | "mv", 0) => EDITABLE,
        ("cd" | "ls", 0) => DIRECTORIES_ONLY,
        _ => &[],
    }
}

/// Commands with at least one completable slot
pub fn completable_commands() -> Vec<&'static str> {
    crate::catalog::TERMINAL_COMMANDS
        .iter()
        .copied()
        .filter(|command| !kinds_for(command, 0).is_empty())
        .collect()
}
