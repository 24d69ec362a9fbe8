//! paths - directory view over a host's flat file namespace
//! - file keys are full path strings ("/www/script.js", "note.txt")
//! - directories only exist as shared key prefixes
//! - canonical directories are "" (root) or "a/b/" (no leading slash, trailing slash)

use std::collections::HashSet;

/// Relative marker a user may type in front of a path
pub const RELATIVE_MARKER: &str = "./";

/// Strip the leading `/` so "/www/a.js" and "www/a.js" compare equal
pub fn normalize_key(key: &str) -> &str {
    key.trim_start_matches('/')
}

/// Canonical form of a directory: "" for root, otherwise "a/b/"
pub fn normalize_dir(dir: &str) -> String {
    let segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        String::new()
    } else {
        format!("{}/", segments.join("/"))
    }
}

/// Every distinct immediate child of `working_dir`.
///
/// Files directly inside the directory come back bare; anything nested
/// deeper collapses into its first directory segment with a trailing `/`.
/// Output follows first appearance in `keys`.
pub fn list_immediate_children<'a, I>(keys: I, working_dir: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let dir = normalize_dir(working_dir);
    let mut seen = HashSet::new();
    let mut children = Vec::new();

    for key in keys {
        let Some(rest) = normalize_key(key).strip_prefix(dir.as_str()) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }

        let child = match rest.find('/') {
            Some(idx) => format!("{}/", &rest[..idx]),
            None => rest.to_string(),
        };

        if seen.insert(child.clone()) {
            children.push(child);
        }
    }

    children
}

/// Only the directory entries of [`list_immediate_children`]
pub fn subdirectories<'a, I>(keys: I, working_dir: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    list_immediate_children(keys, working_dir)
        .into_iter()
        .filter(|child| child.ends_with('/'))
        .collect()
}

/// Split leading `./` markers (repeatable) off a token.
///
/// Returns `(marker, remainder)`; `marker` is exactly what the user typed.
pub fn resolve_relative_prefix(token: &str) -> (&str, &str) {
    let mut rest = token;
    while let Some(stripped) = rest.strip_prefix(RELATIVE_MARKER) {
        rest = stripped;
    }
    token.split_at(token.len() - rest.len())
}

/// Split a token into the directory part as typed (through the last `/`)
/// and the leaf being typed
pub fn split_parent(token: &str) -> (&str, &str) {
    match token.rfind('/') {
        Some(idx) => token.split_at(idx + 1),
        None => ("", token),
    }
}

/// Resolve a typed directory against the working directory.
///
/// Handles `.`, `..` and absolute paths. Returns the canonical directory,
/// or `None` when the path walks above the root.
pub fn evaluate_directory(typed: &str, working_dir: &str) -> Option<String> {
    let mut stack: Vec<&str> = if typed.starts_with('/') {
        Vec::new()
    } else {
        working_dir.split('/').filter(|s| !s.is_empty()).collect()
    };

    for segment in typed.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop()?;
            }
            name => stack.push(name),
        }
    }

    Some(if stack.is_empty() {
        String::new()
    } else {
        format!("{}/", stack.join("/"))
    })
}

/// Where the in-progress token points, and how to echo candidates back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathContext {
    typed_parent: String,
    resolved: String,
}

impl PathContext {
    /// Build the context for `token` typed while in `working_dir`.
    /// `None` if the typed directory is not a valid path.
    pub fn new(token: &str, working_dir: &str) -> Option<Self> {
        let (typed_parent, _leaf) = split_parent(token);
        let resolved = evaluate_directory(typed_parent, working_dir)?;
        Some(Self {
            typed_parent: typed_parent.to_string(),
            resolved,
        })
    }

    /// Context for an untyped argument at the root
    pub fn root() -> Self {
        Self {
            typed_parent: String::new(),
            resolved: String::new(),
        }
    }

    /// Directory part of the token exactly as typed
    pub fn typed_parent(&self) -> &str {
        &self.typed_parent
    }

    /// Canonical directory the token points into ("" = root)
    pub fn resolved(&self) -> &str {
        &self.resolved
    }

    pub fn is_root(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Candidate string for a path-like file key, if it is visible here
    pub fn file_candidate(&self, key: &str) -> Option<String> {
        if !self.is_root() {
            let rest = normalize_key(key).strip_prefix(self.resolved.as_str())?;
            return Some(format!("{}{}", self.typed_parent, rest));
        }

        let (marker, rest) = resolve_relative_prefix(&self.typed_parent);
        if rest.is_empty() {
            // only `./` markers typed: echo the key as stored behind them
            Some(format!("{}{}", marker, key))
        } else {
            Some(format!("{}{}", self.typed_parent, normalize_key(key)))
        }
    }

    /// Directory candidates below the resolved directory
    pub fn directory_candidates<'a, I>(&self, keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        subdirectories(keys, &self.resolved)
            .into_iter()
            .map(|dir| format!("{}{}", self.typed_parent, dir))
            .collect()
    }
}
