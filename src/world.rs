//! World - the slice of game state the terminal completer reads
//!
//! Hosts own a flat file store and an adjacency list. The completer only
//! ever sees the world through [`GameState`]; [`World`] is the in-memory
//! implementation used by the CLI, the Node bridge and the tests, and can
//! be loaded from a YAML or JSON snapshot.

use crate::error::WorldError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tokio::fs;

/// Read interface over game state
pub trait GameState {
    /// Hostname the player is currently connected to
    fn current_hostname(&self) -> &str;

    /// Look up a registered host
    fn server(&self, hostname: &str) -> Option<&Host>;

    /// Expansion of a terminal alias, local aliases shadowing global ones
    fn alias(&self, name: &str) -> Option<&str>;

    /// Alias names in completion order: local first, then global
    fn alias_names(&self) -> Vec<&str>;
}

/// An executable script stored under a path-like key
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScriptFile {
    pub filename: String,
    #[serde(default)]
    pub code: String,
}

/// A plain text note stored under a path-like key
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TextFile {
    #[serde(alias = "fn")]
    pub filename: String,
    #[serde(default)]
    pub text: String,
}

/// A simulated server
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Host {
    pub hostname: String,
    #[serde(default)]
    pub scripts: Vec<ScriptFile>,
    #[serde(default)]
    pub text_files: Vec<TextFile>,
    /// Coding contract file names (flat)
    #[serde(default)]
    pub contracts: Vec<String>,
    /// Inbox: `.msg` messages and literature such as `.lit` (flat)
    #[serde(default)]
    pub messages: Vec<String>,
    /// Installed program names (flat)
    #[serde(default)]
    pub programs: Vec<String>,
    /// Directly reachable hostnames, insertion ordered
    #[serde(default)]
    pub servers_on_network: Vec<String>,
}

impl Host {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            scripts: vec![],
            text_files: vec![],
            contracts: vec![],
            messages: vec![],
            programs: vec![],
            servers_on_network: vec![],
        }
    }

    /// Create or overwrite a script
    pub fn write_script(&mut self, filename: &str, code: &str) {
        match self.scripts.iter_mut().find(|s| s.filename == filename) {
            Some(script) => script.code = code.to_string(),
            None => self.scripts.push(ScriptFile {
                filename: filename.to_string(),
                code: code.to_string(),
            }),
        }
    }

    /// Create or overwrite a text file
    pub fn write_text_file(&mut self, filename: &str, text: &str) {
        match self.text_files.iter_mut().find(|t| t.filename == filename) {
            Some(file) => file.text = text.to_string(),
            None => self.text_files.push(TextFile {
                filename: filename.to_string(),
                text: text.to_string(),
            }),
        }
    }

    pub fn add_contract(&mut self, filename: &str) {
        push_unique(&mut self.contracts, filename);
    }

    pub fn add_message(&mut self, filename: &str) {
        push_unique(&mut self.messages, filename);
    }

    pub fn install_program(&mut self, name: &str) {
        push_unique(&mut self.programs, name);
    }

    pub fn has_program(&self, name: &str) -> bool {
        self.programs.iter().any(|p| p == name)
    }

    pub fn script_keys(&self) -> impl Iterator<Item = &str> {
        self.scripts.iter().map(|s| s.filename.as_str())
    }

    pub fn text_keys(&self) -> impl Iterator<Item = &str> {
        self.text_files.iter().map(|t| t.filename.as_str())
    }

    /// All path-like keys (scripts then text files); these define directories
    pub fn path_keys(&self) -> impl Iterator<Item = &str> {
        self.script_keys().chain(self.text_keys())
    }

    pub fn links_to(&self, hostname: &str) -> bool {
        self.servers_on_network.iter().any(|h| h == hostname)
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Where the player is
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub current_server: String,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            current_server: "home".to_string(),
        }
    }
}

/// On-disk snapshot layout
#[derive(Debug, Serialize, Deserialize)]
struct WorldFile {
    #[serde(default)]
    player: Player,
    #[serde(default)]
    hosts: Vec<Host>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
    #[serde(default)]
    global_aliases: BTreeMap<String, String>,
}

/// In-memory game state
#[derive(Clone, Debug, Default)]
pub struct World {
    pub player: Player,
    hosts: BTreeMap<String, Host>,
    pub aliases: BTreeMap<String, String>,
    pub global_aliases: BTreeMap<String, String>,
}

impl World {
    /// Empty world with the player on `home`
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh save: a `home` server with NUKE.exe installed
    pub fn with_home(home: &str) -> Self {
        let mut world = Self::new();
        let mut host = Host::new(home);
        host.install_program(crate::catalog::NUKE);
        world.add_host(host);
        world.player.current_server = home.to_string();
        world
    }

    /// Register a host, replacing any host with the same name
    pub fn add_host(&mut self, host: Host) {
        self.hosts.insert(host.hostname.clone(), host);
    }

    pub fn remove_host(&mut self, hostname: &str) -> Option<Host> {
        self.hosts.remove(hostname)
    }

    pub fn host(&self, hostname: &str) -> Option<&Host> {
        self.hosts.get(hostname)
    }

    pub fn host_mut(&mut self, hostname: &str) -> Option<&mut Host> {
        self.hosts.get_mut(hostname)
    }

    pub fn hostnames(&self) -> Vec<&str> {
        self.hosts.keys().map(|s| s.as_str()).collect()
    }

    /// Link two hosts in both directions. Returns false if either is unknown.
    pub fn connect_hosts(&mut self, a: &str, b: &str) -> bool {
        if !self.hosts.contains_key(a) || !self.hosts.contains_key(b) {
            return false;
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(host) = self.hosts.get_mut(from) {
                if !host.links_to(to) {
                    host.servers_on_network.push(to.to_string());
                }
            }
        }
        true
    }

    /// Parse a snapshot; `.json` is read as JSON, anything else as YAML
    pub fn parse(content: &str, json: bool) -> Result<Self, WorldError> {
        let file: WorldFile = if json {
            serde_json::from_str(content).map_err(|e| WorldError::Parse(e.to_string()))?
        } else {
            serde_yaml::from_str(content).map_err(|e| WorldError::Parse(e.to_string()))?
        };
        Self::from_file(file)
    }

    /// Load and validate a snapshot file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|source| WorldError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let json = path.extension().map(|e| e == "json").unwrap_or(false);
        Self::parse(&content, json)
    }

    /// Serialize back to YAML
    pub fn to_yaml(&self) -> Result<String, WorldError> {
        let file = WorldFile {
            player: self.player.clone(),
            hosts: self.hosts.values().cloned().collect(),
            aliases: self.aliases.clone(),
            global_aliases: self.global_aliases.clone(),
        };
        serde_yaml::to_string(&file).map_err(|e| WorldError::Parse(e.to_string()))
    }

    fn from_file(file: WorldFile) -> Result<Self, WorldError> {
        let hostname_re = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$")
            .map_err(|e| WorldError::Parse(e.to_string()))?;

        let mut hosts = BTreeMap::new();
        for host in file.hosts {
            if !hostname_re.is_match(&host.hostname) {
                return Err(WorldError::InvalidHostname(host.hostname));
            }
            if hosts.contains_key(&host.hostname) {
                return Err(WorldError::DuplicateHost(host.hostname));
            }
            hosts.insert(host.hostname.clone(), host);
        }

        let world = Self {
            player: file.player,
            hosts,
            aliases: file.aliases,
            global_aliases: file.global_aliases,
        };
        world.validate()?;
        Ok(world)
    }

    /// Check the adjacency invariants and the player's location
    pub fn validate(&self) -> Result<(), WorldError> {
        for host in self.hosts.values() {
            let mut seen = HashSet::new();
            for neighbor in &host.servers_on_network {
                if !seen.insert(neighbor.as_str()) {
                    continue;
                }
                let other = self.hosts.get(neighbor).ok_or_else(|| WorldError::DanglingLink {
                    from: host.hostname.clone(),
                    to: neighbor.clone(),
                })?;
                if !other.links_to(&host.hostname) {
                    return Err(WorldError::AsymmetricLink {
                        from: host.hostname.clone(),
                        to: neighbor.clone(),
                    });
                }
            }
        }

        if !self.hosts.contains_key(&self.player.current_server) {
            return Err(WorldError::UnknownCurrentServer(
                self.player.current_server.clone(),
            ));
        }

        Ok(())
    }
}

impl GameState for World {
    fn current_hostname(&self) -> &str {
        &self.player.current_server
    }

    fn server(&self, hostname: &str) -> Option<&Host> {
        self.hosts.get(hostname)
    }

    fn alias(&self, name: &str) -> Option<&str> {
        self.aliases
            .get(name)
            .or_else(|| self.global_aliases.get(name))
            .map(|s| s.as_str())
    }

    fn alias_names(&self) -> Vec<&str> {
        self.aliases
            .keys()
            .chain(self.global_aliases.keys())
            .map(|s| s.as_str())
            .collect()
    }
}
