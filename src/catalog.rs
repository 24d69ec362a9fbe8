//! Static catalogs: the dark web store and the terminal's command keywords

use serde::Serialize;

/// The port-opening program every save starts with
pub const NUKE: &str = "NUKE.exe";

/// A program sold by the dark web store
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StoreItem {
    pub program: &'static str,
    pub price: u64,
    pub description: &'static str,
}

/// Store catalog in listing order
pub const DARK_WEB_ITEMS: &[StoreItem] = &[
    StoreItem { program: "BruteSSH.exe", price: 500_000, description: "Opens up SSH Ports." },
    StoreItem { program: "FTPCrack.exe", price: 1_500_000, description: "Opens up FTP Ports." },
    StoreItem { program: "relaySMTP.exe", price: 5_000_000, description: "Opens up SMTP Ports." },
    StoreItem { program: "HTTPWorm.exe", price: 30_000_000, description: "Opens up HTTP Ports." },
    StoreItem { program: "SQLInject.exe", price: 250_000_000, description: "Opens up SQL Ports." },
    StoreItem { program: "ServerProfiler.exe", price: 500_000, description: "Displays detailed information about a server." },
    StoreItem { program: "DeepscanV1.exe", price: 500_000, description: "Enables 'scan-analyze' with a depth up to 5." },
    StoreItem { program: "DeepscanV2.exe", price: 25_000_000, description: "Enables 'scan-analyze' with a depth up to 10." },
    StoreItem { program: "AutoLink.exe", price: 1_000_000, description: "Enables direct connect via 'scan-analyze'." },
    StoreItem { program: "Formulas.exe", price: 5_000_000_000, description: "Unlock access to the formulas API." },
];

/// Program names purchasable from the store, catalog order
pub fn purchasable_programs() -> Vec<String> {
    DARK_WEB_ITEMS.iter().map(|item| item.program.to_string()).collect()
}

/// Every keyword the terminal understands
pub const TERMINAL_COMMANDS: &[&str] = &[
    "alias",
    "analyze",
    "backdoor",
    "buy",
    "cat",
    "cd",
    "check",
    "clear",
    "cls",
    "connect",
    "download",
    "expr",
    "free",
    "grow",
    "hack",
    "help",
    "home",
    "hostname",
    "ifconfig",
    "kill",
    "killall",
    "ls",
    "lscpu",
    "mem",
    "mv",
    "nano",
    "ps",
    "rm",
    "run",
    "scan",
    "scan-analyze",
    "scp",
    "sudov",
    "tail",
    "theme",
    "top",
    "unalias",
    "vim",
    "weaken",
    "wget",
];

pub fn is_terminal_command(keyword: &str) -> bool {
    TERMINAL_COMMANDS.contains(&keyword)
}
