//! Structured Logging - JSON-formatted logs for machine parsing
//!
//! Every completion request emits one-line JSON events so a UI host can
//! correlate keystrokes with the candidates that were produced.
//!
//! Usage:
//!   use netterm_core::structured_log::{log_event, LogLevel};
//!
//!   log_event(LogLevel::Debug, "RESOLVER", "dispatch", json!({
//!       "command": "scp",
//!       "slot": 1,
//!       "candidates": 2
//!   }));
//!
//! Output (to stderr and optionally file):
//!   {"timestamp":"2026-10-19T12:34:56Z","level":"debug","component":"RESOLVER","event":"dispatch","data":{"command":"scp","slot":1,"candidates":2}}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Environment variable that overrides the minimum log level
pub const LOG_ENV: &str = "NETTERM_LOG";

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
    static ref LOG_CONFIG: Mutex<LogConfig> = Mutex::new(LogConfig::from_env());
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub component: String,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub json_output: bool,
    pub file_path: Option<PathBuf>,
    pub min_level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            json_output: true,
            file_path: None,
            min_level: LogLevel::Warn,
        }
    }
}

impl LogConfig {
    /// Default config with the level taken from `NETTERM_LOG` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(level) = std::env::var(LOG_ENV).ok().as_deref().and_then(LogLevel::parse) {
            config.min_level = level;
        }
        config
    }
}

/// Generate a unique ID with prefix, used to correlate events of one request
pub fn make_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

/// Initialize the structured logger
pub fn init_logger(config: LogConfig) {
    if let Some(path) = &config.file_path {
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
            if let Ok(mut log_file) = LOG_FILE.lock() {
                *log_file = Some(file);
            }
        }
    }

    if let Ok(mut cfg) = LOG_CONFIG.lock() {
        *cfg = config;
    }
}

/// Log an event with structured data
pub fn log_event(level: LogLevel, component: &str, event: &str, data: serde_json::Value) {
    log_entry(level, component, event, None, Some(data));
}

/// Log a message with optional data
pub fn log_message(
    level: LogLevel,
    component: &str,
    event: &str,
    message: &str,
    data: Option<serde_json::Value>,
) {
    log_entry(level, component, event, Some(message.to_string()), data);
}

fn log_entry(
    level: LogLevel,
    component: &str,
    event: &str,
    message: Option<String>,
    data: Option<serde_json::Value>,
) {
    let config = match LOG_CONFIG.lock() {
        Ok(guard) => (*guard).clone(),
        Err(_) => LogConfig::default(),
    };

    if level < config.min_level {
        return;
    }

    let entry = LogEntry {
        timestamp: Utc::now(),
        level: level.as_str().to_string(),
        component: component.to_string(),
        event: event.to_string(),
        message,
        data,
    };

    let output = format_entry(&entry, config.json_output);

    eprintln!("{}", output);

    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let _ = writeln!(file, "{}", output);
        }
    }
}

fn format_entry(entry: &LogEntry, json: bool) -> String {
    if json {
        return serde_json::to_string(entry).unwrap_or_else(|_| format!("{:?}", entry));
    }

    // [COMPONENT] event: message {data}
    let msg = entry.message.as_deref().unwrap_or("");
    let data_str = entry
        .data
        .as_ref()
        .map(|d| format!(" {}", d))
        .unwrap_or_default();

    format!("[{}] {}: {}{}", entry.component, entry.event, msg, data_str)
}

#[macro_export]
macro_rules! slog_debug {
    ($component:expr, $event:expr, $data:expr) => {
        $crate::structured_log::log_event(
            $crate::structured_log::LogLevel::Debug,
            $component,
            $event,
            $data,
        )
    };
}

#[macro_export]
macro_rules! slog_info {
    ($component:expr, $event:expr, $data:expr) => {
        $crate::structured_log::log_event(
            $crate::structured_log::LogLevel::Info,
            $component,
            $event,
            $data,
        )
    };
}

#[macro_export]
macro_rules! slog_warn {
    ($component:expr, $event:expr, $data:expr) => {
        $crate::structured_log::log_event(
            $crate::structured_log::LogLevel::Warn,
            $component,
            $event,
            $data,
        )
    };
}

#[macro_export]
macro_rules! slog_error {
    ($component:expr, $event:expr, $data:expr) => {
        $crate::structured_log::log_event(
            $crate::structured_log::LogLevel::Error,
            $component,
            $event,
            $data,
        )
    };
    ($component:expr, $event:expr, $msg:expr, $data:expr) => {
        $crate::structured_log::log_message(
            $crate::structured_log::LogLevel::Error,
            $component,
            $event,
            $msg,
            $data,
        )
    };
}
