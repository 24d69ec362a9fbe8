/*!
 * N-API Bridge - Expose the completion resolver to the Node.js terminal UI
 *
 * Provides Node.js bindings for:
 * - Argument completion over a JSON world snapshot
 * - Command keyword completion
 * - The store catalog
 */

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::catalog::DARK_WEB_ITEMS;
use crate::config::CompletionConfig;
use crate::completions::TabCompleter;
use crate::world::World;

fn parse_world(world_json: &str) -> Result<World> {
    World::parse(world_json, true)
        .map_err(|e| Error::from_reason(format!("Invalid world snapshot: {}", e)))
}

fn parse_config(config_json: Option<String>) -> Result<CompletionConfig> {
    match config_json {
        Some(json) => CompletionConfig::from_json(&json)
            .map_err(|e| Error::from_reason(format!("Invalid completion config: {}", e))),
        None => Ok(CompletionConfig::default()),
    }
}

/// Completion candidates for one argument slot
#[napi(object)]
pub struct CompletionResult {
    pub id: String,
    pub command: String,
    pub candidates: Vec<String>,
}

#[napi]
pub fn complete_js(
    world_json: String,
    line: String,
    index: u32,
    cwd: Option<String>,
    config_json: Option<String>,
) -> Result<CompletionResult> {
    let world = parse_world(&world_json)?;
    let config = parse_config(config_json)?;
    let report = TabCompleter::with_config(&world, config)
        .complete_report(&line, index as usize, cwd.as_deref().unwrap_or(""))
        .map_err(|e| Error::from_reason(e.to_string()))?;

    Ok(CompletionResult {
        id: report.id,
        command: report.command,
        candidates: report.candidates,
    })
}

#[napi]
pub fn complete_keyword_js(
    world_json: String,
    line: String,
    cwd: Option<String>,
) -> Result<Vec<String>> {
    let world = parse_world(&world_json)?;
    TabCompleter::new(&world)
        .complete_command(&line, cwd.as_deref().unwrap_or(""))
        .map_err(|e| Error::from_reason(e.to_string()))
}

/// A program sold by the store
#[napi(object)]
pub struct StoreItemJs {
    pub program: String,
    pub price: f64,
}

#[napi]
pub fn store_catalog_js() -> Vec<StoreItemJs> {
    DARK_WEB_ITEMS
        .iter()
        .map(|item| StoreItemJs {
            program: item.program.to_string(),
            price: item.price as f64,
        })
        .collect()
}
