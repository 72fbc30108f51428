//! WASM bindings for running simulations in the browser

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{simulate, Move, Report, RuleTable, SeededRng, SimulationConfig};

fn standard_rules() -> Result<RuleTable, JsError> {
    RuleTable::standard().map_err(|e| JsError::new(&format!("Invalid rule table: {}", e)))
}

fn seed_from_slice(seed: &[u8]) -> Result<[u8; 32], JsError> {
    seed.try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))
}

fn run(seed: &[u8], config: SimulationConfig) -> Result<Report, JsError> {
    let rules = standard_rules()?;
    let seed_arr = seed_from_slice(seed)?;
    let stats = simulate(&rules, config, SeededRng::new(&seed_arr));
    Ok(Report::from_statistics(&stats))
}

/// Run a simulation and return the report
///
/// # Arguments
/// * `seed` - 32-byte randomness seed
/// * `players` - Players per round
/// * `games` - Number of rounds
///
/// # Returns
/// JSON serialized Report
#[wasm_bindgen]
pub fn simulate_rounds(seed: &[u8], players: u32, games: u32) -> Result<JsValue, JsError> {
    let report = run(seed, SimulationConfig::new(players, games))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Run a simulation described by a `SimulationConfig` JSON string
/// and return the plain-text report
#[wasm_bindgen]
pub fn simulate_from_config(config_json: &str, seed: &[u8]) -> Result<String, JsError> {
    let config: SimulationConfig = serde_json::from_str(config_json)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?;

    Ok(run(seed, config)?.to_string())
}

/// Default configuration as JSON
#[wasm_bindgen]
pub fn default_config() -> Result<String, JsError> {
    serde_json::to_string(&SimulationConfig::default())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct RuleInfo {
    id: Move,
    name: &'static str,
    beats: Vec<Move>,
}

/// List every move with the moves it beats
#[wasm_bindgen]
pub fn describe_rules() -> Result<JsValue, JsError> {
    let rules = standard_rules()?;
    let info: Vec<RuleInfo> = Move::ALL
        .iter()
        .map(|mv| RuleInfo {
            id: *mv,
            name: mv.name(),
            beats: rules.beats(*mv).into(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&info)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
