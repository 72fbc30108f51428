//! Rendering of simulation results.

use rpssl_logic::{Report, SimulationConfig, Statistics};
use serde::Serialize;

use crate::types::OutputFormat;

/// Everything written for `--format json`
#[derive(Serialize)]
struct JsonOutput<'a> {
    config: SimulationConfig,
    rounds: u64,
    ties: u64,
    report: &'a Report,
}

/// Render the report in the requested format.
///
/// Text output is exactly one line per move.
pub fn render(
    format: OutputFormat,
    config: SimulationConfig,
    stats: &Statistics,
    report: &Report,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            let output = JsonOutput {
                config,
                rounds: stats.rounds(),
                ties: stats.ties(),
                report,
            };
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Round and tie counts, for `--summary`
pub fn summary(stats: &Statistics, seed: &[u8; 32]) -> String {
    format!(
        "=== Simulation Summary ===\n\
         Seed: {}\n\
         Rounds played: {}\n\
         Decided rounds: {}\n\
         Ties (same move): {}\n\
         Ties (no dominant move): {}\n",
        hex::encode(seed),
        stats.rounds(),
        stats.decided_rounds(),
        stats.duplicate_ties(),
        stats.unresolved_ties(),
    )
}
