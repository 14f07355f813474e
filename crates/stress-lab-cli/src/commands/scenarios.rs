use clap::Args;
use serde::Serialize;
use serde_json::Value;

use stress_lab_core::stress::catalog::{self, AssetShock, ScenarioKind};

/// Arguments for listing scenarios
#[derive(Args)]
pub struct ScenariosArgs {
    /// Show the per-asset factors of a single scenario
    #[arg(long)]
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScenarioRow<'a> {
    key: &'a str,
    name: &'a str,
    kind: ScenarioKind,
    description: &'a str,
}

pub fn run_scenarios(args: ScenariosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if let Some(ref key) = args.key {
        let scenario = catalog::lookup(key)?;
        let factors: &[AssetShock] = &scenario.factors;
        return Ok(serde_json::to_value(factors)?);
    }

    let rows: Vec<ScenarioRow<'_>> = catalog::list()
        .iter()
        .map(|s| ScenarioRow {
            key: &s.key,
            name: &s.name,
            kind: s.kind,
            description: &s.description,
        })
        .collect();
    Ok(serde_json::to_value(rows)?)
}
