//! `steward status` — read-only view of desired vs running stacks.

use anyhow::Result;
use colored::Colorize;
use std::collections::HashMap;
use steward_core::{Config, HttpManifestSource, ManifestSource, OrchestrationRuntime};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StackRow {
    #[tabled(rename = "STACK")]
    name: String,
    #[tabled(rename = "STATE")]
    state: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

/// Show every desired stack and whether the runtime is running it.
///
/// Performs no writes and no launches.
pub async fn status() -> Result<()> {
    let config = Config::from_env()?;

    let source = HttpManifestSource::new(config.api_root.clone());
    let runtime = super::runtime_from(&config)?;

    let manifests = source.fetch_manifests().await?;
    let stacks = runtime.list_stacks().await?;

    let by_name: HashMap<&str, &steward_core::StackStatus> =
        stacks.iter().map(|s| (s.name.as_str(), s)).collect();

    let rows: Vec<StackRow> = manifests
        .iter()
        .map(|m| {
            let stack = by_name.get(m.name.as_str());
            let running = stack.map(|s| s.is_running()).unwrap_or(false);

            StackRow {
                name: m.name.clone(),
                state: if running {
                    "running".green().to_string()
                } else {
                    "missing".red().to_string()
                },
                status: stack.map(|s| s.status.clone()).unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect();

    if rows.is_empty() {
        println!("No manifests desired");
        return Ok(());
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    Ok(())
}
