//! `steward run` — one reconciliation pass.

use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;
use steward_core::{Config, HttpManifestSource, Reconciler, StackLauncher};

/// Run a single converge pass and print the report.
pub async fn run(keep_going: bool) -> Result<()> {
    let config = Config::from_env()?;

    let manifests = Arc::new(HttpManifestSource::new(config.api_root.clone()));
    let runtime = super::runtime_from(&config)?;
    let launcher = StackLauncher::new(config.manifest_dir.clone(), runtime.clone());

    let reconciler = Reconciler::new(manifests, runtime, launcher).keep_going(keep_going);
    let report = reconciler.reconcile().await?;

    println!(
        "{} {} desired, {} already running, {} launched",
        "✓".green().bold(),
        report.desired,
        report.already_running,
        report.launched.len()
    );

    for name in &report.launched {
        println!("  {} {}", "•".dimmed(), name.bold());
    }

    if !report.failed.is_empty() {
        for failure in &report.failed {
            println!("{} {}: {}", "✗".red().bold(), failure.stack.bold(), failure.reason);
        }
        anyhow::bail!("{} stack(s) failed to launch", report.failed.len());
    }

    Ok(())
}
