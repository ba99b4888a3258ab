use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "steward")]
#[command(about = "Desired-state reconciler for compose stacks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one reconciliation pass
    Run {
        /// Continue past individual launch failures instead of aborting
        #[arg(long)]
        keep_going: bool,
    },

    /// Show desired stacks against runtime state without launching anything
    Status,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(true).with_level(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { keep_going } => {
            commands::run(keep_going).await?;
        }

        Commands::Status => {
            commands::status().await?;
        }
    }

    Ok(())
}
