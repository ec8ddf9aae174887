//! # covenant CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Covenant — contract compliance analysis toolchain.
///
/// Analyzes commercial contract text against the builtin regulation
/// catalog and reports compliance scores, gaps, and suggested clauses.
#[derive(Parser, Debug)]
#[command(name = "covenant", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze a contract from a file or stdin.
    Analyze(covenant_cli::analyze::AnalyzeArgs),
    /// Inspect the regulation catalog.
    Regulations(covenant_cli::regulations::RegulationsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => covenant_cli::analyze::run(args).await,
        Commands::Regulations(args) => covenant_cli::regulations::run(args),
    }
}
