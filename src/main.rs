use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexguard::cli::{self, Cli, Commands};
use lexguard::Engine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = args.load_config().context("failed to load config")?;
    let engine = Engine::new(&config).context("failed to build engine")?;

    let code = match &args.command {
        Commands::Classify { text } => cli::classify::run(&engine, text.as_deref(), args.json)?,
        Commands::Detect { identifier } => {
            cli::identify::run_detect(&engine, identifier, args.json)?
        }
        Commands::Validate { identifier } => {
            cli::identify::run_validate(&engine, identifier, args.json)?
        }
        Commands::Scan { path, staged } => {
            cli::scan::run(&engine, *staged, path.as_deref(), args.json)?
        }
        Commands::Lexicon => cli::lexicon::run(&engine, args.json)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
