pub mod classify;
pub mod identify;
pub mod lexicon;
pub mod scan;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::EngineConfig;
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "lexguard", version, about = "Text safety and nickname validation")]
pub struct Cli {
    /// Config file. Defaults to .lexguard/config.yml, then ~/.config/lexguard/config.yml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify text as allow, mask or block (reads stdin when TEXT is omitted).
    Classify { text: Option<String> },
    /// Detect the writing system of a nickname.
    Detect { identifier: String },
    /// Validate a nickname's format.
    Validate { identifier: String },
    /// Classify every line of a file, a directory tree, or git-staged files.
    Scan {
        path: Option<String>,
        #[arg(long)]
        staged: bool,
    },
    /// Show lexicon term counts and fingerprint.
    Lexicon,
}

impl Cli {
    /// Resolve the engine config for this invocation.
    pub fn load_config(&self) -> Result<EngineConfig> {
        match &self.config {
            Some(path) => EngineConfig::load_from(path),
            None => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                EngineConfig::discover(&cwd)
            }
        }
    }
}
