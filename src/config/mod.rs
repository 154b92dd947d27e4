pub mod engine;

pub use engine::*;

use std::path::PathBuf;

/// Returns the global config directory path: `~/.config/lexguard/`
pub fn dirs_global() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("lexguard")
}
