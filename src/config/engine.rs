use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::classifier::mask::DEFAULT_PLACEHOLDER;
use crate::error::{LexguardError, Result};
use crate::identifier::LengthBounds;
use crate::normalize::SymbolFilter;
use crate::script::LatinWeights;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Custom and allow-listed mask terms.
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Normalizer options.
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Masking options.
    #[serde(default)]
    pub masking: MaskingConfig,

    /// Nickname validation policy.
    #[serde(default)]
    pub identifier: IdentifierConfig,
}

impl EngineConfig {
    /// Load config from a YAML file. Returns default if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|e| LexguardError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Path of the project config under `project_root`.
    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(".lexguard").join("config.yml")
    }

    /// Load config from the project root. Checks `.lexguard/config.yml`.
    pub fn load_project(project_root: &Path) -> Result<Self> {
        Self::load_from(&Self::project_path(project_root))
    }

    /// Project config if present, otherwise the global config, otherwise defaults.
    pub fn discover(project_root: &Path) -> Result<Self> {
        let project = Self::project_path(project_root);
        if project.exists() {
            return Self::load_from(&project);
        }
        Self::load_from(&super::dirs_global().join("config.yml"))
    }
}

/// Lexicon inputs layered over the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Extra soft-mask terms.
    #[serde(default)]
    pub custom_words: Vec<String>,

    /// Terms removed from the mask dictionary.
    #[serde(default)]
    pub allow_list: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub symbol_filter: SymbolFilter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Placeholder char. Must not be alphanumeric. Default: `*`.
    #[serde(default = "default_placeholder")]
    pub placeholder: char,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }
}

/// Nickname structure policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifierConfig {
    /// Designated separator char. Default: `_`.
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Most separators allowed. Default: 2.
    #[serde(default = "default_max_separators")]
    pub max_separators: usize,

    /// Longest allowed run of one char. Default: 2.
    #[serde(default = "default_max_repeat")]
    pub max_repeat: usize,

    /// Length bound overrides keyed by script code (`ko`, `en`, ...).
    #[serde(default)]
    pub bounds: BTreeMap<String, LengthBounds>,

    /// Latin language scoring weights.
    #[serde(default)]
    pub latin_weights: LatinWeights,
}

fn default_separator() -> char {
    '_'
}
fn default_max_separators() -> usize {
    2
}
fn default_max_repeat() -> usize {
    2
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            separator: '_',
            max_separators: 2,
            max_repeat: 2,
            bounds: BTreeMap::new(),
            latin_weights: LatinWeights::default(),
        }
    }
}
