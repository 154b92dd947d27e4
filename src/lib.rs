//! Text safety classification and nickname validation.
//!
//! Two pure pipelines over short, untrusted Unicode strings:
//!
//! - `raw text -> normalize -> classify -> (mask) -> decision`
//! - `raw identifier -> detect script -> validate format -> result`
//!
//! Build an [`Engine`] explicitly from an [`EngineConfig`], or use the
//! process-wide engine behind [`initialize`], [`classify`],
//! [`detect_script`] and [`validate_identifier_format`].

pub mod classifier;
pub mod cli;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod identifier;
pub mod lexicon;
pub mod normalize;
pub mod script;

pub use config::EngineConfig;
pub use decision::{ClassificationResult, Decision};
pub use engine::Engine;
pub use error::{LexguardError, Result};
pub use identifier::{ErrorKind, IdentifierValidationResult};
pub use script::ScriptTag;

/// Build the process-wide lexicon and engine. Idempotent: only the first
/// call's lists take effect.
pub fn initialize(custom_words: &[String], allow_list: &[String]) -> &'static Engine {
    engine::initialize(custom_words, allow_list)
}

/// Classify text with the process-wide engine.
pub fn classify(text: &str) -> ClassificationResult {
    engine::global().classify(text)
}

/// Detect an identifier's script with the process-wide engine.
pub fn detect_script(identifier: &str) -> ScriptTag {
    engine::global().detect_script(identifier)
}

/// Validate an identifier's format with the process-wide engine.
pub fn validate_identifier_format(identifier: &str) -> IdentifierValidationResult {
    engine::global().validate_identifier_format(identifier)
}
