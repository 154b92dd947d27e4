pub mod rules;

use serde::{Deserialize, Serialize};

use crate::config::IdentifierConfig;
use crate::error::Result;
use crate::script::{compose, family_of, fold_case, ScriptDetector, ScriptFamily, ScriptTag};

pub use rules::{LengthBounds, RuleTable, ScriptRule};

/// Why an identifier was rejected. Returned as data, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    #[error("nickname is required")]
    Required,

    #[error("nickname must not contain spaces")]
    NoSpaces,

    #[error("nickname must not be numbers only")]
    NoNumericOnly,

    #[error("nickname must not repeat the same character too many times in a row")]
    NoConsecutiveRepeat,

    #[error("nickname contains too many separators")]
    SeparatorLimit,

    #[error("nickname must use a single writing system")]
    SingleScriptOnly,

    #[error("nickname uses an unsupported writing system")]
    UnknownScript,

    #[error("nickname contains characters not allowed for its writing system")]
    InvalidChars,

    #[error("nickname must be between {min} and {max} characters")]
    LengthOutOfRange { min: usize, max: usize },
}

impl ErrorKind {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::NoSpaces => "no_spaces",
            ErrorKind::NoNumericOnly => "no_numeric_only",
            ErrorKind::NoConsecutiveRepeat => "no_consecutive_repeat",
            ErrorKind::SeparatorLimit => "separator_limit",
            ErrorKind::SingleScriptOnly => "single_script_only",
            ErrorKind::UnknownScript => "unknown_script",
            ErrorKind::InvalidChars => "invalid_chars",
            ErrorKind::LengthOutOfRange { .. } => "length_out_of_range",
        }
    }
}

/// Outcome of [`IdentifierValidator::validate_format`].
///
/// An `error` means the caller must stop before any uniqueness or
/// persistence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierValidationResult {
    pub script: Option<ScriptTag>,
    pub error: Option<ErrorKind>,
}

impl IdentifierValidationResult {
    pub fn ok(script: ScriptTag) -> Self {
        Self {
            script: Some(script),
            error: None,
        }
    }

    pub fn fail(script: Option<ScriptTag>, error: ErrorKind) -> Self {
        Self {
            script,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Structural nickname rules, applied per detected script.
#[derive(Debug, Clone)]
pub struct IdentifierValidator {
    detector: ScriptDetector,
    rules: RuleTable,
    separator: char,
    max_separators: usize,
    max_repeat: usize,
}

impl IdentifierValidator {
    pub fn new(config: &IdentifierConfig) -> Result<Self> {
        Ok(Self {
            detector: ScriptDetector::new(config.latin_weights),
            rules: RuleTable::new(&config.bounds)?,
            separator: config.separator,
            max_separators: config.max_separators,
            max_repeat: config.max_repeat,
        })
    }

    pub fn detector(&self) -> &ScriptDetector {
        &self.detector
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Validate an identifier's format. Rules run in a fixed order and the
    /// first failure is reported. Input is composed to NFC first, so lengths
    /// count precomposed letters.
    pub fn validate_format(&self, identifier: &str) -> IdentifierValidationResult {
        use IdentifierValidationResult as R;

        let composed = compose(identifier);
        let identifier = composed.as_str();

        if identifier.trim().is_empty() {
            return R::fail(None, ErrorKind::Required);
        }
        if identifier.chars().any(char::is_whitespace) {
            return R::fail(None, ErrorKind::NoSpaces);
        }
        if identifier.chars().all(char::is_numeric) {
            return R::fail(None, ErrorKind::NoNumericOnly);
        }
        if self.longest_run(identifier) > self.max_repeat {
            return R::fail(None, ErrorKind::NoConsecutiveRepeat);
        }
        if identifier.chars().filter(|&c| c == self.separator).count() > self.max_separators {
            return R::fail(None, ErrorKind::SeparatorLimit);
        }
        if !self.is_single_script(identifier) {
            return R::fail(None, ErrorKind::SingleScriptOnly);
        }

        let script = self.detector.detect(identifier);
        let Some(rule) = self.rules.get(script) else {
            return R::fail(None, ErrorKind::UnknownScript);
        };

        let folded = fold_case(identifier);
        if !rule.charset.is_match(&folded) {
            return R::fail(Some(script), ErrorKind::InvalidChars);
        }

        if !rule.bounds.contains(identifier.chars().count()) {
            return R::fail(
                Some(script),
                ErrorKind::LengthOutOfRange {
                    min: rule.bounds.min,
                    max: rule.bounds.max,
                },
            );
        }

        R::ok(script)
    }

    /// Longest run of one char, case-folded.
    fn longest_run(&self, identifier: &str) -> usize {
        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<char> = None;
        for ch in fold_case(identifier).chars() {
            run = if prev == Some(ch) { run + 1 } else { 1 };
            longest = longest.max(run);
            prev = Some(ch);
        }
        longest
    }

    /// Digits and the separator are neutral; chars outside every supported
    /// family are left for the charset check.
    fn is_single_script(&self, identifier: &str) -> bool {
        let mut seen: Option<ScriptFamily> = None;
        for ch in identifier.chars() {
            if ch.is_numeric() || ch == self.separator {
                continue;
            }
            let Some(family) = family_of(ch).map(ScriptFamily::purity_class) else {
                continue;
            };
            match seen {
                Some(prev) if prev != family => return false,
                _ => seen = Some(family),
            }
        }
        true
    }
}
