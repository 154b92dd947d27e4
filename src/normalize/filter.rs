use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;

use super::NormalizeStep;

/// Layer 3: Unicode lowercase fold.
pub struct CaseFold;

impl NormalizeStep for CaseFold {
    fn apply(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &str {
        "casefold"
    }
}

/// How the symbol strip decides what counts as a letter or digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolFilter {
    /// Unicode alphabetic/numeric properties.
    #[default]
    Unicode,
    /// Explicit ranges for the supported scripts only.
    AllowList,
}

/// Inclusive ranges kept by [`SymbolFilter::AllowList`], besides ASCII
/// alphanumerics.
const ALLOWED_RANGES: &[(char, char)] = &[
    ('\u{00C0}', '\u{00D6}'), // Latin-1 letters
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{024F}'), // Latin-1 tail + Latin Extended-A/B
    ('\u{1E00}', '\u{1EFF}'), // Latin Extended Additional
    ('\u{0400}', '\u{04FF}'), // Cyrillic
    ('\u{0600}', '\u{06FF}'), // Arabic
    ('\u{0900}', '\u{097F}'), // Devanagari
    ('\u{0980}', '\u{09FF}'), // Bengali
    ('\u{0E00}', '\u{0E7F}'), // Thai
    ('\u{1100}', '\u{11FF}'), // Hangul Jamo
    ('\u{3040}', '\u{30FF}'), // Hiragana + Katakana
    ('\u{3130}', '\u{318F}'), // Hangul Compatibility Jamo
    ('\u{3400}', '\u{4DBF}'), // CJK Extension A
    ('\u{4E00}', '\u{9FFF}'), // CJK Unified Ideographs
    ('\u{AC00}', '\u{D7A3}'), // Hangul Syllables
];

impl SymbolFilter {
    /// Whether `ch` survives the strip.
    pub fn keeps(&self, ch: char) -> bool {
        if ch.is_whitespace() || is_combining_mark(ch) {
            return true;
        }
        match self {
            SymbolFilter::Unicode => ch.is_alphanumeric(),
            SymbolFilter::AllowList => {
                ch.is_ascii_alphanumeric()
                    || ALLOWED_RANGES
                        .iter()
                        .any(|&(lo, hi)| (lo..=hi).contains(&ch))
            }
        }
    }
}

/// Layer 4: drop everything that is not a letter, digit or whitespace.
pub struct SymbolStrip {
    mode: SymbolFilter,
}

impl SymbolStrip {
    pub fn new(mode: SymbolFilter) -> Self {
        Self { mode }
    }
}

impl NormalizeStep for SymbolStrip {
    fn apply(&self, input: &str) -> String {
        input.chars().filter(|&c| self.mode.keeps(c)).collect()
    }

    fn name(&self) -> &str {
        "symbol-strip"
    }
}
