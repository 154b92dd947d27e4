use unicode_normalization::UnicodeNormalization;

use super::NormalizeStep;

/// Layer 1: Unicode compatibility normalization (NFKC).
///
/// Folds fullwidth, ligature and other compatibility forms onto their
/// canonical letters, so `ｂａｄ` and `bad` compare equal.
pub struct CompatibilityFold;

impl NormalizeStep for CompatibilityFold {
    fn apply(&self, input: &str) -> String {
        input.nfkc().collect()
    }

    fn name(&self) -> &str {
        "nfkc"
    }
}
