pub mod latin;

use std::sync::LazyLock;

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::LexguardError;

pub use latin::{LatinScorer, LatinWeights};

/// Unicode script families, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFamily {
    Hangul,
    Kana,
    Han,
    Cyrillic,
    Arabic,
    Devanagari,
    Thai,
    Bengali,
    Latin,
}

impl ScriptFamily {
    /// Families in `FAMILY_SET` pattern order.
    pub const ALL: [ScriptFamily; 9] = [
        ScriptFamily::Hangul,
        ScriptFamily::Kana,
        ScriptFamily::Han,
        ScriptFamily::Cyrillic,
        ScriptFamily::Arabic,
        ScriptFamily::Devanagari,
        ScriptFamily::Thai,
        ScriptFamily::Bengali,
        ScriptFamily::Latin,
    ];

    /// Families that may share one identifier. Japanese writes kanji and
    /// kana together, so both map onto `Kana`.
    pub fn purity_class(self) -> ScriptFamily {
        match self {
            ScriptFamily::Han => ScriptFamily::Kana,
            other => other,
        }
    }
}

/// One range test per family, same order as [`ScriptFamily::ALL`].
static FAMILY_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"\p{Hangul}",
        r"[\p{Hiragana}\p{Katakana}]",
        r"\p{Han}",
        r"\p{Cyrillic}",
        r"\p{Arabic}",
        r"\p{Devanagari}",
        r"\p{Thai}",
        r"\p{Bengali}",
        r"\p{Latin}",
    ])
    .expect("script family patterns should compile")
});

/// Canonical composition (NFC), so accents typed as combining marks count
/// as the precomposed letter.
pub fn compose(identifier: &str) -> String {
    identifier.nfc().collect()
}

/// Lowercase for charset matching and scoring. Turkish dotted capital `İ`
/// folds to plain `i` instead of `i` + U+0307.
pub fn fold_case(identifier: &str) -> String {
    identifier.replace('İ', "i").to_lowercase()
}

/// Family of a single char, if it belongs to a supported script.
pub fn family_of(ch: char) -> Option<ScriptFamily> {
    let mut buf = [0u8; 4];
    FAMILY_SET
        .matches(ch.encode_utf8(&mut buf))
        .iter()
        .next()
        .map(|idx| ScriptFamily::ALL[idx])
}

/// Detected writing system of an identifier. Latin-script identifiers are
/// narrowed to a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScriptTag {
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "unknown")]
    Unknown,
}

impl ScriptTag {
    /// Every supported tag, `Unknown` excluded.
    pub const SUPPORTED: [ScriptTag; 17] = [
        ScriptTag::Korean,
        ScriptTag::Japanese,
        ScriptTag::Chinese,
        ScriptTag::Russian,
        ScriptTag::Arabic,
        ScriptTag::Hindi,
        ScriptTag::Thai,
        ScriptTag::Bengali,
        ScriptTag::English,
        ScriptTag::Spanish,
        ScriptTag::French,
        ScriptTag::German,
        ScriptTag::Portuguese,
        ScriptTag::Italian,
        ScriptTag::Vietnamese,
        ScriptTag::Turkish,
        ScriptTag::Polish,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ScriptTag::Korean => "ko",
            ScriptTag::Japanese => "ja",
            ScriptTag::Chinese => "zh",
            ScriptTag::Russian => "ru",
            ScriptTag::Arabic => "ar",
            ScriptTag::Hindi => "hi",
            ScriptTag::Thai => "th",
            ScriptTag::Bengali => "bn",
            ScriptTag::English => "en",
            ScriptTag::Spanish => "es",
            ScriptTag::French => "fr",
            ScriptTag::German => "de",
            ScriptTag::Portuguese => "pt",
            ScriptTag::Italian => "it",
            ScriptTag::Vietnamese => "vi",
            ScriptTag::Turkish => "tr",
            ScriptTag::Polish => "pl",
            ScriptTag::Unknown => "unknown",
        }
    }

    pub fn family(&self) -> Option<ScriptFamily> {
        match self {
            ScriptTag::Korean => Some(ScriptFamily::Hangul),
            ScriptTag::Japanese => Some(ScriptFamily::Kana),
            ScriptTag::Chinese => Some(ScriptFamily::Han),
            ScriptTag::Russian => Some(ScriptFamily::Cyrillic),
            ScriptTag::Arabic => Some(ScriptFamily::Arabic),
            ScriptTag::Hindi => Some(ScriptFamily::Devanagari),
            ScriptTag::Thai => Some(ScriptFamily::Thai),
            ScriptTag::Bengali => Some(ScriptFamily::Bengali),
            ScriptTag::Unknown => None,
            _ => Some(ScriptFamily::Latin),
        }
    }

    /// Tag chosen when an identifier matches a non-Latin family.
    fn for_family(family: ScriptFamily) -> ScriptTag {
        match family {
            ScriptFamily::Hangul => ScriptTag::Korean,
            ScriptFamily::Kana => ScriptTag::Japanese,
            ScriptFamily::Han => ScriptTag::Chinese,
            ScriptFamily::Cyrillic => ScriptTag::Russian,
            ScriptFamily::Arabic => ScriptTag::Arabic,
            ScriptFamily::Devanagari => ScriptTag::Hindi,
            ScriptFamily::Thai => ScriptTag::Thai,
            ScriptFamily::Bengali => ScriptTag::Bengali,
            ScriptFamily::Latin => ScriptTag::English,
        }
    }

    /// Full-match charset for identifiers of this tag. Digits and `_` are
    /// always allowed; case is folded before matching Latin charsets.
    pub fn charset_pattern(&self) -> &'static str {
        match self {
            ScriptTag::Korean => r"^[가-힣0-9_]+$",
            ScriptTag::Japanese => r"^[\p{Hiragana}\p{Katakana}\p{Han}ー々0-9_]+$",
            ScriptTag::Chinese => r"^[\p{Han}0-9_]+$",
            ScriptTag::Russian => r"^[\p{Cyrillic}0-9_]+$",
            ScriptTag::Arabic => r"^[\p{Arabic}\x{064B}-\x{065F}\x{0670}0-9_]+$",
            ScriptTag::Hindi => r"^[\p{Devanagari}0-9_]+$",
            ScriptTag::Thai => r"^[\p{Thai}0-9_]+$",
            ScriptTag::Bengali => r"^[\p{Bengali}0-9_]+$",
            ScriptTag::English => r"^[a-z0-9_]+$",
            ScriptTag::Spanish => r"^[a-záéíóúüñ0-9_]+$",
            ScriptTag::French => r"^[a-zàâæçéèêëîïôœùûüÿ0-9_]+$",
            ScriptTag::German => r"^[a-zäöüß0-9_]+$",
            ScriptTag::Portuguese => r"^[a-záâãàçéêíóôõú0-9_]+$",
            ScriptTag::Italian => r"^[a-zàèéìíîòóùú0-9_]+$",
            ScriptTag::Vietnamese => {
                r"^[a-zàáâãèéêìíòóôõùúýăđĩũơư\x{1EA0}-\x{1EF9}0-9_]+$"
            }
            ScriptTag::Turkish => r"^[a-zçğıöşü0-9_]+$",
            ScriptTag::Polish => r"^[a-ząćęłńóśźż0-9_]+$",
            ScriptTag::Unknown => r"^$",
        }
    }
}

impl std::fmt::Display for ScriptTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for ScriptTag {
    type Err = LexguardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        if code == "unknown" {
            return Ok(ScriptTag::Unknown);
        }
        ScriptTag::SUPPORTED
            .iter()
            .copied()
            .find(|tag| tag.code() == code)
            .ok_or(LexguardError::UnknownScriptCode { code })
    }
}

/// Classifies short identifiers into a [`ScriptTag`].
#[derive(Debug, Clone)]
pub struct ScriptDetector {
    latin: LatinScorer,
}

impl ScriptDetector {
    pub fn new(weights: LatinWeights) -> Self {
        Self {
            latin: LatinScorer::new(weights),
        }
    }

    /// Detect the writing system of `identifier`.
    ///
    /// Unambiguous scripts are tested in priority order and the first hit
    /// wins; identifiers are assumed single-script (purity is checked by the
    /// validator). Latin falls through to the language scorer. Input is
    /// composed to NFC first.
    pub fn detect(&self, identifier: &str) -> ScriptTag {
        let composed = compose(identifier);
        let identifier = composed.as_str();

        let matched = FAMILY_SET.matches(identifier);
        if let Some(idx) = matched
            .iter()
            .find(|&idx| ScriptFamily::ALL[idx] != ScriptFamily::Latin)
        {
            return ScriptTag::for_family(ScriptFamily::ALL[idx]);
        }

        let has_latin = identifier
            .chars()
            .any(|c| family_of(c) == Some(ScriptFamily::Latin));
        if !has_latin {
            return ScriptTag::Unknown;
        }

        let has_diacritics = identifier
            .chars()
            .any(|c| !c.is_ascii() && family_of(c) == Some(ScriptFamily::Latin));
        if !has_diacritics {
            return ScriptTag::English;
        }

        self.latin.best(identifier)
    }

    pub fn latin(&self) -> &LatinScorer {
        &self.latin
    }
}

impl Default for ScriptDetector {
    fn default() -> Self {
        Self::new(LatinWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_of() {
        assert_eq!(family_of('홍'), Some(ScriptFamily::Hangul));
        assert_eq!(family_of('た'), Some(ScriptFamily::Kana));
        assert_eq!(family_of('山'), Some(ScriptFamily::Han));
        assert_eq!(family_of('ж'), Some(ScriptFamily::Cyrillic));
        assert_eq!(family_of('é'), Some(ScriptFamily::Latin));
        assert_eq!(family_of('7'), None);
        assert_eq!(family_of('α'), None);
    }

    #[test]
    fn test_priority_order() {
        let detector = ScriptDetector::default();
        assert_eq!(detector.detect("홍길동"), ScriptTag::Korean);
        assert_eq!(detector.detect("山田たろう"), ScriptTag::Japanese);
        assert_eq!(detector.detect("王小明"), ScriptTag::Chinese);
        assert_eq!(detector.detect("Иван"), ScriptTag::Russian);
        assert_eq!(detector.detect("محمد"), ScriptTag::Arabic);
        assert_eq!(detector.detect("राहुल"), ScriptTag::Hindi);
        assert_eq!(detector.detect("สมชาย"), ScriptTag::Thai);
        assert_eq!(detector.detect("রাহুল"), ScriptTag::Bengali);
    }

    #[test]
    fn test_plain_latin_is_english() {
        let detector = ScriptDetector::default();
        assert_eq!(detector.detect("JeanPierre"), ScriptTag::English);
        assert_eq!(detector.detect("kim_99"), ScriptTag::English);
    }

    #[test]
    fn test_fold_case_and_compose() {
        assert_eq!(fold_case("İSMAİL"), "ismail");
        assert_eq!(fold_case("Straße"), "straße");
        assert_eq!(compose("Jose\u{301}"), "José");
    }

    #[test]
    fn test_unknown() {
        let detector = ScriptDetector::default();
        assert_eq!(detector.detect("αβγ"), ScriptTag::Unknown);
        assert_eq!(detector.detect("1234"), ScriptTag::Unknown);
        assert_eq!(detector.detect(""), ScriptTag::Unknown);
    }

    #[test]
    fn test_code_round_trip() {
        for tag in ScriptTag::SUPPORTED {
            assert_eq!(tag.code().parse::<ScriptTag>().unwrap(), tag);
        }
        assert!("xx".parse::<ScriptTag>().is_err());
        assert_eq!(
            serde_json::to_string(&ScriptTag::Korean).unwrap(),
            "\"ko\""
        );
    }
}
