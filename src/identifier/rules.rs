use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LexguardError, Result};
use crate::script::ScriptTag;

/// Inclusive identifier length bounds, in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

/// Build-time default bounds per script.
pub fn default_bounds(tag: ScriptTag) -> LengthBounds {
    match tag {
        ScriptTag::Korean => LengthBounds::new(2, 10),
        ScriptTag::Japanese => LengthBounds::new(2, 12),
        ScriptTag::Chinese => LengthBounds::new(2, 10),
        ScriptTag::Russian | ScriptTag::Arabic => LengthBounds::new(3, 16),
        ScriptTag::Hindi | ScriptTag::Thai | ScriptTag::Bengali => LengthBounds::new(2, 16),
        _ => LengthBounds::new(3, 20),
    }
}

/// Charset and length policy for one script.
#[derive(Debug, Clone)]
pub struct ScriptRule {
    pub tag: ScriptTag,
    pub charset: Regex,
    pub bounds: LengthBounds,
}

/// Per-script rules for every supported tag.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ScriptRule>,
}

impl RuleTable {
    /// Default rules with bounds overridden by script code (`ko`, `en`, ...).
    pub fn new(overrides: &BTreeMap<String, LengthBounds>) -> Result<Self> {
        let mut bounds: BTreeMap<ScriptTag, LengthBounds> = BTreeMap::new();
        for (code, value) in overrides {
            let tag: ScriptTag = code.parse()?;
            if tag == ScriptTag::Unknown {
                return Err(LexguardError::UnknownScriptCode { code: code.clone() });
            }
            if value.min == 0 || value.min > value.max {
                return Err(LexguardError::InvalidConfig {
                    reason: format!(
                        "length bounds for {code} must satisfy 0 < min <= max, got {}..{}",
                        value.min, value.max
                    ),
                });
            }
            bounds.insert(tag, *value);
        }

        let rules = ScriptTag::SUPPORTED
            .iter()
            .map(|&tag| {
                let pattern = tag.charset_pattern();
                let charset = Regex::new(pattern).map_err(|e| LexguardError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(ScriptRule {
                    tag,
                    charset,
                    bounds: bounds.get(&tag).copied().unwrap_or_else(|| default_bounds(tag)),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn get(&self, tag: ScriptTag) -> Option<&ScriptRule> {
        self.rules.iter().find(|r| r.tag == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScriptRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_supported_tags() {
        let table = RuleTable::new(&BTreeMap::new()).unwrap();
        assert_eq!(table.iter().count(), ScriptTag::SUPPORTED.len());
        assert!(table.get(ScriptTag::Unknown).is_none());
        assert_eq!(table.get(ScriptTag::Korean).unwrap().bounds, LengthBounds::new(2, 10));
    }

    #[test]
    fn test_override_bounds() {
        let mut overrides = BTreeMap::new();
        overrides.insert("ko".to_string(), LengthBounds::new(3, 6));
        let table = RuleTable::new(&overrides).unwrap();
        assert_eq!(table.get(ScriptTag::Korean).unwrap().bounds, LengthBounds::new(3, 6));
        assert_eq!(table.get(ScriptTag::English).unwrap().bounds, LengthBounds::new(3, 20));
    }

    #[test]
    fn test_rejects_bad_overrides() {
        let mut unknown = BTreeMap::new();
        unknown.insert("xx".to_string(), LengthBounds::new(1, 2));
        assert!(matches!(
            RuleTable::new(&unknown),
            Err(LexguardError::UnknownScriptCode { .. })
        ));

        let mut inverted = BTreeMap::new();
        inverted.insert("en".to_string(), LengthBounds::new(9, 2));
        assert!(matches!(
            RuleTable::new(&inverted),
            Err(LexguardError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_charsets() {
        let table = RuleTable::new(&BTreeMap::new()).unwrap();
        let korean = &table.get(ScriptTag::Korean).unwrap().charset;
        assert!(korean.is_match("홍길동_2"));
        assert!(!korean.is_match("ㅋㅋ"));
        let japanese = &table.get(ScriptTag::Japanese).unwrap().charset;
        assert!(japanese.is_match("ラーメン"));
    }
}
