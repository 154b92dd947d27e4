use serde::{Deserialize, Serialize};

/// The three possible classification outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Mask,
    Block,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Allow => write!(f, "allow"),
            Decision::Mask => write!(f, "mask"),
            Decision::Block => write!(f, "block"),
        }
    }
}

/// Outcome of classifying one piece of text.
///
/// `masked_text` is present iff the decision is `Mask`, and `matched_terms`
/// is empty iff the decision is `Allow`. Build values through [`allow`],
/// [`mask`] and [`block`] to keep that shape.
///
/// [`allow`]: ClassificationResult::allow
/// [`mask`]: ClassificationResult::mask
/// [`block`]: ClassificationResult::block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub decision: Decision,

    /// Normalized terms that matched, ordered by first occurrence.
    pub matched_terms: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masked_text: Option<String>,
}

impl ClassificationResult {
    pub fn allow() -> Self {
        Self {
            decision: Decision::Allow,
            matched_terms: Vec::new(),
            masked_text: None,
        }
    }

    /// A mask result. Falls back to `allow` when `matched_terms` is empty.
    pub fn mask(matched_terms: Vec<String>, masked_text: String) -> Self {
        if matched_terms.is_empty() {
            return Self::allow();
        }
        Self {
            decision: Decision::Mask,
            matched_terms,
            masked_text: Some(masked_text),
        }
    }

    /// A block result. Falls back to `allow` when `matched_terms` is empty.
    pub fn block(matched_terms: Vec<String>) -> Self {
        if matched_terms.is_empty() {
            return Self::allow();
        }
        Self {
            decision: Decision::Block,
            matched_terms,
            masked_text: None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.decision == Decision::Allow
    }

    pub fn is_blocked(&self) -> bool {
        self.decision == Decision::Block
    }

    /// The text a host should persist: the masked text on `Mask`, the input
    /// otherwise. Returns `None` on `Block`.
    pub fn deliverable<'a>(&'a self, original: &'a str) -> Option<&'a str> {
        match self.decision {
            Decision::Allow => Some(original),
            Decision::Mask => self.masked_text.as_deref(),
            Decision::Block => None,
        }
    }
}
