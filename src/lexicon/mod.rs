pub mod terms;

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use sha2::{Digest, Sha256};

use crate::normalize::NormalizePipeline;

/// A deduplicated, case-insensitive term collection.
///
/// Terms are held in normalized form, so membership and matching compare
/// like with like. Terms that normalize to nothing are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: BTreeSet<String>,
}

impl TermSet {
    /// Normalize and collect terms.
    pub fn from_terms<I, S>(normalizer: &NormalizePipeline, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| normalizer.normalize(t.as_ref()))
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Membership test for an already-normalized term.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Union of two term sets.
pub fn merge_terms(base: &TermSet, extra: &TermSet) -> TermSet {
    TermSet {
        terms: base.terms.union(&extra.terms).cloned().collect(),
    }
}

/// `set` without any term in `remove`.
pub fn subtract_terms(set: &TermSet, remove: &TermSet) -> TermSet {
    TermSet {
        terms: set.terms.difference(&remove.terms).cloned().collect(),
    }
}

/// The hard-block set and the soft-mask dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    block: TermSet,
    mask: TermSet,
}

impl Lexicon {
    /// Build from the base tables: block = curated block table,
    /// mask = (base mask table + `custom_words`) - `allow_list`.
    pub fn build(
        normalizer: &NormalizePipeline,
        custom_words: &[String],
        allow_list: &[String],
    ) -> Self {
        let block = TermSet::from_terms(normalizer, terms::BLOCK_TERMS);
        let base = TermSet::from_terms(normalizer, terms::BASE_MASK_TERMS);
        let custom = TermSet::from_terms(normalizer, custom_words);
        let allow = TermSet::from_terms(normalizer, allow_list);
        let mask = subtract_terms(&merge_terms(&base, &custom), &allow);

        let lexicon = Self { block, mask };
        tracing::debug!(
            block = lexicon.block.len(),
            mask = lexicon.mask.len(),
            custom = custom.len(),
            allowed = allow.len(),
            "lexicon built"
        );
        lexicon
    }

    pub fn block(&self) -> &TermSet {
        &self.block
    }

    pub fn mask(&self) -> &TermSet {
        &self.mask
    }

    /// SHA-256 over both sets, hex encoded. Stable for identical contents.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (tier, set) in [("block", &self.block), ("mask", &self.mask)] {
            hasher.update(tier.as_bytes());
            hasher.update([0u8]);
            for term in set.iter() {
                hasher.update(term.as_bytes());
                hasher.update([0u8]);
            }
        }
        format!("{:x}", hasher.finalize())
    }
}

/// Write-once holder for a lexicon.
///
/// The first `initialize` builds, later calls return the existing lexicon
/// and ignore their arguments. Safe to call from several threads.
pub struct LexiconStore {
    cell: OnceLock<Arc<Lexicon>>,
}

impl LexiconStore {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn initialize(&self, custom_words: &[String], allow_list: &[String]) -> Arc<Lexicon> {
        let mut built = false;
        let lexicon = self.cell.get_or_init(|| {
            built = true;
            Arc::new(Lexicon::build(
                &NormalizePipeline::default_pipeline(),
                custom_words,
                allow_list,
            ))
        });
        if !built {
            tracing::debug!("lexicon already initialized; ignoring repeat initialize");
        }
        Arc::clone(lexicon)
    }

    pub fn get(&self) -> Option<Arc<Lexicon>> {
        self.cell.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for LexiconStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide lexicon behind [`crate::initialize`].
pub static LEXICON: LexiconStore = LexiconStore::new();
