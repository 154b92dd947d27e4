pub mod mask;

use std::sync::Arc;

use aho_corasick::AhoCorasick;

use crate::decision::ClassificationResult;
use crate::error::{LexguardError, Result};
use crate::lexicon::{Lexicon, TermSet};
use crate::normalize::NormalizePipeline;

pub use mask::Masker;

/// Runs of at least this many single-char tokens are joined for the block
/// scan (`k y s` -> `kys`).
const MIN_SPACED_RUN: usize = 3;

/// Literal term matching over normalized text via aho-corasick.
struct TermMatcher {
    automaton: Option<AhoCorasick>,
    terms: Vec<String>,
    /// Term index for every automaton pattern.
    pattern_terms: Vec<usize>,
}

impl TermMatcher {
    /// Build from a term set. With `glued_variants`, multi-word terms are
    /// also matched with their spaces removed.
    fn new(set: &TermSet, glued_variants: bool) -> Result<Self> {
        let terms: Vec<String> = set.iter().map(str::to_string).collect();
        let mut patterns: Vec<String> = Vec::with_capacity(terms.len());
        let mut pattern_terms = Vec::with_capacity(terms.len());

        for (idx, term) in terms.iter().enumerate() {
            patterns.push(term.clone());
            pattern_terms.push(idx);
            if glued_variants && term.contains(' ') {
                let glued: String = term.chars().filter(|c| *c != ' ').collect();
                if !set.contains(&glued) {
                    patterns.push(glued);
                    pattern_terms.push(idx);
                }
            }
        }

        let automaton = if patterns.is_empty() {
            None
        } else {
            let automaton =
                AhoCorasick::new(&patterns).map_err(|e| LexguardError::InvalidLexicon {
                    reason: format!("failed to build term automaton: {e}"),
                })?;
            Some(automaton)
        };

        Ok(Self {
            automaton,
            terms,
            pattern_terms,
        })
    }

    /// Indices of distinct terms found in `haystack`, ordered by first occurrence.
    fn find(&self, haystack: &str) -> Vec<usize> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let mut hits: Vec<(usize, usize)> = Vec::new();
        for mat in automaton.find_overlapping_iter(haystack) {
            let term = self.pattern_terms[mat.pattern().as_usize()];
            match hits.iter_mut().find(|(_, t)| *t == term) {
                Some(hit) => hit.0 = hit.0.min(mat.start()),
                None => hits.push((mat.start(), term)),
            }
        }

        hits.sort();
        hits.into_iter().map(|(_, term)| term).collect()
    }

    fn term(&self, idx: usize) -> &str {
        &self.terms[idx]
    }
}

/// Block/mask/allow decisions for free text.
pub struct Classifier {
    normalizer: Arc<NormalizePipeline>,
    block: TermMatcher,
    mask: TermMatcher,
    masker: Masker,
}

impl Classifier {
    pub fn new(lexicon: &Lexicon, normalizer: Arc<NormalizePipeline>, masker: Masker) -> Result<Self> {
        Ok(Self {
            normalizer,
            block: TermMatcher::new(lexicon.block(), true)?,
            mask: TermMatcher::new(lexicon.mask(), false)?,
            masker,
        })
    }

    /// Classify raw text.
    ///
    /// Any block hit short-circuits: a blocked message is never partially
    /// masked. Otherwise mask hits are redacted in the original text, and the
    /// masked text is rescanned until it classifies as allow. Fragments that
    /// join across a masked span into a block term block the whole message.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let normalized = self.normalizer.normalize(text);
        if normalized.is_empty() {
            return ClassificationResult::allow();
        }

        let block_hits = self.block_hits(&normalized);
        if !block_hits.is_empty() {
            tracing::debug!(hits = block_hits.len(), "text blocked");
            return ClassificationResult::block(block_hits);
        }

        let mut matched = self.mask_hits(&normalized);
        if matched.is_empty() {
            return ClassificationResult::allow();
        }

        // Every pass turns at least one matched char into a placeholder,
        // so this ends within text length passes.
        let mut masked = self.masker.mask(text, &matched);
        loop {
            let view = self.normalizer.normalize(&masked);

            let joined_block = self.block_hits(&view);
            if !joined_block.is_empty() {
                tracing::debug!(hits = joined_block.len(), "masked text joined into block term");
                return ClassificationResult::block(joined_block);
            }

            let extra = self.mask_hits(&view);
            if extra.is_empty() {
                break;
            }
            let next = self.masker.mask(&masked, &extra);
            if next == masked {
                break;
            }
            for term in extra {
                if !matched.contains(&term) {
                    matched.push(term);
                }
            }
            masked = next;
        }

        tracing::debug!(hits = matched.len(), "text masked");
        ClassificationResult::mask(matched, masked)
    }

    /// Block-set terms in already-normalized text, including spaced-out forms.
    pub fn block_hits(&self, normalized: &str) -> Vec<String> {
        let mut found = self.block.find(normalized);
        if let Some(joined) = join_spaced_letters(normalized) {
            for idx in self.block.find(&joined) {
                if !found.contains(&idx) {
                    found.push(idx);
                }
            }
        }
        found
            .into_iter()
            .map(|idx| self.block.term(idx).to_string())
            .collect()
    }

    /// Mask-dictionary terms in already-normalized text.
    pub fn mask_hits(&self, normalized: &str) -> Vec<String> {
        self.mask
            .find(normalized)
            .into_iter()
            .map(|idx| self.mask.term(idx).to_string())
            .collect()
    }

    pub fn masker(&self) -> &Masker {
        &self.masker
    }

    pub fn normalizer(&self) -> &NormalizePipeline {
        &self.normalizer
    }
}

/// Join runs of single-char tokens. Returns `None` when nothing was joined.
fn join_spaced_letters(normalized: &str) -> Option<String> {
    let tokens: Vec<&str> = normalized.split(' ').collect();
    let mut out: Vec<String> = Vec::with_capacity(tokens.len());
    let mut joined = false;
    let mut i = 0;

    while i < tokens.len() {
        let start = i;
        while i < tokens.len() && tokens[i].chars().count() == 1 {
            i += 1;
        }
        if i - start >= MIN_SPACED_RUN {
            out.push(tokens[start..i].concat());
            joined = true;
        } else {
            out.extend(tokens[start..i].iter().map(|t| t.to_string()));
        }
        if i == start {
            out.push(tokens[i].to_string());
            i += 1;
        }
    }

    joined.then(|| out.join(" "))
}
