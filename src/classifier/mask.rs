use std::ops::Range;
use std::sync::Arc;

use crate::error::{LexguardError, Result};
use crate::normalize::{NormalizePipeline, NormalizedText};

pub const DEFAULT_PLACEHOLDER: char = '*';

/// Redacts matched terms in the original text.
///
/// Every char of a matched span becomes one placeholder char, so the output
/// has the same char count as the input and everything outside the spans is
/// left as written.
pub struct Masker {
    normalizer: Arc<NormalizePipeline>,
    placeholder: char,
}

impl Masker {
    /// The placeholder must normalize to nothing (not alphanumeric, not a
    /// leet stand-in, not whitespace), otherwise masked text could match again.
    pub fn new(normalizer: Arc<NormalizePipeline>, placeholder: char) -> Result<Self> {
        if placeholder.is_whitespace() || !normalizer.normalize(&placeholder.to_string()).is_empty()
        {
            return Err(LexguardError::InvalidPlaceholder { placeholder });
        }
        Ok(Self {
            normalizer,
            placeholder,
        })
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Mask every occurrence of every hit, longest hit first.
    pub fn mask(&self, text: &str, hits: &[String]) -> String {
        let mut patterns: Vec<Vec<char>> = hits
            .iter()
            .map(|h| self.normalizer.normalize(h))
            .filter(|h| !h.is_empty())
            .map(|h| h.chars().collect())
            .collect();
        if patterns.is_empty() {
            return text.to_string();
        }
        patterns.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        patterns.dedup();

        let mut result = text.to_string();
        for pattern in &patterns {
            // Recompute the view so earlier placeholders are already stripped out.
            let view = self.normalizer.normalize_mapped(&result);
            let ranges = occurrences(&view, pattern);
            if ranges.is_empty() {
                continue;
            }

            for range in merge_ranges(&ranges).into_iter().rev() {
                let width = result[range.clone()].chars().count();
                let run: String = std::iter::repeat(self.placeholder).take(width).collect();
                result.replace_range(range, &run);
            }
        }

        result
    }
}

/// Input byte ranges of every (possibly overlapping) occurrence of `pattern`.
fn occurrences(view: &NormalizedText, pattern: &[char]) -> Vec<Range<usize>> {
    let chars: Vec<char> = view.text.chars().collect();
    if pattern.is_empty() || pattern.len() > chars.len() {
        return Vec::new();
    }
    (0..=chars.len() - pattern.len())
        .filter(|&i| chars[i..i + pattern.len()] == *pattern)
        .filter_map(|i| view.source_range(i, i + pattern.len()))
        .collect()
}

/// Merge overlapping or adjacent ranges. Input must be sorted by start.
fn merge_ranges(ranges: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range.clone()),
        }
    }
    merged
}
