pub mod filter;
pub mod leet;
pub mod unicode;

use std::ops::Range;

pub use filter::SymbolFilter;

/// A single normalization layer.
///
/// Layers run on one cluster (a base char plus its trailing combining marks)
/// at a time, so every output char can be traced back to the input.
pub trait NormalizeStep: Send + Sync {
    /// Transform one cluster.
    fn apply(&self, input: &str) -> String;

    /// Name of this layer (for logging/debugging).
    fn name(&self) -> &str;
}

/// Normalized text plus the input byte range behind each output char.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub text: String,
    /// `spans[i]` is the input byte range of the i-th char of `text`.
    pub spans: Vec<Range<usize>>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Input byte range covering normalized chars `start..end` (char indices).
    pub fn source_range(&self, start: usize, end: usize) -> Option<Range<usize>> {
        if start >= end || end > self.spans.len() {
            return None;
        }
        Some(self.spans[start].start..self.spans[end - 1].end)
    }
}

/// The complete normalization pipeline.
pub struct NormalizePipeline {
    layers: Vec<Box<dyn NormalizeStep>>,
}

impl NormalizePipeline {
    /// Create the default pipeline.
    /// Order: NFKC -> leet substitution -> lowercase -> symbol strip.
    /// Whitespace collapsing runs last, across clusters.
    pub fn default_pipeline() -> Self {
        Self::with_filter(SymbolFilter::default())
    }

    /// Default layers with the given symbol filter mode.
    pub fn with_filter(mode: SymbolFilter) -> Self {
        Self {
            layers: vec![
                Box::new(unicode::CompatibilityFold),
                Box::new(leet::LeetSubstitution::new(
                    leet::LeetSubstitution::default_table(),
                )),
                Box::new(filter::CaseFold),
                Box::new(filter::SymbolStrip::new(mode)),
            ],
        }
    }

    /// Create a pipeline from custom layers.
    pub fn new(layers: Vec<Box<dyn NormalizeStep>>) -> Self {
        Self { layers }
    }

    /// Names of the configured layers, in order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    /// Normalize text for matching.
    pub fn normalize(&self, input: &str) -> String {
        self.normalize_mapped(input).text
    }

    /// Normalize text and keep the char-to-input mapping.
    pub fn normalize_mapped(&self, input: &str) -> NormalizedText {
        let mut out = NormalizedText::default();
        let mut pending_space: Option<Range<usize>> = None;

        for (range, cluster) in clusters(input) {
            let mut piece = cluster.to_string();
            for layer in &self.layers {
                piece = layer.apply(&piece);
                if piece.is_empty() {
                    break;
                }
            }

            for ch in piece.chars() {
                if ch.is_whitespace() {
                    // Leading whitespace is dropped, runs collapse to one space.
                    if !out.text.is_empty() && pending_space.is_none() {
                        pending_space = Some(range.clone());
                    }
                    continue;
                }
                if let Some(space) = pending_space.take() {
                    out.text.push(' ');
                    out.spans.push(space);
                }
                out.text.push(ch);
                out.spans.push(range.clone());
            }
        }

        out
    }
}

impl Default for NormalizePipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}

impl std::fmt::Debug for NormalizePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizePipeline")
            .field("layers", &self.layer_names())
            .finish()
    }
}

/// Split input into clusters: a base char followed by any combining marks
/// or conjoining Hangul vowel/final jamo.
fn clusters(input: &str) -> Vec<(Range<usize>, &str)> {
    let mut out: Vec<(Range<usize>, &str)> = Vec::new();
    let mut start = None;

    for (idx, ch) in input.char_indices() {
        if let Some(s) = start {
            if continues_cluster(ch) {
                continue;
            }
            out.push((s..idx, &input[s..idx]));
        }
        start = Some(idx);
    }
    if let Some(s) = start {
        out.push((s..input.len(), &input[s..]));
    }

    out
}

fn continues_cluster(ch: char) -> bool {
    unicode_normalization::char::is_combining_mark(ch) || ('\u{1160}'..='\u{11FF}').contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_order() {
        let pipeline = NormalizePipeline::default_pipeline();
        assert_eq!(pipeline.layer_names(), vec!["nfkc", "leet", "casefold", "symbol-strip"]);
    }

    #[test]
    fn test_leet_and_symbols() {
        let pipeline = NormalizePipeline::default_pipeline();
        assert_eq!(pipeline.normalize("b@d"), "bad");
        assert_eq!(pipeline.normalize("H3LL0 W0RLD"), "hello world");
        assert_eq!(pipeline.normalize("s.h.i.t"), "shit");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        let pipeline = NormalizePipeline::default_pipeline();
        assert_eq!(pipeline.normalize("  hello \t\n  there  "), "hello there");
    }

    #[test]
    fn test_symbol_only_and_empty() {
        let pipeline = NormalizePipeline::default_pipeline();
        assert_eq!(pipeline.normalize(""), "");
        assert_eq!(pipeline.normalize("#%^&*()"), "");
        assert_eq!(pipeline.normalize("   "), "");
    }

    #[test]
    fn test_mapped_spans_point_into_input() {
        let pipeline = NormalizePipeline::default_pipeline();
        let input = "Ｂ@d!";
        let mapped = pipeline.normalize_mapped(input);
        // '!' is leet for 'i'
        assert_eq!(mapped.text, "badi");
        assert_eq!(mapped.spans.len(), 4);
        assert_eq!(&input[mapped.spans[0].clone()], "Ｂ");
        assert_eq!(&input[mapped.source_range(0, 3).unwrap()], "Ｂ@d");
    }

    #[test]
    fn test_combining_marks_stay_with_base() {
        let decomposed = "cafe\u{0301}";
        let groups = clusters(decomposed);
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[3].1, "e\u{0301}");

        let pipeline = NormalizePipeline::default_pipeline();
        assert_eq!(pipeline.normalize(decomposed), pipeline.normalize("café"));
    }

    #[test]
    fn test_source_range_bounds() {
        let mapped = NormalizePipeline::default_pipeline().normalize_mapped("ab");
        assert!(mapped.source_range(1, 1).is_none());
        assert!(mapped.source_range(0, 3).is_none());
    }
}
