//! Language disambiguation for Latin-script identifiers with diacritics.
//!
//! A best-effort score over a fixed candidate list. Weights are
//! configuration; candidate order breaks ties.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{fold_case, ScriptTag};

/// Scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatinWeights {
    /// Identifier fully matches the candidate charset.
    pub charset: i32,
    /// Per distinct characteristic diacritic present.
    pub diacritic: i32,
    /// Any letterform unique to the candidate present.
    pub unique_letter: i32,
    /// Per diagnostic digraph, short identifiers only.
    pub digraph: i32,
    /// Longest identifier (in chars) that digraphs are scored for.
    pub digraph_max_len: usize,
    /// Per pattern that belongs to a competing candidate.
    pub collision_penalty: i32,
}

impl Default for LatinWeights {
    fn default() -> Self {
        Self {
            charset: 1,
            diacritic: 3,
            unique_letter: 4,
            digraph: 2,
            digraph_max_len: 4,
            collision_penalty: 1,
        }
    }
}

/// Static description of one candidate language.
#[derive(Debug)]
pub struct LatinCandidate {
    pub tag: ScriptTag,
    pub diacritics: &'static [char],
    pub unique: &'static [char],
    pub digraphs: &'static [&'static str],
    pub collisions: &'static [&'static str],
}

impl LatinCandidate {
    fn has_unique(&self, ch: char) -> bool {
        self.unique.contains(&ch)
            || (self.tag == ScriptTag::Vietnamese && ('\u{1EA0}'..='\u{1EF9}').contains(&ch))
    }
}

/// Candidates in tie-break order.
pub const CANDIDATES: &[LatinCandidate] = &[
    LatinCandidate {
        tag: ScriptTag::Spanish,
        diacritics: &['á', 'é', 'í', 'ó', 'ú', 'ñ'],
        unique: &['ñ'],
        digraphs: &["ll", "rr", "ía", "ió"],
        collisions: &["ç", "è", "à", "ü"],
    },
    LatinCandidate {
        tag: ScriptTag::French,
        diacritics: &['à', 'â', 'ç', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'ù', 'û', 'ÿ'],
        unique: &['œ', 'æ', 'ÿ'],
        digraphs: &["eu", "ou", "oi", "ai"],
        collisions: &["ã", "õ", "ñ"],
    },
    LatinCandidate {
        tag: ScriptTag::German,
        diacritics: &['ä', 'ö', 'ü', 'ß'],
        unique: &['ß'],
        digraphs: &["ch", "ie", "ei", "äu"],
        collisions: &["ç", "ş", "ğ"],
    },
    LatinCandidate {
        tag: ScriptTag::Portuguese,
        diacritics: &['á', 'â', 'ã', 'à', 'ç', 'é', 'ê', 'í', 'ó', 'ô', 'õ', 'ú'],
        unique: &['ã', 'õ'],
        digraphs: &["ão", "õe", "nh", "lh"],
        collisions: &["ñ", "è", "ü"],
    },
    LatinCandidate {
        tag: ScriptTag::Italian,
        diacritics: &['à', 'è', 'é', 'ì', 'ò', 'ù'],
        unique: &['ì', 'ò'],
        digraphs: &["gl", "gn", "zz", "cc"],
        collisions: &["ç", "ñ", "ã"],
    },
    LatinCandidate {
        tag: ScriptTag::Vietnamese,
        diacritics: &['ă', 'â', 'đ', 'ê', 'ô', 'ơ', 'ư'],
        unique: &['ă', 'đ', 'ĩ', 'ũ', 'ơ', 'ư'],
        digraphs: &["ng", "nh", "ươ"],
        collisions: &["ç", "ñ"],
    },
    LatinCandidate {
        tag: ScriptTag::Turkish,
        diacritics: &['ç', 'ğ', 'ı', 'ö', 'ş', 'ü'],
        unique: &['ğ', 'ı', 'ş', 'İ'],
        digraphs: &["ğı", "ış"],
        collisions: &["ä", "ß", "ñ"],
    },
    LatinCandidate {
        tag: ScriptTag::Polish,
        diacritics: &['ą', 'ć', 'ę', 'ł', 'ń', 'ó', 'ś', 'ź', 'ż'],
        unique: &['ą', 'ę', 'ł', 'ś', 'ź', 'ż', 'ć', 'ń'],
        digraphs: &["sz", "cz", "rz"],
        collisions: &["ü", "ä"],
    },
];

/// Scores identifiers against [`CANDIDATES`].
#[derive(Debug, Clone)]
pub struct LatinScorer {
    weights: LatinWeights,
    charsets: Vec<Regex>,
}

impl LatinScorer {
    pub fn new(weights: LatinWeights) -> Self {
        let charsets = CANDIDATES
            .iter()
            .map(|c| Regex::new(c.tag.charset_pattern()).expect("latin charsets should compile"))
            .collect();
        Self { weights, charsets }
    }

    pub fn weights(&self) -> &LatinWeights {
        &self.weights
    }

    /// Score of every candidate, in candidate order.
    pub fn scores(&self, identifier: &str) -> Vec<(ScriptTag, i32)> {
        let lower = fold_case(identifier);
        let len = lower.chars().count();
        let w = &self.weights;

        CANDIDATES
            .iter()
            .zip(&self.charsets)
            .map(|(candidate, charset)| {
                let mut score = 0;
                if charset.is_match(&lower) {
                    score += w.charset;
                }

                let mut seen: Vec<char> = Vec::new();
                for ch in lower.chars() {
                    if candidate.diacritics.contains(&ch) && !seen.contains(&ch) {
                        seen.push(ch);
                        score += w.diacritic;
                    }
                }

                // `İ` only survives in the unfolded form.
                if lower
                    .chars()
                    .chain(identifier.chars())
                    .any(|ch| candidate.has_unique(ch))
                {
                    score += w.unique_letter;
                }

                if len <= w.digraph_max_len {
                    let digraphs = candidate.digraphs.iter().filter(|d| lower.contains(**d));
                    score += w.digraph * digraphs.count() as i32;
                }

                let collisions = candidate.collisions.iter().filter(|p| lower.contains(**p));
                score -= w.collision_penalty * collisions.count() as i32;

                (candidate.tag, score)
            })
            .collect()
    }

    /// Highest-scoring candidate; the earliest candidate wins ties.
    pub fn best(&self, identifier: &str) -> ScriptTag {
        let mut best: Option<(ScriptTag, i32)> = None;
        for (tag, score) in self.scores(identifier) {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((tag, score));
            }
        }
        best.map(|(tag, _)| tag).unwrap_or(ScriptTag::English)
    }
}

impl Default for LatinScorer {
    fn default() -> Self {
        Self::new(LatinWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(id: &str) -> ScriptTag {
        LatinScorer::default().best(id)
    }

    #[test]
    fn test_unique_letterforms_decide() {
        assert_eq!(best("Muñoz"), ScriptTag::Spanish);
        assert_eq!(best("Strauß"), ScriptTag::German);
        assert_eq!(best("Łukasz"), ScriptTag::Polish);
        assert_eq!(best("Ağca"), ScriptTag::Turkish);
        assert_eq!(best("Nguyễn"), ScriptTag::Vietnamese);
        assert_eq!(best("João"), ScriptTag::Portuguese);
    }

    #[test]
    fn test_diacritics_and_collisions() {
        assert_eq!(best("Müller"), ScriptTag::German);
        assert_eq!(best("François"), ScriptTag::French);
        assert_eq!(best("Zoë"), ScriptTag::French);
        assert_eq!(best("Niccolò"), ScriptTag::Italian);
    }

    #[test]
    fn test_tie_breaks_by_candidate_order() {
        // é is shared by Spanish, French, Portuguese and Italian.
        assert_eq!(best("José"), ScriptTag::Spanish);
    }

    #[test]
    fn test_weights_are_tunable() {
        let weights = LatinWeights {
            charset: 0,
            diacritic: 0,
            unique_letter: 0,
            digraph: 0,
            collision_penalty: 0,
            ..LatinWeights::default()
        };
        // Everything scores zero, so the first candidate wins.
        assert_eq!(LatinScorer::new(weights).best("Strauß"), ScriptTag::Spanish);
    }

    #[test]
    fn test_scores_cover_all_candidates() {
        let scores = LatinScorer::default().scores("Ñandú");
        assert_eq!(scores.len(), CANDIDATES.len());
        assert_eq!(scores[0].0, ScriptTag::Spanish);
    }
}
