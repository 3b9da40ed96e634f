//! "Did you mean" suggestions for mistyped commands and contact names.
//!
//! Scoring favours exact matches, then typed prefixes, then near misses by
//! Levenshtein distance, on a 0-100 scale.

/// A candidate and how closely it matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion<'a> {
    /// The matched candidate, as given
    pub candidate: &'a str,

    /// Confidence score (0-100)
    pub confidence: u8,
}

/// Minimum confidence for a suggestion to be offered.
pub const DEFAULT_MIN_CONFIDENCE: u8 = 50;

/// Fuzzy suggester over a set of known strings.
#[derive(Debug, Clone, Copy)]
pub struct Suggester {
    min_confidence: u8,
}

impl Suggester {
    pub fn new(min_confidence: u8) -> Self {
        Self { min_confidence }
    }

    /// Best candidate for `query`, if any reaches the confidence threshold.
    ///
    /// Ties keep the earliest candidate.
    pub fn best<'a, I>(&self, query: &str, candidates: I) -> Option<Suggestion<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = Self::normalize(query);
        let mut best: Option<Suggestion<'a>> = None;

        for candidate in candidates {
            let confidence = Self::score(&query, &Self::normalize(candidate));
            if confidence < self.min_confidence {
                continue;
            }
            if best.as_ref().map_or(true, |b| confidence > b.confidence) {
                best = Some(Suggestion {
                    candidate,
                    confidence,
                });
            }
        }

        best
    }

    /// Case-insensitive, whitespace-collapsed form used for comparison.
    pub fn normalize(text: &str) -> String {
        text.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Confidence from 0-100 that `target` is what `query` meant.
    ///
    /// Both sides are already normalized. A query the user stopped typing
    /// early (a prefix of the target) ranks above an equally close typo.
    fn score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }
        if query == target {
            return 100;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if query_len >= 2 && target.starts_with(query) {
            return (60 + 40 * query_len / target_len) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        // More than half the characters differ: unrelated.
        if distance * 2 > max_len {
            return 0;
        }
        (100 - distance * 100 / max_len) as u8
    }

    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1: Vec<char> = s1.chars().collect();
        let s2: Vec<char> = s2.chars().collect();

        if s1.is_empty() {
            return s2.len();
        }
        if s2.is_empty() {
            return s1.len();
        }

        let mut previous: Vec<usize> = (0..=s2.len()).collect();
        let mut current = vec![0; s2.len() + 1];

        for (i, c1) in s1.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2.len()]
    }
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CONFIDENCE)
    }
}
