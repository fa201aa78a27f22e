//! Keyword extraction: turns raw job-posting text into a classified,
//! prioritized keyword set.

use crate::extraction::vocabulary::{self, TECHNICAL_PHRASES};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Postings shorter than this are treated as insufficient input.
pub const MIN_TEXT_LEN: usize = 50;

/// Default cap on extracted keywords.
pub const DEFAULT_MAX_KEYWORDS: usize = 35;

/// Per-occurrence weight for terms in the technical-term set.
const TECHNICAL_BOOST: u32 = 5;

/// Flat one-time bonus for a multi-word phrase found in the text.
const PHRASE_BONUS: u32 = 10;

/// Keywords earmarked for bullet injection: the top slice of the full list,
/// independent of the priority tiers.
const WORK_EXPERIENCE_COUNT: usize = 15;

/// A prioritized keyword set extracted from one job posting.
///
/// `high_priority ++ medium_priority ++ low_priority == all`, in order.
/// `work_experience` is the first 15 entries of `all`; it is a separate view
/// and may overlap the tier boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub all: Vec<String>,
    pub high_priority: Vec<String>,
    pub medium_priority: Vec<String>,
    pub low_priority: Vec<String>,
    pub work_experience: Vec<String>,
    pub total: usize,
}

impl KeywordSet {
    pub fn empty() -> Self {
        Self {
            all: Vec::new(),
            high_priority: Vec::new(),
            medium_priority: Vec::new(),
            low_priority: Vec::new(),
            work_experience: Vec::new(),
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Union of all four tiers, deduplicated, order preserved:
    /// high, medium, low, then the work-experience view.
    pub fn merged(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.high_priority
            .iter()
            .chain(self.medium_priority.iter())
            .chain(self.low_priority.iter())
            .chain(self.work_experience.iter())
            .filter(|k| seen.insert(k.as_str()))
            .cloned()
            .collect()
    }
}

/// Extractor holding the fixed vocabularies. Construction builds the lookup
/// sets once; `extract` is pure and synchronous.
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
    soft_skills: HashSet<&'static str>,
    technical_terms: HashSet<&'static str>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            stop_words: vocabulary::stop_words(),
            soft_skills: vocabulary::soft_skills(),
            technical_terms: vocabulary::technical_terms(),
        }
    }

    /// Extract up to `max_keywords` ranked keywords from posting text.
    ///
    /// Texts under 50 characters yield an empty set; callers check
    /// `total == 0` rather than receiving an error.
    pub fn extract(&self, text: &str, max_keywords: usize) -> KeywordSet {
        if text.trim().len() < MIN_TEXT_LEN {
            return KeywordSet::empty();
        }

        let lowered = text.to_lowercase();
        let cleaned = Self::strip_noise(&lowered);

        // Frequency table over qualifying tokens; first_seen preserves
        // insertion order so equal scores sort stably later.
        let mut scores: HashMap<String, u32> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for token in cleaned.split_whitespace() {
            if token.len() < 2
                || self.stop_words.contains(token)
                || self.soft_skills.contains(token)
            {
                continue;
            }
            let is_technical = self.technical_terms.contains(token);
            if !is_technical && token.len() <= 4 {
                continue;
            }
            let weight = if is_technical { TECHNICAL_BOOST } else { 1 };
            match scores.get_mut(token) {
                Some(score) => *score += weight,
                None => {
                    scores.insert(token.to_string(), weight);
                    first_seen.push(token.to_string());
                }
            }
        }

        // Multi-word phrases: substring containment against the raw
        // lowercased text, flat bonus applied once per phrase.
        for phrase in TECHNICAL_PHRASES {
            if lowered.contains(phrase) {
                match scores.get_mut(*phrase) {
                    Some(score) => *score += PHRASE_BONUS,
                    None => {
                        scores.insert(phrase.to_string(), PHRASE_BONUS);
                        first_seen.push(phrase.to_string());
                    }
                }
            }
        }

        // Defensive second pass: phrase scanning or tokenization quirks must
        // never let a soft skill back in.
        let mut ranked: Vec<(String, u32)> = first_seen
            .into_iter()
            .filter(|term| !self.soft_skills.contains(term.as_str()))
            .map(|term| {
                let score = scores[&term];
                (term, score)
            })
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(max_keywords);

        Self::into_tiers(ranked.into_iter().map(|(term, _)| term).collect())
    }

    /// Strip everything outside {letters, digits, whitespace, - / . # +},
    /// the character set technical tokens like "c++", "ci/cd" and ".net"
    /// need to survive.
    fn strip_noise(text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_alphanumeric()
                    || c.is_whitespace()
                    || matches!(c, '-' | '/' | '.' | '#' | '+')
                {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    /// Partition a ranked list into priority tiers and the work-experience
    /// view. The tier formulas self-adjust for short lists.
    fn into_tiers(all: Vec<String>) -> KeywordSet {
        let n = all.len();
        let high_count = 15.min((n as f64 * 0.45).ceil() as usize);
        let med_count = 10.min((n as f64 * 0.35).ceil() as usize);

        let high_priority = all[..high_count.min(n)].to_vec();
        let medium_priority = all[high_count.min(n)..(high_count + med_count).min(n)].to_vec();
        let low_priority = all[(high_count + med_count).min(n)..].to_vec();
        let work_experience = all[..WORK_EXPERIENCE_COUNT.min(n)].to_vec();

        KeywordSet {
            total: n,
            high_priority,
            medium_priority,
            low_priority,
            work_experience,
            all,
        }
    }
}
