//! Bullet distribution: rewrites a resume's experience section to absorb
//! keywords the document does not already cover.

use crate::distribution::phrases;
use crate::distribution::sections::{self, ExperienceSection};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default cap on keywords injected into a single bullet.
pub const DEFAULT_MAX_PER_BULLET: usize = 3;

/// Overflow bullets are inserted after the earlier of the 5th and the last
/// existing bullet.
const OVERFLOW_ANCHOR_BULLET: usize = 5;

/// Keywords grouped per synthesized overflow bullet.
const OVERFLOW_CHUNK: usize = 3;

/// Coverage accounting for one distribution run.
/// `already_present + added + missing == total` holds after every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub total: usize,
    pub already_present: usize,
    pub added: usize,
    pub missing: usize,
}

/// Tuning knobs for a distribution run.
///
/// The mention-count fields are accepted for contract compatibility with
/// callers that pass them, but the distribution algorithm does not interpret
/// them; placement is driven solely by coverage and `max_keywords_per_bullet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionOptions {
    pub max_keywords_per_bullet: usize,
    pub target_mentions: Option<usize>,
    pub min_mentions: Option<usize>,
    pub max_mentions: Option<usize>,
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self {
            max_keywords_per_bullet: DEFAULT_MAX_PER_BULLET,
            target_mentions: None,
            min_mentions: None,
            max_mentions: None,
        }
    }
}

/// Result of one distribution run: the rewritten document plus stats. The
/// input text is never mutated; an unchanged outcome returns it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionOutcome {
    pub tailored_text: String,
    pub stats: DistributionStats,
}

impl DistributionOutcome {
    fn unchanged(resume: &str, total: usize, already_present: usize, missing: usize) -> Self {
        Self {
            tailored_text: resume.to_string(),
            stats: DistributionStats {
                total,
                already_present,
                added: 0,
                missing,
            },
        }
    }
}

/// Whole-word, case-insensitive containment check. Word boundaries are
/// non-alphanumeric neighbors, which keeps terms like "c++" and "ci/cd"
/// matchable where `\b` regexes misfire.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    let haystack = text.to_lowercase();
    let needle = keyword.to_lowercase();
    if needle.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(&needle) {
        let at = start + pos;
        let end = at + needle.len();
        let before_ok = at == 0
            || !haystack[..at].chars().next_back().map_or(false, |c| c.is_alphanumeric());
        let after_ok = end == haystack.len()
            || !haystack[end..].chars().next().map_or(false, |c| c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = at + needle.len();
    }
    false
}

pub struct BulletDistributor;

impl Default for BulletDistributor {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletDistributor {
    pub fn new() -> Self {
        Self
    }

    /// Split keywords into already-covered terms and the missing working
    /// set, preserving the incoming priority order.
    fn coverage<'a>(resume: &str, keywords: &'a [String]) -> (usize, Vec<&'a str>) {
        let mut already_present = 0;
        let mut missing = Vec::new();
        for keyword in keywords {
            if contains_keyword(resume, keyword) {
                already_present += 1;
            } else {
                missing.push(keyword.as_str());
            }
        }
        (already_present, missing)
    }

    /// Full distribution pass: even spread across existing bullets, then
    /// synthesized overflow bullets for whatever found no room.
    pub fn distribute<R: Rng>(
        &self,
        resume: &str,
        keywords: &[String],
        options: &DistributionOptions,
        rng: &mut R,
    ) -> DistributionOutcome {
        let total = keywords.len();
        let (already_present, missing) = Self::coverage(resume, keywords);
        if missing.is_empty() {
            return DistributionOutcome::unchanged(resume, total, already_present, 0);
        }

        let section = match sections::find_experience_section(resume) {
            Some(section) => section,
            None => {
                log::debug!("no experience heading found, returning resume unchanged");
                return DistributionOutcome::unchanged(resume, total, already_present, missing.len());
            }
        };

        let mut lines: Vec<String> = section.body.split('\n').map(str::to_string).collect();
        let bullets = sections::bullet_indices(&lines);
        if bullets.is_empty() {
            log::debug!("experience section has no bullets, returning resume unchanged");
            return DistributionOutcome::unchanged(resume, total, already_present, missing.len());
        }

        let per_bullet = (missing.len() + bullets.len() - 1) / bullets.len();
        let mut queue = missing.iter().copied();
        let mut added = 0;

        for &line_idx in &bullets {
            let take = options
                .max_keywords_per_bullet
                .min(per_bullet)
                .min(missing.len() - added);
            if take == 0 {
                break;
            }
            let batch: Vec<&str> = queue.by_ref().take(take).collect();
            if batch.is_empty() {
                break;
            }
            let clause = phrases::injection_clause(phrases::pick_connective(rng), &batch);
            lines[line_idx] = Self::append_clause(&lines[line_idx], &clause);
            added += batch.len();
        }

        // Whatever the existing bullets could not absorb becomes synthesized
        // overflow bullets, in chunks of up to three keywords.
        let leftover: Vec<&str> = queue.collect();
        if !leftover.is_empty() {
            let anchor = bullets[(OVERFLOW_ANCHOR_BULLET - 1).min(bullets.len() - 1)];
            let mut insert_at = anchor + 1;
            for chunk in leftover.chunks(OVERFLOW_CHUNK) {
                lines.insert(insert_at, phrases::overflow_bullet(rng, chunk));
                insert_at += 1;
                added += chunk.len();
            }
        }

        let stats = DistributionStats {
            total,
            already_present,
            added,
            missing: missing.len().saturating_sub(added),
        };
        DistributionOutcome {
            tailored_text: section.reassemble(&lines.join("\n")),
            stats,
        }
    }

    /// Secondary rewrite pass used as fallback tailoring before full
    /// distribution. Lighter template set, one keyword per bullet, and no
    /// overflow bullets; excess keywords stay un-injected.
    pub fn rewrite_bullets<R: Rng>(
        &self,
        resume: &str,
        keywords: &[String],
        rng: &mut R,
    ) -> DistributionOutcome {
        let total = keywords.len();
        let (already_present, missing) = Self::coverage(resume, keywords);
        if missing.is_empty() {
            return DistributionOutcome::unchanged(resume, total, already_present, 0);
        }

        let section = match sections::find_experience_section(resume) {
            Some(section) => section,
            None => {
                return DistributionOutcome::unchanged(resume, total, already_present, missing.len())
            }
        };

        let mut lines: Vec<String> = section.body.split('\n').map(str::to_string).collect();
        let bullets = sections::bullet_indices(&lines);
        if bullets.is_empty() {
            return DistributionOutcome::unchanged(resume, total, already_present, missing.len());
        }

        let mut added = 0;
        for (&line_idx, keyword) in bullets.iter().zip(missing.iter()) {
            let clause = phrases::fallback_clause(phrases::pick_fallback_connective(rng), keyword);
            lines[line_idx] = Self::append_clause(&lines[line_idx], &clause);
            added += 1;
        }

        let stats = DistributionStats {
            total,
            already_present,
            added,
            missing: missing.len() - added,
        };
        DistributionOutcome {
            tailored_text: section.reassemble(&lines.join("\n")),
            stats,
        }
    }

    /// Append a clause to a bullet, slipping it in front of a trailing
    /// period when one exists.
    fn append_clause(line: &str, clause: &str) -> String {
        let trimmed = line.trim_end();
        if let Some(stripped) = trimmed.strip_suffix('.') {
            format!("{}{}.", stripped, clause)
        } else {
            format!("{}{}", trimmed, clause)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const RESUME: &str = "Jane Doe\n\nEXPERIENCE\n\
- Designed internal reporting dashboards.\n\
- Automated the release process for three services.\n\n\
SKILLS\nSQL, Git\n";

    fn kw(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_stats_invariant_holds() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&["python", "sql", "terraform", "ansible", "kafka"]);
        let outcome = distributor.distribute(RESUME, &keywords, &Default::default(), &mut rng());
        let s = outcome.stats;
        assert_eq!(s.already_present + s.added + s.missing, s.total);
    }

    #[test]
    fn test_covered_keywords_counted_not_reinjected() {
        let distributor = BulletDistributor::new();
        // "sql" and "git" already appear under SKILLS
        let keywords = kw(&["sql", "git"]);
        let outcome = distributor.distribute(RESUME, &keywords, &Default::default(), &mut rng());
        assert_eq!(outcome.stats.already_present, 2);
        assert_eq!(outcome.stats.added, 0);
        assert_eq!(outcome.tailored_text, RESUME);
    }

    #[test]
    fn test_five_missing_two_bullets_all_placed_no_overflow() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&["python", "kubernetes", "terraform", "ansible", "kafka"]);
        let outcome = distributor.distribute(RESUME, &keywords, &Default::default(), &mut rng());

        assert_eq!(outcome.stats.added, 5);
        assert_eq!(outcome.stats.missing, 0);
        // 2 bullets x cap 3 >= 5, so no synthesized bullets
        let bullet_count = outcome
            .tailored_text
            .lines()
            .filter(|l| l.trim_start().starts_with('-'))
            .count();
        assert_eq!(bullet_count, 2);
        for term in ["python", "kubernetes", "terraform", "ansible", "kafka"] {
            assert!(contains_keyword(&outcome.tailored_text, term));
        }
    }

    #[test]
    fn test_seven_missing_two_bullets_one_overflow() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&[
            "python", "kubernetes", "terraform", "ansible", "kafka", "redis", "grafana",
        ]);
        let outcome = distributor.distribute(RESUME, &keywords, &Default::default(), &mut rng());

        assert_eq!(outcome.stats.added, 7);
        assert_eq!(outcome.stats.missing, 0);
        let bullet_count = outcome
            .tailored_text
            .lines()
            .filter(|l| l.trim_start().starts_with('-'))
            .count();
        // 2 existing + exactly 1 overflow carrying the single remainder
        assert_eq!(bullet_count, 3);
        assert!(contains_keyword(&outcome.tailored_text, "grafana"));
    }

    #[test]
    fn test_per_bullet_cap_respected() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&["python", "kubernetes", "terraform", "ansible"]);
        let options = DistributionOptions {
            max_keywords_per_bullet: 1,
            ..Default::default()
        };
        let outcome = distributor.distribute(RESUME, &keywords, &options, &mut rng());
        // each bullet takes 1, the remaining 2 overflow
        assert_eq!(outcome.stats.added, 4);
        let bullet_count = outcome
            .tailored_text
            .lines()
            .filter(|l| l.trim_start().starts_with('-'))
            .count();
        assert_eq!(bullet_count, 3);
    }

    #[test]
    fn test_no_experience_heading_returns_unchanged() {
        let distributor = BulletDistributor::new();
        let text = "Jane Doe\nSummary of achievements\n- Did things\n";
        let keywords = kw(&["python", "kubernetes"]);
        let outcome = distributor.distribute(text, &keywords, &Default::default(), &mut rng());
        assert_eq!(outcome.tailored_text, text);
        assert_eq!(outcome.stats.missing, outcome.stats.total);
        assert_eq!(outcome.stats.added, 0);
    }

    #[test]
    fn test_no_bullets_returns_unchanged() {
        let distributor = BulletDistributor::new();
        let text = "EXPERIENCE\nAcme Corp, engineer, did prose things\nSKILLS\nSQL\n";
        let keywords = kw(&["python"]);
        let outcome = distributor.distribute(text, &keywords, &Default::default(), &mut rng());
        assert_eq!(outcome.tailored_text, text);
        assert_eq!(outcome.stats.missing, 1);
    }

    #[test]
    fn test_text_outside_section_untouched() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&["python", "kubernetes", "terraform"]);
        let outcome = distributor.distribute(RESUME, &keywords, &Default::default(), &mut rng());
        assert!(outcome.tailored_text.starts_with("Jane Doe\n\nEXPERIENCE\n"));
        assert!(outcome.tailored_text.ends_with("SKILLS\nSQL, Git\n"));
    }

    #[test]
    fn test_clause_lands_before_trailing_period() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&["python"]);
        let outcome = distributor.distribute(RESUME, &keywords, &Default::default(), &mut rng());
        let first_bullet = outcome
            .tailored_text
            .lines()
            .find(|l| l.trim_start().starts_with('-'))
            .unwrap();
        assert!(first_bullet.ends_with("python."));
    }

    #[test]
    fn test_same_seed_same_output() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&["python", "kubernetes", "terraform"]);
        let a = distributor.distribute(RESUME, &keywords, &Default::default(), &mut StdRng::seed_from_u64(9));
        let b = distributor.distribute(RESUME, &keywords, &Default::default(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a.tailored_text, b.tailored_text);
    }

    #[test]
    fn test_fully_covered_resume_is_noop() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&["dashboards", "release"]);
        let outcome = distributor.distribute(RESUME, &keywords, &Default::default(), &mut rng());
        assert_eq!(outcome.stats.added, 0);
        assert_eq!(outcome.stats.already_present, 2);
        assert_eq!(outcome.tailored_text, RESUME);
    }

    #[test]
    fn test_fallback_rewrite_injects_without_overflow() {
        let distributor = BulletDistributor::new();
        let keywords = kw(&["python", "kubernetes", "terraform", "ansible"]);
        let outcome = distributor.rewrite_bullets(RESUME, &keywords, &mut rng());
        // one keyword per bullet, excess left un-injected
        assert_eq!(outcome.stats.added, 2);
        assert_eq!(outcome.stats.missing, 2);
        assert!(outcome.tailored_text.contains("principles"));
        let bullet_count = outcome
            .tailored_text
            .lines()
            .filter(|l| l.trim_start().starts_with('-'))
            .count();
        assert_eq!(bullet_count, 2);
    }

    #[test]
    fn test_whole_word_matching() {
        assert!(contains_keyword("Shipped the Java rewrite", "java"));
        assert!(!contains_keyword("Wrote JavaScript tooling", "java"));
        assert!(contains_keyword("Modernized C++ codebase", "c++"));
        assert!(contains_keyword("Owned the ci/cd rollout", "ci/cd"));
    }
}
