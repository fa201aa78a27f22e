//! Experience-section and bullet detection for resume text.
//!
//! A heading must sit alone on its line (optional trailing colon and
//! whitespace) to count, enforced by anchored case-insensitive regexes; the
//! section body runs until the next recognized heading or end of document.
//! Only the detected section is ever rewritten.

use regex::Regex;
use std::sync::OnceLock;

/// Headings that open the work-experience section.
fn experience_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*(experience|work experience|employment|professional experience)\s*:?\s*$")
            .expect("Invalid experience heading regex")
    })
}

/// Headings that terminate the experience section.
fn terminating_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*(skills|education|certifications|projects|technical proficiencies)\s*:?\s*$")
            .expect("Invalid terminating heading regex")
    })
}

/// Characters that mark a line as a bullet after trimming.
const BULLET_MARKERS: &[char] = &['-', '•', '*', '·', '▪', '‣'];

/// The resume split around its experience section. `pre` includes the
/// heading line; `post` starts at the terminating heading (or is empty).
#[derive(Debug, Clone)]
pub struct ExperienceSection {
    pub pre: String,
    pub body: String,
    pub post: String,
}

impl ExperienceSection {
    /// Splice a rewritten body back between the untouched surroundings.
    pub fn reassemble(&self, new_body: &str) -> String {
        format!("{}{}{}", self.pre, new_body, self.post)
    }
}

/// Locate the experience section. Returns `None` when no recognized
/// experience heading exists; callers degrade to "no changes made".
pub fn find_experience_section(text: &str) -> Option<ExperienceSection> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    let heading_idx = lines
        .iter()
        .position(|line| experience_heading_regex().is_match(line))?;

    let end_idx = lines
        .iter()
        .enumerate()
        .skip(heading_idx + 1)
        .find(|(_, line)| terminating_heading_regex().is_match(line))
        .map(|(idx, _)| idx)
        .unwrap_or(lines.len());

    Some(ExperienceSection {
        pre: lines[..=heading_idx].concat(),
        body: lines[heading_idx + 1..end_idx].concat(),
        post: lines[end_idx..].concat(),
    })
}

/// Whether a line is an achievement bullet.
pub fn is_bullet_line(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .map(|c| BULLET_MARKERS.contains(&c))
        .unwrap_or(false)
}

/// Indices of bullet lines within a section body's lines.
pub fn bullet_indices(lines: &[String]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_bullet_line(line))
        .map(|(idx, _)| idx)
        .collect()
}
