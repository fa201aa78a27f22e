//! Connective phrases and sentence templates used when injecting keywords
//! into bullets. Selection is randomized through a caller-supplied `Rng` so
//! tests can seed it and assert exact output.

use rand::Rng;

/// Connectives for appending keywords to an existing bullet.
pub const CONNECTIVES: &[&str] = &[
    "leveraging",
    "utilizing",
    "through",
    "by applying",
    "with a focus on",
];

/// Connectives for the lighter fallback rewrite pass.
pub const FALLBACK_CONNECTIVES: &[&str] = &[
    "incorporating",
    "applying",
    "drawing on",
];

pub fn pick_connective<R: Rng>(rng: &mut R) -> &'static str {
    CONNECTIVES[rng.gen_range(0..CONNECTIVES.len())]
}

pub fn pick_fallback_connective<R: Rng>(rng: &mut R) -> &'static str {
    FALLBACK_CONNECTIVES[rng.gen_range(0..FALLBACK_CONNECTIVES.len())]
}

/// Render 1-3 keywords into a short clause for appending to a bullet.
///
/// Singular form: ", <phrase> K". Dual form: " <phrase> K1 and K2".
/// Plural form: " <phrase> K1, K2, and K3".
pub fn injection_clause(phrase: &str, keywords: &[&str]) -> String {
    match keywords {
        [one] => format!(", {} {}", phrase, one),
        [one, two] => format!(" {} {} and {}", phrase, one, two),
        [one, two, three] => format!(" {} {}, {}, and {}", phrase, one, two, three),
        _ => String::new(),
    }
}

/// Clause used by the fallback rewrite pass: ", incorporating K principles".
pub fn fallback_clause(phrase: &str, keyword: &str) -> String {
    format!(", {} {} principles", phrase, keyword)
}

/// Synthesize a whole overflow bullet from 1-3 keywords that found no room
/// in the existing bullets.
pub fn overflow_bullet<R: Rng>(rng: &mut R, keywords: &[&str]) -> String {
    let joined = match keywords {
        [one] => one.to_string(),
        [one, two] => format!("{} and {}", one, two),
        [one, two, three] => format!("{}, {}, and {}", one, two, three),
        _ => return String::new(),
    };
    let templates: &[fn(&str) -> String] = &[
        |k| format!("- Implemented {} solutions to enhance operational efficiency and delivery quality", k),
        |k| format!("- Applied {} to streamline workflows and improve project outcomes", k),
        |k| format!("- Utilized {} to support cross-functional initiatives and business goals", k),
        |k| format!("- Developed proficiency in {} through hands-on project work", k),
    ];
    templates[rng.gen_range(0..templates.len())](&joined)
}
