//! Keyword extraction: vocabularies, the scoring extractor, and the
//! per-posting keyword cache.

pub mod cache;
pub mod extractor;
pub mod vocabulary;

pub use cache::KeywordCache;
pub use extractor::{KeywordExtractor, KeywordSet, DEFAULT_MAX_KEYWORDS, MIN_TEXT_LEN};
