//! Character-name extraction for fiction manuscripts.
//!
//! Given the raw text of a book, [`extract_characters_from_text`] proposes
//! candidate character names from several independent pattern passes,
//! removes common words, merges nicknames and bare first names into full
//! names, splits each name into title/first/last, and ranks the result by
//! how often it was mentioned.

pub mod config;
pub mod decompose;
pub mod error;
pub mod extract;
pub mod extractors;
pub mod fallback;
pub mod input;
pub mod mentions;
pub mod stopwords;
pub mod titles;
pub mod variants;

pub use character_types::{CharacterCandidate, ExtractOptions, Stage};
pub use error::ExtractError;
pub use extract::{extract_characters_from_text, retain_min_mentions};
