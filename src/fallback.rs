//! Reduced extraction for callers that cannot use the full pipeline.
//!
//! Runs dialogue attribution, capitalised-word analysis, the named-entity
//! heuristic and direct address only, through the same acceptance predicate.
//! No stop-word filtering, no variant merging, no name decomposition: every
//! candidate's `first_name` is its full name and `title`/`last_name` are empty.

use character_types::{CharacterCandidate, ExtractOptions, Stage};
use tracing::debug;

use crate::extract::{Pass, rank};
use crate::extractors;
use crate::mentions::MentionMap;

const FALLBACK_PASSES: [(Stage, Pass); 4] = [
    (Stage::DialogueAttribution, extractors::dialogue_attribution),
    (Stage::CapitalizedWordAnalysis, extractors::capitalized_word_analysis),
    (Stage::NamedEntityRecognition, extractors::named_entity_heuristic),
    (Stage::DirectAddressPattern, extractors::direct_address),
];

pub fn extract_characters(text: &str, options: &ExtractOptions) -> Vec<CharacterCandidate> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut mentions = MentionMap::new();
    for (stage, pass) in FALLBACK_PASSES {
        if options.is_enabled(stage) {
            let accepted = pass(text, &mut mentions);
            debug!(%stage, accepted, "fallback pass done");
        }
    }

    let mut candidates: Vec<CharacterCandidate> = mentions
        .into_ordered()
        .into_iter()
        .map(|(full_name, record)| CharacterCandidate {
            first_name: full_name.clone(),
            full_name,
            title: String::new(),
            last_name: String::new(),
            mentions: record.mentions,
            variants: Vec::new(),
        })
        .collect();
    rank(&mut candidates);
    candidates
}
