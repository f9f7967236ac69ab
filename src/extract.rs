use character_types::{CharacterCandidate, ExtractOptions, Stage};
use tracing::debug;

use crate::decompose::split_name;
use crate::extractors;
use crate::mentions::MentionMap;
use crate::stopwords::filter_common_words;
use crate::variants::combine_name_variants;

/// A pattern pass: scans the text, records candidates, returns how many it accepted.
pub type Pass = fn(&str, &mut MentionMap) -> usize;

/// Every pattern pass, in the order the pipeline runs them.
pub const PASSES: [(Stage, Pass); 7] = [
    (Stage::DialogueAttribution, extractors::dialogue_attribution),
    (Stage::NamedEntityRecognition, extractors::named_entity_heuristic),
    (Stage::CapitalizedWordAnalysis, extractors::capitalized_word_analysis),
    (Stage::FrequencyAnalysis, extractors::frequency_analysis),
    (Stage::DirectAddressPattern, extractors::direct_address),
    (Stage::PossessiveFormDetection, extractors::possessive_form),
    (Stage::CharacterIntroduction, extractors::character_introduction),
];

/// Find the characters named in `text`, most mentioned first.
///
/// Stages switched off in `options` are skipped entirely. Empty or blank
/// text gives an empty list. Any minimum-mentions cut-off is left to the
/// caller (see [`retain_min_mentions`]).
pub fn extract_characters_from_text(
    text: &str,
    options: &ExtractOptions,
) -> Vec<CharacterCandidate> {
    if text.trim().is_empty() {
        debug!("empty input, nothing to extract");
        return Vec::new();
    }

    let mut mentions = collect_mentions(text, options);

    if options.filter_common_words {
        let removed = filter_common_words(&mut mentions);
        debug!(removed, remaining = mentions.len(), "filtered common words");
    }

    if options.combine_name_variants {
        let merged = combine_name_variants(&mut mentions);
        debug!(merged, remaining = mentions.len(), "combined name variants");
    }

    let mut candidates = to_candidates(mentions, options.title_detection);
    rank(&mut candidates);
    candidates
}

/// Run the enabled pattern passes over `text` into a fresh mention map.
pub fn collect_mentions(text: &str, options: &ExtractOptions) -> MentionMap {
    let mut mentions = MentionMap::new();
    for (stage, pass) in PASSES {
        if !options.is_enabled(stage) {
            continue;
        }
        let accepted = pass(text, &mut mentions);
        debug!(%stage, accepted, entries = mentions.len(), "pattern pass done");
    }
    mentions
}

/// Decompose every surviving entry into a candidate, in map order.
pub fn to_candidates(mentions: MentionMap, title_detection: bool) -> Vec<CharacterCandidate> {
    mentions
        .into_ordered()
        .into_iter()
        .map(|(full_name, record)| {
            let parts = split_name(&full_name, title_detection);
            CharacterCandidate {
                full_name,
                title: parts.title,
                first_name: parts.first_name,
                last_name: parts.last_name,
                mentions: record.mentions,
                variants: record.variants,
            }
        })
        .collect()
}

/// Sort by mentions descending. Stable, so ties keep their incoming order.
pub fn rank(candidates: &mut [CharacterCandidate]) {
    candidates.sort_by(|a, b| b.mentions.cmp(&a.mentions));
}

/// Drop candidates mentioned fewer than `min_mentions` times.
pub fn retain_min_mentions(
    mut candidates: Vec<CharacterCandidate>,
    min_mentions: usize,
) -> Vec<CharacterCandidate> {
    candidates.retain(|c| c.mentions >= min_mentions);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mentions::is_plausible_name;
    use proptest::prelude::*;

    const SAMPLE: &str = "\
Elizabeth Bennet walked to Netherfield. \"Good morning, Jane.\" Elizabeth said. \
Jane smiled. \"Lizzy, please sit,\" said Jane Bennet. Darcy's horse waited outside. \
A tall man named Bingley arrived. Bingley was a gentleman of fortune. \
Captain Carter bowed. Elizabeth laughed. Monday came. Darcy frowned. Darcy left.";

    fn find<'a>(candidates: &'a [CharacterCandidate], name: &str) -> Option<&'a CharacterCandidate> {
        candidates.iter().find(|c| c.full_name == name)
    }

    #[test]
    fn test_empty_and_blank_input() {
        let options = ExtractOptions::default();
        assert!(extract_characters_from_text("", &options).is_empty());
        assert!(extract_characters_from_text("  \n\t ", &options).is_empty());
    }

    #[test]
    fn test_no_capitalised_tokens() {
        let text = "it was a quiet night and nobody said anything at all.";
        assert!(extract_characters_from_text(text, &ExtractOptions::default()).is_empty());
    }

    #[test]
    fn test_john_and_mary() {
        let result = extract_characters_from_text(
            "John said hello. Mary replied softly.",
            &ExtractOptions::default(),
        );
        assert!(find(&result, "John").is_some_and(|c| c.mentions >= 1));
        assert!(find(&result, "Mary").is_some_and(|c| c.mentions >= 1));
    }

    #[test]
    fn test_sample_pipeline() {
        let result = extract_characters_from_text(SAMPLE, &ExtractOptions::default());

        let elizabeth = find(&result, "Elizabeth Bennet").expect("Elizabeth Bennet found");
        assert_eq!(elizabeth.first_name, "Elizabeth");
        assert_eq!(elizabeth.last_name, "Bennet");
        assert!(elizabeth.variants.contains(&"Elizabeth".to_string()));
        assert!(elizabeth.variants.contains(&"Lizzy".to_string()));
        assert!(find(&result, "Elizabeth").is_none());
        assert!(find(&result, "Lizzy").is_none());

        let carter = find(&result, "Captain Carter").expect("Captain Carter found");
        assert_eq!(carter.title, "Captain");
        assert_eq!(carter.first_name, "");
        assert_eq!(carter.last_name, "Carter");

        assert!(find(&result, "Bingley").is_some());
        assert!(find(&result, "Darcy").is_some_and(|c| c.mentions >= 3));
        assert!(find(&result, "Monday").is_none());
    }

    #[test]
    fn test_output_sorted_and_deterministic() {
        let options = ExtractOptions::default();
        let first = extract_characters_from_text(SAMPLE, &options);
        let second = extract_characters_from_text(SAMPLE, &options);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0].mentions >= w[1].mentions));
    }

    #[test]
    fn test_each_pass_contributes_exactly_its_own_matches() {
        let all = ExtractOptions::default();
        let with_all = collect_mentions(SAMPLE, &all);

        for (stage, pass) in PASSES {
            let without = collect_mentions(SAMPLE, &all.without(stage));
            let mut alone = MentionMap::new();
            pass(SAMPLE, &mut alone);

            for (name, record) in with_all.ordered() {
                let off = without.get(name).map_or(0, |r| r.mentions);
                let only = alone.get(name).map_or(0, |r| r.mentions);
                assert_eq!(record.mentions, off + only, "{stage} changed {name}");
            }
            assert!(without.len() <= with_all.len());
        }
    }

    #[test]
    fn test_disabled_filter_keeps_stop_words() {
        let options = ExtractOptions::default().without(Stage::FilterCommonWords);
        let result = extract_characters_from_text(SAMPLE, &options);
        assert!(find(&result, "Monday").is_some());
    }

    #[test]
    fn test_disabled_combination_keeps_variants_apart() {
        let options = ExtractOptions::default().without(Stage::CombineNameVariants);
        let result = extract_characters_from_text(SAMPLE, &options);
        assert!(find(&result, "Elizabeth").is_some());
        assert!(result.iter().all(|c| c.variants.is_empty()));
    }

    #[test]
    fn test_disabled_title_detection_uses_standard_parse() {
        let options = ExtractOptions::default().without(Stage::TitleDetection);
        let result = extract_characters_from_text(SAMPLE, &options);
        let carter = find(&result, "Captain Carter").expect("Captain Carter found");
        assert_eq!(carter.title, "");
        assert_eq!(carter.first_name, "Captain");
        assert_eq!(carter.last_name, "Carter");
    }

    #[test]
    fn test_all_stages_off() {
        assert!(extract_characters_from_text(SAMPLE, &ExtractOptions::none()).is_empty());
    }

    #[test]
    fn test_rank_is_stable() {
        let mut map = MentionMap::new();
        map.add("Zed", 2);
        map.add("Amy", 5);
        map.add("Mia", 2);
        let mut candidates = to_candidates(map, true);
        rank(&mut candidates);
        let order: Vec<&str> = candidates.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(order, vec!["Amy", "Zed", "Mia"]);
    }

    #[test]
    fn test_retain_min_mentions() {
        let result = extract_characters_from_text(SAMPLE, &ExtractOptions::default());
        let total = result.len();
        let kept = retain_min_mentions(result, 3);
        assert!(kept.len() < total);
        assert!(kept.iter().all(|c| c.mentions >= 3));
    }

    fn prose() -> impl Strategy<Value = String> {
        let words = prop::sample::select(vec![
            "John", "Mary", "said", "asked", "the", "Captain", "Smith", "Bob", "Robert", "walked",
            "Monday", "THE", "A1b", "named", "a", "man", "was", "knight", ".", ",", "'s", "!",
            "\"", "please", "Lady", "Jane", "Al",
        ]);
        prop::collection::vec(words, 0..60).prop_map(|w| w.join(" "))
    }

    proptest! {
        #[test]
        fn prop_sorted_deterministic_and_plausible(text in prose()) {
            let options = ExtractOptions::default();
            let first = extract_characters_from_text(&text, &options);
            let second = extract_characters_from_text(&text, &options);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.windows(2).all(|w| w[0].mentions >= w[1].mentions));
            for c in &first {
                prop_assert!(is_plausible_name(&c.full_name));
                prop_assert!(c.mentions >= 1);
            }
        }

        #[test]
        fn prop_predicate_rejects_digits_and_short(s in "[A-Za-z0-9 -]{0,12}") {
            if s.chars().count() < 3 || s.chars().any(|c| c.is_ascii_digit()) {
                prop_assert!(!is_plausible_name(&s));
            }
        }
    }
}
