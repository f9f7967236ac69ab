//! The mention accumulator shared by every pipeline stage.
//!
//! Keys are candidate names exactly as they appeared in the text (with runs
//! of whitespace collapsed). Iteration follows first-insertion order, which
//! is what the variant combiner's "first one wins" tie-break and the
//! ranker's tie order rely on.

use std::collections::HashMap;

use tracing::trace;

/// Capitalised words that open sentences and are never names on their own.
const SENTENCE_STARTERS: &[&str] = &[
    "The", "A", "An", "And", "But", "Or", "So", "Yet", "For", "Nor", "If", "Then", "When",
    "While", "This", "That", "These", "Those", "There", "Here", "It", "He", "She", "They", "We",
    "You", "His", "Her", "Its", "Our", "Their", "What", "Who", "Why", "How", "Where",
];

/// Counts and provenance for one candidate name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionRecord {
    pub mentions: usize,
    /// Names merged into this entry, in merge order.
    pub variants: Vec<String>,
    order: usize,
}

/// Candidate name → mention record, iterated in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct MentionMap {
    entries: HashMap<String, MentionRecord>,
    next_order: usize,
}

impl MentionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&MentionRecord> {
        self.entries.get(name)
    }

    /// Run a raw regex capture through the acceptance predicate and count it
    /// once. Returns whether the candidate was accepted.
    pub fn record(&mut self, raw: &str) -> bool {
        let name = normalize_name(raw);
        if !is_plausible_name(&name) {
            return false;
        }
        trace!(name = %name, "accepted candidate");
        self.add(&name, 1);
        true
    }

    /// Add `count` mentions to `name`, creating the entry if needed.
    /// The key is used as given; callers normalise first.
    pub fn add(&mut self, name: &str, count: usize) {
        if count == 0 {
            return;
        }
        if let Some(record) = self.entries.get_mut(name) {
            record.mentions += count;
            return;
        }
        let order = self.next_order;
        self.next_order += 1;
        self.entries.insert(
            name.to_string(),
            MentionRecord {
                mentions: count,
                variants: Vec::new(),
                order,
            },
        );
    }

    pub fn remove(&mut self, name: &str) -> Option<MentionRecord> {
        self.entries.remove(name)
    }

    /// Drop every entry for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|name, _| keep(name));
    }

    /// Move `from` into `into`: mentions are summed and `from` (followed by
    /// its own variants) is appended to `into`'s variants. Returns false and
    /// leaves the map untouched if either key is missing or they are equal.
    pub fn merge_into(&mut self, from: &str, into: &str) -> bool {
        if from == into || !self.entries.contains_key(into) {
            return false;
        }
        let Some(absorbed) = self.entries.remove(from) else {
            return false;
        };
        if let Some(target) = self.entries.get_mut(into) {
            target.mentions += absorbed.mentions;
            target.variants.push(from.to_string());
            target.variants.extend(absorbed.variants);
        }
        true
    }

    /// Snapshot of the keys in first-insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.ordered().into_iter().map(|(name, _)| name.clone()).collect()
    }

    /// Entries in first-insertion order.
    pub fn ordered(&self) -> Vec<(&String, &MentionRecord)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|(_, record)| record.order);
        entries
    }

    /// Consume the map, yielding entries in first-insertion order.
    pub fn into_ordered(self) -> Vec<(String, MentionRecord)> {
        let mut entries: Vec<_> = self.entries.into_iter().collect();
        entries.sort_by_key(|(_, record)| record.order);
        entries
    }
}

/// Collapse any run of whitespace to a single space and trim the ends.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The single gate every extractor's candidates pass through.
///
/// Rejects strings shorter than three characters, strings not starting with
/// an uppercase letter, all-caps strings, anything containing characters
/// other than letters, spaces and hyphens, and common sentence starters.
pub fn is_plausible_name(name: &str) -> bool {
    if name.chars().count() < 3 {
        return false;
    }
    if !name.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }
    // All caps: abbreviation or shouting, not a name
    if !name.chars().any(char::is_lowercase) {
        return false;
    }
    if name
        .chars()
        .any(|c| !(c.is_alphabetic() || c == ' ' || c == '-'))
    {
        return false;
    }
    !SENTENCE_STARTERS.contains(&name)
}
