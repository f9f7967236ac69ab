//! Pattern passes that propose candidate names.
//!
//! Every pass scans the whole text for non-overlapping matches and feeds
//! capture group 1 through [`MentionMap::record`]. Passes are independent:
//! the same span may be counted by several of them, which is how confidence
//! accumulates.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::mentions::{MentionMap, is_plausible_name};

// ── Building blocks ──────────────────────────────────────────────────
//
// A name word is title case with an optional inner capital (McGonagall,
// DeVito) and an optional hyphenated continuation (Mary-Jane). A name
// phrase is one to four such words; the cap keeps every capture bounded.

const NAME_WORD: &str = r"\p{Lu}\p{Ll}+(?:\p{Lu}\p{Ll}+)?(?:-\p{Lu}\p{Ll}+)?";

static NAME_PHRASE: LazyLock<String> =
    LazyLock::new(|| format!(r"{NAME_WORD}(?:[ \t]+{NAME_WORD}){{0,3}}"));

/// Verbs that attribute a line of dialogue to a speaker.
pub const SPEECH_VERBS: &[&str] = &[
    "said", "asked", "replied", "whispered", "shouted", "muttered", "exclaimed", "answered",
    "called", "cried", "yelled", "screamed", "murmured", "responded", "continued", "added",
    "began", "demanded", "insisted", "explained", "laughed", "sighed", "snapped", "growled",
    "hissed", "admitted", "agreed", "announced", "declared", "suggested", "stated",
    "breathed", "pleaded", "protested", "remarked", "retorted", "warned", "whimpered",
    "gasped", "stammered", "mumbled", "teased", "offered", "interrupted", "says", "asks",
];

/// Nouns used when a narrator introduces someone ("a man named X").
pub const ROLE_NOUNS: &[&str] = &[
    "man", "woman", "boy", "girl", "child", "person", "stranger", "traveler", "traveller",
    "knight", "wizard", "witch", "warrior", "soldier", "merchant", "farmer", "sailor", "hunter",
    "priest", "priestess", "healer", "thief", "servant", "guard", "maid", "captain", "king",
    "queen", "prince", "princess", "lord", "lady", "mage", "elf", "dwarf", "friend", "doctor",
    "teacher", "student", "detective", "officer", "nurse", "lawyer", "scholar", "monk", "nun",
    "bard", "smith", "blacksmith", "innkeeper", "widow", "orphan", "gentleman", "fellow",
];

fn alternation(words: &[&str]) -> String {
    words.join("|")
}

fn compile(pattern: &str, what: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("{what} regex: {e}"))
}

// ── Compiled patterns ────────────────────────────────────────────────

// "John said", "Mary Ann whispered"
static RE_NAME_THEN_VERB: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    let verbs = alternation(SPEECH_VERBS);
    compile(&format!(r"\b({name})\s+(?:{verbs})\b"), "name-then-verb")
});

// "said John", "asked Mary Ann"
static RE_VERB_THEN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    let verbs = alternation(SPEECH_VERBS);
    compile(&format!(r"\b(?:{verbs})\s+({name})\b"), "verb-then-name")
});

// ". Elizabeth", "?\" Darcy"
static RE_AFTER_SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    compile(
        &format!(r#"[.!?]["'”’)]?\s+({name})\b"#),
        "after-sentence-end",
    )
});

static RE_CAPITALIZED: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    compile(&format!(r"\b({name})\b"), "capitalized")
});

static RE_CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\b({NAME_WORD})\b"), "capitalized-word"));

// "Come here, John." / "Wait, Mary!" closing a quotation
static RE_VOCATIVE: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    compile(&format!(r#",\s+({name})[.!?,]?["”]"#), "vocative")
});

// "John, please", "Mary, could you"
static RE_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    compile(
        &format!(r"\b({name}),\s+(?:please|would\s+you|could\s+you|can\s+you)\b"),
        "request",
    )
});

// "John's", "John’s"
static RE_POSSESSIVE: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    compile(&format!(r"\b({name})(?:'s|’s)\b"), "possessive")
});

// "a young man named John"
static RE_ROLE_NAMED: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    let roles = alternation(ROLE_NOUNS);
    compile(
        &format!(r"\b(?:[Aa]|[Tt]he)\s+(?:\p{{Ll}}+\s+)?(?:{roles})\s+named\s+({name})\b"),
        "role-named",
    )
});

// "John was a blacksmith"
static RE_WAS_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    let roles = alternation(ROLE_NOUNS);
    compile(
        &format!(r"\b({name})\s+was\s+(?:an?|the)\s+(?:\p{{Ll}}+\s+)?(?:{roles})\b"),
        "was-role",
    )
});

// "introduced herself as John"
static RE_INTRODUCED_AS: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    compile(
        &format!(r"\bintroduced\s+(?:him|her)self\s+as\s+({name})\b"),
        "introduced-as",
    )
});

// "called himself John"
static RE_CALLED_SELF: LazyLock<Regex> = LazyLock::new(|| {
    let name = NAME_PHRASE.as_str();
    compile(
        &format!(r"\bcalled\s+(?:him|her)self\s+({name})\b"),
        "called-self",
    )
});

/// Single-word mentions needed before frequency analysis keeps a word.
pub const FREQUENCY_THRESHOLD: usize = 3;

// ── Passes ───────────────────────────────────────────────────────────

/// Record capture group 1 of every match. Returns the accepted count.
fn record_captures(re: &Regex, text: &str, mentions: &mut MentionMap) -> usize {
    let mut accepted = 0;
    for caps in re.captures_iter(text) {
        if let Some(m) = caps.get(1)
            && mentions.record(m.as_str())
        {
            accepted += 1;
        }
    }
    accepted
}

/// `Name said` and `said Name`. Both orientations count separately.
pub fn dialogue_attribution(text: &str, mentions: &mut MentionMap) -> usize {
    record_captures(&RE_NAME_THEN_VERB, text, mentions)
        + record_captures(&RE_VERB_THEN_NAME, text, mentions)
}

/// Capitalised phrase right after sentence-ending punctuation.
pub fn named_entity_heuristic(text: &str, mentions: &mut MentionMap) -> usize {
    record_captures(&RE_AFTER_SENTENCE_END, text, mentions)
}

/// Every capitalised phrase of one to four words.
pub fn capitalized_word_analysis(text: &str, mentions: &mut MentionMap) -> usize {
    record_captures(&RE_CAPITALIZED, text, mentions)
}

/// Count single capitalised words; words seen at least
/// [`FREQUENCY_THRESHOLD`] times are added with their full count.
pub fn frequency_analysis(text: &str, mentions: &mut MentionMap) -> usize {
    // word → (first-seen rank, count)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for caps in RE_CAPITALIZED_WORD.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            let next_rank = counts.len();
            counts.entry(m.as_str()).or_insert((next_rank, 0)).1 += 1;
        }
    }

    let mut frequent: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .filter(|(word, (_, count))| *count >= FREQUENCY_THRESHOLD && is_plausible_name(word))
        .map(|(word, (rank, count))| (word, rank, count))
        .collect();
    frequent.sort_by_key(|(_, rank, _)| *rank);

    for (word, _, count) in &frequent {
        mentions.add(word, *count);
    }
    frequent.len()
}

/// `"..., Name."` at the end of a quotation and `Name, please/could you`.
pub fn direct_address(text: &str, mentions: &mut MentionMap) -> usize {
    record_captures(&RE_VOCATIVE, text, mentions) + record_captures(&RE_REQUEST, text, mentions)
}

/// `Name's` with a straight or curly apostrophe.
pub fn possessive_form(text: &str, mentions: &mut MentionMap) -> usize {
    record_captures(&RE_POSSESSIVE, text, mentions)
}

/// Narrator introductions: "a man named X", "X was a knight",
/// "introduced herself as X", "called himself X".
pub fn character_introduction(text: &str, mentions: &mut MentionMap) -> usize {
    [
        &*RE_ROLE_NAMED,
        &*RE_WAS_ROLE,
        &*RE_INTRODUCED_AS,
        &*RE_CALLED_SELF,
    ]
    .into_iter()
    .map(|re| record_captures(re, text, mentions))
    .sum()
}
