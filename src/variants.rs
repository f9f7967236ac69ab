//! Merging of name variants into one entry.
//!
//! Two passes, each usable on its own:
//! 1. a full name absorbs its bare first name ("Elizabeth Bennet" ← "Elizabeth");
//! 2. a nickname entry is absorbed by an entry starting with the canonical
//!    first name ("Robert Smith" ← "Bob").
//!
//! When several entries could absorb the same name, the first one in the
//! map's iteration order takes all of its mentions.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::LazyLock;

use tracing::debug;

use crate::mentions::MentionMap;

/// Informal first name → canonical first name.
pub const NICKNAMES: &[(&str, &str)] = &[
    // Male
    ("bob", "Robert"), ("bobby", "Robert"), ("rob", "Robert"), ("robbie", "Robert"),
    ("bert", "Albert"), ("bill", "William"), ("billy", "William"), ("will", "William"),
    ("willy", "William"), ("liam", "William"), ("jim", "James"), ("jimmy", "James"),
    ("jamie", "James"), ("mike", "Michael"), ("mikey", "Michael"), ("mick", "Michael"),
    ("tom", "Thomas"), ("tommy", "Thomas"), ("dick", "Richard"), ("rick", "Richard"),
    ("ricky", "Richard"), ("rich", "Richard"), ("dan", "Daniel"), ("danny", "Daniel"),
    ("dave", "David"), ("davy", "David"), ("joe", "Joseph"), ("joey", "Joseph"),
    ("jack", "John"), ("johnny", "John"), ("jon", "Jonathan"), ("ben", "Benjamin"),
    ("benny", "Benjamin"), ("sam", "Samuel"), ("sammy", "Samuel"), ("alex", "Alexander"),
    ("andy", "Andrew"), ("drew", "Andrew"), ("tony", "Anthony"), ("chris", "Christopher"),
    ("kit", "Christopher"), ("matt", "Matthew"), ("nick", "Nicholas"), ("pete", "Peter"),
    ("steve", "Steven"), ("ted", "Edward"), ("eddie", "Edward"), ("ned", "Edward"),
    ("frank", "Francis"), ("fred", "Frederick"), ("freddie", "Frederick"), ("harry", "Henry"),
    ("hank", "Henry"), ("larry", "Lawrence"), ("charlie", "Charles"), ("chuck", "Charles"),
    ("greg", "Gregory"), ("jeff", "Jeffrey"), ("ken", "Kenneth"), ("len", "Leonard"),
    ("leo", "Leonard"), ("max", "Maximilian"), ("nate", "Nathan"), ("pat", "Patrick"),
    ("phil", "Philip"), ("ray", "Raymond"), ("ron", "Ronald"), ("russ", "Russell"),
    ("tim", "Timothy"), ("vince", "Vincent"), ("walt", "Walter"), ("zach", "Zachary"),
    ("gabe", "Gabriel"), ("josh", "Joshua"), ("abe", "Abraham"), ("ollie", "Oliver"),
    ("theo", "Theodore"),
    // Female
    ("liz", "Elizabeth"), ("lizzie", "Elizabeth"), ("lizzy", "Elizabeth"), ("beth", "Elizabeth"),
    ("betty", "Elizabeth"), ("eliza", "Elizabeth"), ("kate", "Katherine"), ("katie", "Katherine"),
    ("kathy", "Katherine"), ("kitty", "Katherine"), ("cathy", "Catherine"), ("meg", "Margaret"),
    ("maggie", "Margaret"), ("peggy", "Margaret"), ("jenny", "Jennifer"), ("jen", "Jennifer"),
    ("sue", "Susan"), ("susie", "Susan"), ("becky", "Rebecca"), ("becca", "Rebecca"),
    ("abby", "Abigail"), ("annie", "Anne"), ("ellie", "Eleanor"), ("nell", "Eleanor"),
    ("molly", "Mary"), ("polly", "Mary"), ("patty", "Patricia"), ("trish", "Patricia"),
    ("vicky", "Victoria"), ("tori", "Victoria"), ("sandy", "Sandra"), ("debbie", "Deborah"),
    ("jess", "Jessica"), ("jessie", "Jessica"), ("mandy", "Amanda"), ("bella", "Isabella"),
    ("izzy", "Isabella"), ("emmy", "Emily"), ("sophie", "Sophia"), ("ginny", "Virginia"),
    ("dot", "Dorothy"), ("dottie", "Dorothy"), ("judy", "Judith"), ("tina", "Christina"),
    ("chrissy", "Christina"), ("sally", "Sarah"), ("sadie", "Sarah"), ("fran", "Frances"),
    ("gwen", "Gwendolyn"), ("hattie", "Harriet"), ("lottie", "Charlotte"),
];

static NICKNAME_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NICKNAMES.iter().copied().collect());

/// Canonical first name for a nickname, case-insensitively. `None` means
/// the token is a name in its own right.
pub fn canonical_first_name(token: &str) -> Option<&'static str> {
    NICKNAME_MAP.get(token.to_lowercase().as_str()).copied()
}

fn first_token(name: &str) -> &str {
    name.split(' ').next().unwrap_or(name)
}

/// Pass 1: every multi-word entry absorbs the entry equal to its first word.
/// Returns the number of merges.
pub fn absorb_first_names(mentions: &mut MentionMap) -> usize {
    let mut merged: HashSet<String> = HashSet::new();
    let mut merges = 0;

    for full_name in mentions.keys() {
        if !full_name.contains(' ') || !mentions.contains(&full_name) {
            continue;
        }
        let bare = first_token(&full_name);
        if merged.contains(bare) {
            continue;
        }
        if mentions.merge_into(bare, &full_name) {
            debug!(bare, full_name = %full_name, "absorbed first name");
            merged.insert(bare.to_string());
            merges += 1;
        }
    }
    merges
}

/// Pass 2: entries starting with a nickname merge into the first other
/// entry that starts with the canonical first name. Returns the number of merges.
pub fn absorb_nicknames(mentions: &mut MentionMap) -> usize {
    let keys = mentions.keys();

    // lowercase first word → keys starting with it, in iteration order
    let mut by_first_word: HashMap<String, VecDeque<String>> = HashMap::new();
    for key in &keys {
        by_first_word
            .entry(first_token(key).to_lowercase())
            .or_default()
            .push_back(key.clone());
    }

    let mut merges = 0;
    for name in keys {
        if !mentions.contains(&name) {
            continue;
        }
        let Some(canonical) = canonical_first_name(first_token(&name)) else {
            continue;
        };
        let Some(bucket) = by_first_word.get_mut(&canonical.to_lowercase()) else {
            continue;
        };
        // Drop entries merged away since the index was built
        while bucket.front().is_some_and(|k| !mentions.contains(k)) {
            bucket.pop_front();
        }
        let target = bucket
            .iter()
            .find(|other| **other != name && mentions.contains(other.as_str()))
            .cloned();
        if let Some(target) = target
            && mentions.merge_into(&name, &target)
        {
            debug!(nickname = %name, canonical = %target, "absorbed nickname");
            merges += 1;
        }
    }
    merges
}

/// Run both passes in order.
pub fn combine_name_variants(mentions: &mut MentionMap) -> usize {
    absorb_first_names(mentions) + absorb_nicknames(mentions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, usize)]) -> MentionMap {
        let mut m = MentionMap::new();
        for (name, count) in entries {
            m.add(name, *count);
        }
        m
    }

    #[test]
    fn test_nickname_table_keys_are_unique_and_lowercase() {
        assert_eq!(NICKNAME_MAP.len(), NICKNAMES.len());
        assert!(NICKNAMES.iter().all(|(nick, _)| *nick == nick.to_lowercase()));
    }

    #[test]
    fn test_canonical_lookup() {
        assert_eq!(canonical_first_name("Bob"), Some("Robert"));
        assert_eq!(canonical_first_name("LIZZY"), Some("Elizabeth"));
        assert_eq!(canonical_first_name("Gandalf"), None);
    }

    #[test]
    fn test_full_name_absorbs_first_name() {
        let mut m = map(&[("Elizabeth", 4), ("Elizabeth Bennet", 2), ("Darcy", 3)]);
        assert_eq!(absorb_first_names(&mut m), 1);
        let record = m.get("Elizabeth Bennet").unwrap();
        assert_eq!(record.mentions, 6);
        assert_eq!(record.variants, vec!["Elizabeth"]);
        assert!(!m.contains("Elizabeth"));
        assert_eq!(m.get("Darcy").unwrap().mentions, 3);
    }

    #[test]
    fn test_first_full_name_in_order_wins() {
        let mut m = map(&[("Jane Bennet", 2), ("Jane", 5), ("Jane Fairfax", 1)]);
        absorb_first_names(&mut m);
        assert_eq!(m.get("Jane Bennet").unwrap().mentions, 7);
        assert_eq!(m.get("Jane Fairfax").unwrap().mentions, 1);
        assert!(m.get("Jane Fairfax").unwrap().variants.is_empty());
    }

    #[test]
    fn test_nickname_absorbed_into_canonical() {
        let mut m = map(&[("Bob", 3), ("Robert Smith", 2)]);
        assert_eq!(absorb_first_names(&mut m), 0);
        assert_eq!(absorb_nicknames(&mut m), 1);
        let record = m.get("Robert Smith").unwrap();
        assert_eq!(record.mentions, 5);
        assert_eq!(record.variants, vec!["Bob"]);
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_nickname_without_canonical_stays() {
        let mut m = map(&[("Bob", 3), ("Alice", 2)]);
        assert_eq!(absorb_nicknames(&mut m), 0);
        assert_eq!(m.keys(), vec!["Bob", "Alice"]);
    }

    #[test]
    fn test_both_passes_chain_variants() {
        let mut m = map(&[("Robert", 1), ("Robert Smith", 2), ("Bobby", 4)]);
        assert_eq!(combine_name_variants(&mut m), 2);
        let record = m.get("Robert Smith").unwrap();
        assert_eq!(record.mentions, 7);
        assert_eq!(record.variants, vec!["Robert", "Bobby"]);
    }

    #[test]
    fn test_first_canonical_entry_in_order_absorbs_nickname() {
        let mut m = map(&[("Robert Smith", 1), ("Robert Jones", 1), ("Bob", 4)]);
        assert_eq!(absorb_nicknames(&mut m), 1);
        let smith = m.get("Robert Smith").unwrap();
        assert_eq!(smith.mentions, 5);
        assert_eq!(smith.variants, vec!["Bob"]);
        let jones = m.get("Robert Jones").unwrap();
        assert_eq!(jones.mentions, 1);
        assert!(jones.variants.is_empty());
    }

    #[test]
    fn test_multi_word_nickname_entry_merges_by_first_word() {
        let mut m = map(&[("Robert Smith", 1), ("Bob Jones", 2)]);
        assert_eq!(absorb_nicknames(&mut m), 1);
        let record = m.get("Robert Smith").unwrap();
        assert_eq!(record.mentions, 3);
        assert_eq!(record.variants, vec!["Bob Jones"]);
        assert!(!m.contains("Bob Jones"));
    }

    #[test]
    fn test_nickname_pass_on_many_keys() {
        let mut m = MentionMap::new();
        m.add("Robert Smith", 1);
        for n in 0..20_000 {
            m.add(&format!("Bob Zz{n}"), 1);
            m.add(&format!("Henry Yy{n}"), 1);
            m.add(&format!("Ivor Xx{n}"), 1);
        }
        assert_eq!(absorb_nicknames(&mut m), 20_000);
        assert_eq!(m.get("Robert Smith").unwrap().mentions, 20_001);
        assert_eq!(m.len(), 1 + 2 * 20_000);
        // "Harry" goes to the first "Henry" key
        m.add("Harry", 2);
        assert_eq!(absorb_nicknames(&mut m), 1);
        assert_eq!(m.get("Henry Yy0").unwrap().mentions, 3);
    }
}
