//! Capitalised words that show up in fiction but are not character names.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::mentions::MentionMap;

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "which", "what", "whoever", "whatever", "whichever", "this", "that", "these",
    "those", "someone", "somebody", "something", "anyone", "anybody", "anything", "everyone",
    "everybody", "everything", "nobody", "nothing", "none", "each", "either", "neither", "both",
    "all", "another", "other", "others", "such",
];

const FUNCTION_WORDS: &[&str] = &[
    // Articles and conjunctions
    "the", "a", "an", "and", "but", "or", "nor", "for", "so", "yet", "if", "then", "else",
    "than", "because", "since", "unless", "until", "while", "whereas", "although", "though",
    "whether", "once", "when", "whenever", "where", "wherever", "why", "how", "as",
    // Adverbs that open sentences
    "also", "too", "only", "just", "even", "still", "already", "again", "ever", "never",
    "always", "often", "sometimes", "perhaps", "maybe", "instead", "however", "therefore",
    "thus", "hence", "meanwhile", "otherwise", "besides", "moreover", "furthermore", "indeed",
    "anyway", "nevertheless", "nonetheless", "very", "quite", "rather", "almost", "enough",
    "here", "there", "now", "later", "soon", "finally", "suddenly", "slowly", "quickly",
    "together", "alone", "somehow", "somewhere", "everywhere", "nowhere", "anywhere",
    "certainly", "clearly", "obviously", "probably", "possibly", "surely", "really",
    "actually", "apparently", "unfortunately", "fortunately", "luckily", "eventually",
    "immediately", "silently", "quietly", "gently", "carefully", "outside", "inside",
    // Quantifiers
    "some", "any", "many", "much", "more", "most", "few", "fewer", "less", "least", "several",
    "every", "no", "not",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite",
    "down", "during", "except", "from", "in", "into", "like", "near", "of", "off", "on",
    "onto", "out", "over", "past", "per", "through", "throughout", "till", "to", "toward",
    "towards", "under", "underneath", "unlike", "up", "upon", "via", "with", "within",
    "without", "ago", "away", "back",
];

const VERBS_AND_INTERJECTIONS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "done", "can", "could", "would", "shall", "should", "might", "must", "let", "lets",
    "get", "got", "go", "goes", "went", "gone", "come", "came", "see", "saw", "seen", "look",
    "looked", "know", "knew", "think", "thought", "say", "said", "tell", "told", "ask", "asked",
    "make", "made", "take", "took", "give", "gave", "want", "wanted", "need", "feel", "felt",
    "seem", "seemed", "keep", "kept", "turn", "turned", "stop", "wait", "listen", "remember",
    "please", "thank", "thanks", "hello", "hi", "hey", "goodbye", "okay", "ok", "oh", "ah",
    "uh", "um", "hmm", "well", "sure", "right", "wow", "alas", "damn", "hell", "fine", "yes",
    "yeah", "nope", "dear", "welcome", "sorry", "quick", "run", "stay", "watch", "move",
    "help", "careful", "enough", "nonsense", "indeed",
];

const CALENDAR: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december", "spring", "summer", "autumn", "fall", "winter", "morning",
    "afternoon", "evening", "night", "midnight", "noon", "dawn", "dusk", "today", "tonight",
    "tomorrow", "yesterday", "christmas", "easter", "halloween", "weekend",
];

const NUMBERS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "hundred", "thousand", "million", "first", "second", "third", "fourth",
    "fifth", "last", "next", "twice", "half",
];

/// Words that structure a manuscript or name relations and roles rather than people.
const NARRATIVE: &[&str] = &[
    "chapter", "part", "book", "volume", "prologue", "epilogue", "interlude", "section", "act",
    "scene", "page", "end", "beginning", "story", "tale", "author", "narrator", "note",
    "notes", "copyright", "contents", "index", "appendix", "glossary", "acknowledgments",
    "dedication", "afterword", "foreword", "preface", "introduction", "conclusion", "summary",
    "title", "god", "gods", "heaven", "mom", "mum", "dad", "daddy", "mommy", "mama", "papa",
    "son", "daughter", "husband", "wife", "baby", "boy", "girl", "man", "woman", "men", "women",
    "child", "children", "friend", "friends", "people", "grandmother", "grandfather",
    "majesty", "highness", "excellency", "lordship", "ladyship", "sire", "honor", "honour",
    // Bare titles; a title alone is not a character
    "mr", "mrs", "ms", "miss", "mister", "sir", "madam", "madame", "lord", "lady", "king",
    "queen", "prince", "princess", "duke", "duchess", "captain", "sergeant", "lieutenant",
    "general", "colonel", "major", "commander", "officer", "detective", "doctor", "professor",
    "father", "mother", "brother", "sister", "uncle", "aunt", "cousin", "grandma", "grandpa",
    "master", "mistress", "saint", "reverend", "judge",
    // Nationalities and languages
    "english", "french", "german", "spanish", "italian", "russian", "chinese", "japanese",
    "american", "british", "european", "african", "asian", "irish", "scottish", "welsh",
    "latin", "greek",
    // Generic places
    "north", "south", "east", "west", "northern", "southern", "eastern", "western", "street",
    "road", "avenue", "lane", "city", "town", "village", "county", "state", "country", "river",
    "lake", "sea", "ocean", "mountain", "mountains", "hill", "valley", "forest", "woods",
    "island", "bay", "park", "church", "school", "college", "university", "hospital",
    "station", "house", "hall", "palace", "castle", "tower", "temple", "academy", "inn",
    "tavern", "market", "bridge", "gate", "gates", "harbor", "harbour", "port", "kingdom",
    "empire", "realm", "republic",
    // Everyday nouns and adjectives that start sentences
    "new", "old", "young", "little", "big", "small", "long", "short", "same", "different",
    "true", "false", "real", "whole", "best", "better", "worse", "worst", "own", "good",
    "great", "bad", "time", "day", "days", "year", "years", "week", "month", "hour", "minute",
    "moment", "way", "thing", "things", "place", "home", "room", "door", "window", "table",
    "hand", "hands", "head", "eyes", "face", "voice", "word", "words", "name", "names", "food",
    "money", "car", "phone", "police", "war", "peace", "love", "hate", "fear", "truth", "lie",
    "lies", "dream", "dreams", "memory", "heart", "mind", "soul", "body", "mistake", "nobody",
];

/// Genre nouns common in fantasy manuscripts.
const FANTASY: &[&str] = &[
    "dragon", "dragons", "magic", "sword", "swords", "shield", "spell", "spells", "wizard",
    "witch", "mage", "sorcerer", "sorceress", "elf", "elves", "dwarf", "dwarves", "orc", "orcs",
    "goblin", "goblins", "troll", "trolls", "giant", "giants", "demon", "demons", "angel",
    "angels", "spirit", "spirits", "ghost", "ghosts", "beast", "beasts", "creature",
    "creatures", "monster", "monsters", "knight", "knights", "warrior", "warriors", "soldier",
    "soldiers", "guard", "guards", "army", "legion", "council", "order", "guild", "clan",
    "tribe", "crown", "throne", "prophecy", "quest", "curse", "blood", "fire", "water", "earth",
    "air", "wind", "storm", "stone", "iron", "steel", "gold", "silver", "shadow", "shadows",
    "dark", "darkness", "light", "void", "chaos", "death", "life", "fate", "destiny", "power",
    "rune", "runes", "crystal", "orb", "staff", "wand", "potion", "scroll", "tome", "relic",
    "artifact", "portal", "dungeon", "citadel", "fortress", "stronghold", "sanctuary",
    "shrine", "altar", "holy", "sacred", "ancient", "elder", "high", "grand", "royal",
    "imperial", "black", "white", "red", "blue", "green", "golden", "sun", "moon", "stars",
    "star", "sky", "world", "land", "lands", "elven", "dwarven", "mortal", "immortal",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        PRONOUNS,
        FUNCTION_WORDS,
        PREPOSITIONS,
        VERBS_AND_INTERJECTIONS,
        CALENDAR,
        NUMBERS,
        NARRATIVE,
        FANTASY,
    ]
    .into_iter()
    .flatten()
    .copied()
    .collect()
});

/// Case-insensitive stop-word check.
pub fn is_common_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}

/// Delete every entry whose whole key is a stop word. Returns how many were removed.
pub fn filter_common_words(mentions: &mut MentionMap) -> usize {
    let before = mentions.len();
    mentions.retain(|name| !is_common_word(name));
    before - mentions.len()
}
