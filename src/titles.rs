/// Military and law-enforcement ranks. "Captain Smith" is a surname;
/// "Captain John Smith" is first + last.
pub const LAST_NAME_TITLES: &[&str] = &[
    "captain", "capt", "lieutenant", "lt", "sergeant", "sgt", "major", "colonel", "col",
    "general", "gen", "admiral", "adm", "commander", "cmdr", "corporal", "cpl", "private",
    "pvt", "commodore", "ensign", "brigadier", "marshal", "officer", "detective", "det",
    "inspector", "insp", "constable", "sheriff", "deputy", "agent", "chief", "superintendent",
    "trooper", "warden", "ranger",
];

/// Plain courtesy titles, bound to the surname by default.
pub const FORMAL_TITLES: &[&str] = &["mr", "mrs", "ms", "miss", "mx", "mister"];

/// Nobility and familiar honorifics. "Lady Mary" and "Sir Galahad" name the
/// person by their first name.
pub const FIRST_NAME_TITLES: &[&str] = &[
    "lady", "lord", "sir", "dame", "king", "queen", "prince", "princess", "duke", "duchess",
    "count", "countess", "baron", "baroness", "earl", "emperor", "empress", "archduke",
    "archduchess", "marquis", "marquess", "marchioness", "viscount", "viscountess", "czar",
    "tsar", "tsarina", "sultan", "sultana", "pharaoh", "chancellor", "madam", "madame",
    "uncle", "aunt", "auntie", "cousin", "grandma", "grandpa", "granny",
];

/// Academic and religious titles. They could go either way, default to the
/// surname like the formal titles.
pub const AMBIGUOUS_TITLES: &[&str] = &[
    "doctor", "dr", "professor", "prof", "father", "mother", "brother", "sister", "reverend",
    "rev", "pastor", "bishop", "archbishop", "cardinal", "pope", "rabbi", "imam", "elder",
    "deacon", "dean", "judge", "master", "mistress", "saint", "abbot", "abbess", "friar",
    "sensei", "maester",
];

/// How a title binds to the name parts that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleCategory {
    LastName,
    Formal,
    FirstName,
    Ambiguous,
}

impl TitleCategory {
    /// Lookup order: the first category that contains a title wins.
    pub const LOOKUP_ORDER: [TitleCategory; 4] = [
        TitleCategory::LastName,
        TitleCategory::Formal,
        TitleCategory::FirstName,
        TitleCategory::Ambiguous,
    ];

    pub fn titles(&self) -> &'static [&'static str] {
        match self {
            Self::LastName => LAST_NAME_TITLES,
            Self::Formal => FORMAL_TITLES,
            Self::FirstName => FIRST_NAME_TITLES,
            Self::Ambiguous => AMBIGUOUS_TITLES,
        }
    }

    /// Whether a single name part after this title is a first name.
    pub fn binds_first_name(&self) -> bool {
        matches!(self, Self::FirstName)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastName => "lastNameTitles",
            Self::Formal => "formalTitles",
            Self::FirstName => "firstNameTitles",
            Self::Ambiguous => "ambiguousTitles",
        }
    }
}

/// Classify a token as a title. Case-insensitive; one trailing period is
/// ignored, so "Dr.", "dr" and "DR" are the same title.
pub fn classify_title(token: &str) -> Option<TitleCategory> {
    let bare = token.strip_suffix('.').unwrap_or(token).to_lowercase();
    if bare.is_empty() {
        return None;
    }
    TitleCategory::LOOKUP_ORDER
        .into_iter()
        .find(|category| category.titles().contains(&bare.as_str()))
}
