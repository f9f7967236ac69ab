use crate::titles::classify_title;

/// The components of a full name. Empty strings stand for absent parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameParts {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
}

impl NameParts {
    fn new(title: &str, first_name: &str, last_name: &str) -> Self {
        NameParts {
            title: title.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Split a full name (e.g. "Captain John Smith", "John Alan Smith") into
/// title, first name and last name.
///
/// With `title_detection`, a leading title decides how the remaining parts
/// bind: one part after "Lady" is a first name, one part after "Captain",
/// "Mr" or "Dr" is a last name. Two or more parts after any title are
/// first + rest. Without a title, middle names stay in the first name.
pub fn split_name(full_name: &str, title_detection: bool) -> NameParts {
    let parts: Vec<&str> = full_name.split_whitespace().collect();

    match parts.as_slice() {
        [] => NameParts::default(),
        [only] => NameParts::new("", only, ""),
        [first, second, tail @ ..] => {
            if title_detection && let Some(category) = classify_title(first) {
                return match tail {
                    [] if category.binds_first_name() => NameParts::new(first, second, ""),
                    [] => NameParts::new(first, "", second),
                    _ => NameParts::new(first, second, &tail.join(" ")),
                };
            }
            standard_parse(&parts)
        }
    }
}

/// First part is the first name, the last part the last name, and anything
/// in between is kept with the first name.
fn standard_parse(parts: &[&str]) -> NameParts {
    match parts {
        [] => NameParts::default(),
        [only] => NameParts::new("", only, ""),
        [given @ .., surname] => NameParts::new("", &given.join(" "), surname),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(title: &str, first: &str, last: &str) -> NameParts {
        NameParts::new(title, first, last)
    }

    #[test]
    fn test_single_part() {
        assert_eq!(split_name("Gandalf", true), parts("", "Gandalf", ""));
    }

    #[test]
    fn test_last_name_title() {
        assert_eq!(split_name("Captain Smith", true), parts("Captain", "", "Smith"));
        assert_eq!(
            split_name("Captain John Smith", true),
            parts("Captain", "John", "Smith")
        );
    }

    #[test]
    fn test_first_name_title() {
        assert_eq!(split_name("Lady Mary", true), parts("Lady", "Mary", ""));
        assert_eq!(
            split_name("Lady Mary Crawley", true),
            parts("Lady", "Mary", "Crawley")
        );
    }

    #[test]
    fn test_formal_and_ambiguous_titles() {
        assert_eq!(split_name("Mrs. Hudson", true), parts("Mrs.", "", "Hudson"));
        assert_eq!(split_name("Dr Watson", true), parts("Dr", "", "Watson"));
        assert_eq!(
            split_name("Professor Minerva Jane McGonagall", true),
            parts("Professor", "Minerva", "Jane McGonagall")
        );
    }

    #[test]
    fn test_title_alone_and_long_tails() {
        // A bare title is a single part, not a title with nothing after it
        assert_eq!(split_name("Captain", true), parts("", "Captain", ""));
        assert_eq!(
            split_name("Lady Mary Anne Crawley", true),
            parts("Lady", "Mary", "Anne Crawley")
        );
        assert_eq!(
            split_name("Sergeant Major Tom Kettle", true),
            parts("Sergeant", "Major", "Tom Kettle")
        );
    }

    #[test]
    fn test_middle_names_kept_in_first_name() {
        assert_eq!(
            split_name("John Alan Smith", true),
            parts("", "John Alan", "Smith")
        );
        assert_eq!(split_name("John Smith", true), parts("", "John", "Smith"));
    }

    #[test]
    fn test_title_detection_disabled() {
        assert_eq!(split_name("Captain Smith", false), parts("", "Captain", "Smith"));
        assert_eq!(split_name("Lady Mary", false), parts("", "Lady", "Mary"));
    }

    #[test]
    fn test_whitespace_and_empty() {
        assert_eq!(split_name("  John \t Smith ", true), parts("", "John", "Smith"));
        assert_eq!(split_name("", true), NameParts::default());
    }
}
