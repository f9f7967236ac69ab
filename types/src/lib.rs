use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// ── Extracted character ──────────────────────────────────────────────────

/// One character name found in a text, split into its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCandidate {
    pub full_name: String,
    /// Honorific as written in the text, e.g. "Captain"; empty if none.
    pub title: String,
    /// First name plus any middle names.
    pub first_name: String,
    pub last_name: String,
    pub mentions: usize,
    /// Names merged into this one (bare first names, nicknames).
    pub variants: Vec<String>,
}

// ── Pipeline stages ──────────────────────────────────────────────────────

/// A stage of the extraction pipeline that can be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    DialogueAttribution,
    NamedEntityRecognition,
    CapitalizedWordAnalysis,
    FrequencyAnalysis,
    TitleDetection,
    DirectAddressPattern,
    PossessiveFormDetection,
    CharacterIntroduction,
    CombineNameVariants,
    FilterCommonWords,
}

impl Stage {
    pub const ALL: [Stage; 10] = [
        Stage::DialogueAttribution,
        Stage::NamedEntityRecognition,
        Stage::CapitalizedWordAnalysis,
        Stage::FrequencyAnalysis,
        Stage::TitleDetection,
        Stage::DirectAddressPattern,
        Stage::PossessiveFormDetection,
        Stage::CharacterIntroduction,
        Stage::CombineNameVariants,
        Stage::FilterCommonWords,
    ];

    /// Kebab-case name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DialogueAttribution => "dialogue-attribution",
            Self::NamedEntityRecognition => "named-entity-recognition",
            Self::CapitalizedWordAnalysis => "capitalized-word-analysis",
            Self::FrequencyAnalysis => "frequency-analysis",
            Self::TitleDetection => "title-detection",
            Self::DirectAddressPattern => "direct-address-pattern",
            Self::PossessiveFormDetection => "possessive-form-detection",
            Self::CharacterIntroduction => "character-introduction",
            Self::CombineNameVariants => "combine-name-variants",
            Self::FilterCommonWords => "filter-common-words",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Stage::ALL.iter().map(Stage::as_str).collect();
                format!("unknown stage '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

// ── Options record ───────────────────────────────────────────────────────

/// Which pipeline stages run. Every stage is on unless switched off.
///
/// Deserialization never fails on a field's value: only a real boolean is
/// taken literally, anything else (null, strings, numbers) falls back to
/// `true`. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    #[serde(deserialize_with = "lenient_bool")]
    pub dialogue_attribution: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub named_entity_recognition: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub capitalized_word_analysis: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub frequency_analysis: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub title_detection: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub direct_address_pattern: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub possessive_form_detection: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub character_introduction: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub combine_name_variants: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub filter_common_words: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            dialogue_attribution: true,
            named_entity_recognition: true,
            capitalized_word_analysis: true,
            frequency_analysis: true,
            title_detection: true,
            direct_address_pattern: true,
            possessive_form_detection: true,
            character_introduction: true,
            combine_name_variants: true,
            filter_common_words: true,
        }
    }
}

impl ExtractOptions {
    /// Options with every stage switched off.
    pub fn none() -> Self {
        let mut options = ExtractOptions::default();
        for stage in Stage::ALL {
            options.set(stage, false);
        }
        options
    }

    pub fn is_enabled(&self, stage: Stage) -> bool {
        *self.flag(stage)
    }

    pub fn set(&mut self, stage: Stage, enabled: bool) {
        *self.flag_mut(stage) = enabled;
    }

    /// Builder form of [`ExtractOptions::set`] with `false`.
    pub fn without(mut self, stage: Stage) -> Self {
        self.set(stage, false);
        self
    }

    fn flag(&self, stage: Stage) -> &bool {
        match stage {
            Stage::DialogueAttribution => &self.dialogue_attribution,
            Stage::NamedEntityRecognition => &self.named_entity_recognition,
            Stage::CapitalizedWordAnalysis => &self.capitalized_word_analysis,
            Stage::FrequencyAnalysis => &self.frequency_analysis,
            Stage::TitleDetection => &self.title_detection,
            Stage::DirectAddressPattern => &self.direct_address_pattern,
            Stage::PossessiveFormDetection => &self.possessive_form_detection,
            Stage::CharacterIntroduction => &self.character_introduction,
            Stage::CombineNameVariants => &self.combine_name_variants,
            Stage::FilterCommonWords => &self.filter_common_words,
        }
    }

    fn flag_mut(&mut self, stage: Stage) -> &mut bool {
        match stage {
            Stage::DialogueAttribution => &mut self.dialogue_attribution,
            Stage::NamedEntityRecognition => &mut self.named_entity_recognition,
            Stage::CapitalizedWordAnalysis => &mut self.capitalized_word_analysis,
            Stage::FrequencyAnalysis => &mut self.frequency_analysis,
            Stage::TitleDetection => &mut self.title_detection,
            Stage::DirectAddressPattern => &mut self.direct_address_pattern,
            Stage::PossessiveFormDetection => &mut self.possessive_form_detection,
            Stage::CharacterIntroduction => &mut self.character_introduction,
            Stage::CombineNameVariants => &mut self.combine_name_variants,
            Stage::FilterCommonWords => &mut self.filter_common_words,
        }
    }
}

/// Accepts any JSON value: booleans pass through, everything else is `true`.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseBool {
        Bool(bool),
        Other(serde::de::IgnoredAny),
    }

    Ok(match LooseBool::deserialize(deserializer)? {
        LooseBool::Bool(b) => b,
        LooseBool::Other(_) => true,
    })
}
