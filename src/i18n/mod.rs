pub mod plants_en;
pub mod plants_zh;
pub mod text;

pub use text::{Text, text};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Parses a BCP 47-ish tag from the environment.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// Candidate names offered to the suggestion filter for this locale.
    pub fn houseplants(self) -> &'static [&'static str] {
        match self {
            Self::En => plants_en::COMMON_HOUSEPLANTS,
            Self::Zh => plants_zh::COMMON_HOUSEPLANTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Language::En.toggle(), Language::Zh);
        assert_eq!(Language::Zh.toggle(), Language::En);
    }

    #[test]
    fn candidate_lists_are_locale_selected() {
        assert!(Language::En.houseplants().contains(&"Monstera Deliciosa"));
        assert!(Language::Zh.houseplants().contains(&"龟背竹"));
    }

    #[test]
    fn from_tag_parses_known_tags() {
        assert_eq!(Language::from_tag("zh"), Some(Language::Zh));
        assert_eq!(Language::from_tag("EN"), Some(Language::En));
        assert_eq!(Language::from_tag("fr"), None);
    }
}
