//! Response style and language enumerations.
//!
//! Style/language dispatch is a closed table: every `(Style, Language)`
//! pair maps to exactly one system message and prompt template in
//! [`chat::prompts`](crate::chat). Adding a variant here forces the
//! compiler to demand the matching prompt text.

use serde::{Deserialize, Serialize};

/// Response style controlling prompt framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// General study-partner explanation.
    Main,
    /// Traditional interpretation with halachic emphasis.
    Traditional,
    /// Modern relevance and implications.
    Modern,
}

impl Style {
    /// Stable lowercase name, used for metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Main => "main",
            Style::Traditional => "traditional",
            Style::Modern => "modern",
        }
    }
}

/// Interface language, detected from the user's message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    He,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Style::Main).unwrap(), "\"main\"");
        assert_eq!(
            serde_json::to_string(&Style::Traditional).unwrap(),
            "\"traditional\""
        );
    }

    #[test]
    fn language_round_trip() {
        let he: Language = serde_json::from_str("\"he\"").unwrap();
        assert_eq!(he, Language::He);
        assert_eq!(he.as_str(), "he");
    }
}
