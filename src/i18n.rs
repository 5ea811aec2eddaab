//! Language detection and localized user-facing strings.
//!
//! The interface language is inferred from the message text: any character
//! in the Hebrew Unicode block selects Hebrew. Error strings shown to
//! users are fixed per language; internal error details are appended
//! separately by the handlers.

use crate::types::Language;

/// Whether the text contains any Hebrew-block character (U+0590–U+05FF).
pub fn is_hebrew_text(text: &str) -> bool {
    text.chars().any(|c| ('\u{0590}'..='\u{05FF}').contains(&c))
}

/// Detect the interface language from message text.
pub fn detect_language(text: &str) -> Language {
    if is_hebrew_text(text) {
        Language::He
    } else {
        Language::En
    }
}

/// User-facing message for an overall request timeout.
pub fn timeout_message(language: Language) -> &'static str {
    match language {
        Language::He => "הבקשה ארכה זמן רב מדי. אנא נסה שוב עם שאלה קצרה יותר.",
        Language::En => "Request took too long. Please try again with a shorter question.",
    }
}

/// User-facing message for any other processing failure.
pub fn generic_error_message(language: Language) -> &'static str {
    match language {
        Language::He => "מצטערים, אירעה שגיאה בעיבוד ההודעה. נא לנסות שוב.",
        Language::En => "Sorry, there was an error processing your message. Please try again.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hebrew() {
        assert!(is_hebrew_text("מה זה מוקצה?"));
        assert!(is_hebrew_text("what is מוקצה?")); // mixed counts as Hebrew
        assert_eq!(detect_language("שלום"), Language::He);
    }

    #[test]
    fn detects_english() {
        assert!(!is_hebrew_text("What is muktzeh?"));
        assert!(!is_hebrew_text(""));
        assert_eq!(detect_language("hello"), Language::En);
    }

    #[test]
    fn localized_messages_differ_by_language() {
        assert_ne!(timeout_message(Language::En), timeout_message(Language::He));
        assert_ne!(
            generic_error_message(Language::En),
            timeout_message(Language::En)
        );
    }
}
