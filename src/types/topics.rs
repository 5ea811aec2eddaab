//! Popular-topics payload.

use serde::{Deserialize, Serialize};

/// Three suggested discussion topics per language for a given daf.
///
/// Parsed directly from model output; also the wire shape of
/// `GET /api/popular-topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularTopics {
    pub en: Vec<String>,
    pub he: Vec<String>,
}

impl PopularTopics {
    /// Localized placeholder returned when generation fails.
    pub fn loading() -> Self {
        Self {
            en: vec!["Loading...".into(); 3],
            he: vec!["טוען...".into(); 3],
        }
    }
}
