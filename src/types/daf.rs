//! Daf (daily page) reference types.

use serde::{Deserialize, Serialize};

/// A bare (tractate, page) reference, as sent by clients in chat requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DafRef {
    /// Tractate name (English transliteration, e.g. "Berachot").
    pub masechet: String,
    /// Page number within the tractate.
    pub daf: u32,
}

/// The current daily page with display-ready dates.
///
/// Wire shape of `GET /api/daf-info`:
/// `{"masechet": "Berachot", "daf": 2, "date": "January 5, 2020",
///   "hebrewDate": "ח׳ טבת תש״פ"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DafInfo {
    pub masechet: String,
    pub daf: u32,
    /// Long-form Gregorian date, en-US style.
    pub date: String,
    /// Hebrew calendar date rendered with Hebrew numerals.
    pub hebrew_date: String,
}

impl DafInfo {
    /// The bare reference, dropping display fields.
    pub fn daf_ref(&self) -> DafRef {
        DafRef {
            masechet: self.masechet.clone(),
            daf: self.daf,
        }
    }
}
