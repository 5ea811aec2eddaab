//! Daf Yomi cycle arithmetic.
//!
//! One daf per day, walking the fixed tractate order below and wrapping at
//! the end of the cycle. The 14th cycle began on 2020-01-05 (8 Tevet 5780)
//! with Berachot 2; a full cycle is 2,711 dapim.
//!
//! # Offset convention
//!
//! Each table entry carries `first_daf` (printed pagination starts at daf 2,
//! and the Mishnaic tractates at the end of Kodashim continue Meilah's
//! pagination) and `dapim`, the number of study days the tractate
//! contributes. Day index 0 maps to `first_daf` of the first tractate, so
//! no post-hoc page adjustment exists anywhere.

use chrono::NaiveDate;

use crate::calendar::hebrew::{HebrewDate, hebrew_numeral};
use crate::types::DafInfo;
use crate::{ChavrutaError, Result};

/// A tractate in the study cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tractate {
    /// English transliteration, as used on the wire.
    pub name: &'static str,
    /// Hebrew name, for Hebrew page-name rendering.
    pub hebrew_name: &'static str,
    /// First daf studied (2 for almost every tractate).
    pub first_daf: u32,
    /// Number of dapim studied (= study days contributed to the cycle).
    pub dapim: u32,
}

const fn t(name: &'static str, hebrew_name: &'static str, first_daf: u32, dapim: u32) -> Tractate {
    Tractate {
        name,
        hebrew_name,
        first_daf,
        dapim,
    }
}

/// The fixed cycle order. Order is load-bearing: it defines the traversal
/// for page computation.
pub const CYCLE_TABLE: [Tractate; 40] = [
    t("Berachot", "ברכות", 2, 63),
    t("Shabbat", "שבת", 2, 156),
    t("Eruvin", "עירובין", 2, 104),
    t("Pesachim", "פסחים", 2, 120),
    t("Shekalim", "שקלים", 2, 21),
    t("Yoma", "יומא", 2, 87),
    t("Sukkah", "סוכה", 2, 55),
    t("Beitzah", "ביצה", 2, 39),
    t("Rosh Hashanah", "ראש השנה", 2, 34),
    t("Taanit", "תענית", 2, 30),
    t("Megillah", "מגילה", 2, 31),
    t("Moed Katan", "מועד קטן", 2, 28),
    t("Chagigah", "חגיגה", 2, 26),
    t("Yevamot", "יבמות", 2, 121),
    t("Ketubot", "כתובות", 2, 111),
    t("Nedarim", "נדרים", 2, 90),
    t("Nazir", "נזיר", 2, 65),
    t("Sotah", "סוטה", 2, 48),
    t("Gittin", "גיטין", 2, 89),
    t("Kiddushin", "קידושין", 2, 81),
    t("Bava Kamma", "בבא קמא", 2, 118),
    t("Bava Metzia", "בבא מציעא", 2, 118),
    t("Bava Batra", "בבא בתרא", 2, 175),
    t("Sanhedrin", "סנהדרין", 2, 112),
    t("Makkot", "מכות", 2, 23),
    t("Shevuot", "שבועות", 2, 48),
    t("Avodah Zarah", "עבודה זרה", 2, 75),
    t("Horayot", "הוריות", 2, 13),
    t("Zevachim", "זבחים", 2, 119),
    t("Menachot", "מנחות", 2, 109),
    t("Chullin", "חולין", 2, 141),
    t("Bechorot", "בכורות", 2, 60),
    t("Arachin", "ערכין", 2, 33),
    t("Temurah", "תמורה", 2, 33),
    t("Keritot", "כריתות", 2, 27),
    t("Meilah", "מעילה", 2, 21),
    t("Kinnim", "קינים", 23, 3),
    t("Tamid", "תמיד", 26, 8),
    t("Middot", "מידות", 34, 4),
    t("Niddah", "נדה", 2, 72),
];

/// Start of the 14th cycle: 2020-01-05 (8 Tevet 5780), Berachot 2.
pub fn cycle_start() -> NaiveDate {
    // Valid by construction.
    NaiveDate::from_ymd_opt(2020, 1, 5).expect("valid cycle start date")
}

/// Total dapim in one full cycle (2,711).
pub fn total_dapim() -> u32 {
    CYCLE_TABLE.iter().map(|t| t.dapim).sum()
}

/// The tractate and daf studied on the given date.
///
/// Dates before the cycle start are rejected with
/// [`ChavrutaError::InvalidDate`]; dates past the end of the cycle wrap
/// into the next one.
pub fn daf_for_date(date: NaiveDate) -> Result<(&'static Tractate, u32)> {
    let start = cycle_start();
    let elapsed = (date - start).num_days();
    if elapsed < 0 {
        return Err(ChavrutaError::InvalidDate(format!(
            "{date} precedes the cycle start {start}"
        )));
    }
    let mut index = (elapsed % i64::from(total_dapim())) as u32;
    for tractate in CYCLE_TABLE.iter() {
        if index < tractate.dapim {
            return Ok((tractate, tractate.first_daf + index));
        }
        index -= tractate.dapim;
    }
    unreachable!("day index is reduced modulo the table total");
}

/// Full daf info for the given date, with display-ready dates.
pub fn daf_info(date: NaiveDate) -> Result<DafInfo> {
    let (tractate, daf) = daf_for_date(date)?;
    Ok(DafInfo {
        masechet: tractate.name.to_string(),
        daf,
        date: format_english_date(date),
        hebrew_date: HebrewDate::from_gregorian(date).format(),
    })
}

/// Hebrew page name, e.g. `ברכות דף ב׳`.
pub fn page_name_hebrew(tractate: &Tractate, daf: u32) -> String {
    format!("{} דף {}", tractate.hebrew_name, hebrew_numeral(daf))
}

/// Long-form en-US date, e.g. "January 5, 2020".
fn format_english_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.format("%-d"), date.format("%Y"))
}
