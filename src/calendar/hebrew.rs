//! Hebrew calendar conversion and Hebrew-numeral rendering.
//!
//! Implements the standard arithmetic Hebrew calendar (molad-based month
//! count plus the four postponement rules) over Rata Die day numbers, which
//! is what chrono's `num_days_from_ce` already provides. Conversion is pure
//! integer arithmetic; no lookup data beyond month names.
//!
//! Numerals follow the conventional rules: geresh after a single letter,
//! gershayim before the last letter of a multi-letter numeral, and the
//! ט״ו/ט״ז substitutions for 15 and 16.

use chrono::{Datelike, NaiveDate};

/// Rata Die day number of 1 Tishrei, AM 1.
const HEBREW_EPOCH_RD: i64 = -1_373_428;

/// A date in the Hebrew calendar.
///
/// Months are numbered 1 = Nisan through 7 = Tishrei and onward to
/// 12 = Adar (13 = Adar II in leap years), so month numbers stay stable
/// across leap years even though the civil year begins in Tishrei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

/// Whether the given Hebrew year is a leap year (13 months).
pub fn is_leap_year(year: i64) -> bool {
    (7 * year + 1).rem_euclid(19) < 7
}

/// Days from the epoch to the molad-determined (and postponed) start of
/// the given Hebrew year.
fn calendar_elapsed_days(year: i64) -> i64 {
    let months_elapsed =
        235 * ((year - 1) / 19) + 12 * ((year - 1) % 19) + (7 * ((year - 1) % 19) + 1) / 19;
    let parts_elapsed = 204 + 793 * (months_elapsed % 1080);
    let hours_elapsed =
        5 + 12 * months_elapsed + 793 * (months_elapsed / 1080) + parts_elapsed / 1080;
    let mut day = 1 + 29 * months_elapsed + hours_elapsed / 24;
    let parts = 1080 * (hours_elapsed % 24) + parts_elapsed % 1080;

    // Molad postponements: old molad, and the Tuesday/Monday limits for
    // common years following leap years.
    if parts >= 19440
        || (day.rem_euclid(7) == 2 && parts >= 9924 && !is_leap_year(year))
        || (day.rem_euclid(7) == 1 && parts >= 16789 && is_leap_year(year - 1))
    {
        day += 1;
    }
    // Rosh Hashanah may not fall on Sunday, Wednesday, or Friday.
    if matches!(day.rem_euclid(7), 0 | 3 | 5) {
        day += 1;
    }
    day
}

/// Rata Die day of 1 Tishrei of the given Hebrew year.
fn new_year_rd(year: i64) -> i64 {
    HEBREW_EPOCH_RD + calendar_elapsed_days(year)
}

fn days_in_year(year: i64) -> i64 {
    new_year_rd(year + 1) - new_year_rd(year)
}

fn long_cheshvan(year: i64) -> bool {
    days_in_year(year) % 10 == 5
}

fn short_kislev(year: i64) -> bool {
    days_in_year(year) % 10 == 3
}

fn last_month(year: i64) -> u32 {
    if is_leap_year(year) { 13 } else { 12 }
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 | 4 | 6 | 10 | 13 => 29,
        12 if !is_leap_year(year) => 29,
        8 if !long_cheshvan(year) => 29,
        9 if short_kislev(year) => 29,
        _ => 30,
    }
}

fn to_rd(date: HebrewDate) -> i64 {
    let mut rd = new_year_rd(date.year) + i64::from(date.day) - 1;
    if date.month < 7 {
        // Months after Tishrei up to the end of the year, then Nisan onward.
        for m in 7..=last_month(date.year) {
            rd += i64::from(days_in_month(date.year, m));
        }
        for m in 1..date.month {
            rd += i64::from(days_in_month(date.year, m));
        }
    } else {
        for m in 7..date.month {
            rd += i64::from(days_in_month(date.year, m));
        }
    }
    rd
}

fn from_rd(rd: i64) -> HebrewDate {
    // Underestimate the year, then walk forward.
    let mut year = (rd - HEBREW_EPOCH_RD) * 98496 / 35_975_351;
    while new_year_rd(year + 1) <= rd {
        year += 1;
    }
    let start = if rd < to_rd(HebrewDate { year, month: 1, day: 1 }) {
        7
    } else {
        1
    };
    let mut month = start;
    loop {
        let month_end = to_rd(HebrewDate {
            year,
            month,
            day: days_in_month(year, month),
        });
        if rd <= month_end {
            break;
        }
        month += 1;
    }
    let day = (rd
        - to_rd(HebrewDate {
            year,
            month,
            day: 1,
        })
        + 1) as u32;
    HebrewDate { year, month, day }
}

impl HebrewDate {
    /// Convert a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        from_rd(i64::from(date.num_days_from_ce()))
    }

    /// Hebrew month name.
    pub fn month_name(&self) -> &'static str {
        match self.month {
            1 => "ניסן",
            2 => "אייר",
            3 => "סיון",
            4 => "תמוז",
            5 => "אב",
            6 => "אלול",
            7 => "תשרי",
            8 => "חשון",
            9 => "כסלו",
            10 => "טבת",
            11 => "שבט",
            12 if is_leap_year(self.year) => "אדר א׳",
            12 => "אדר",
            _ => "אדר ב׳",
        }
    }

    /// Render as a display string, e.g. `ח׳ טבת תש״פ` for 8 Tevet 5780.
    pub fn format(&self) -> String {
        format!(
            "{} {} {}",
            hebrew_numeral(self.day),
            self.month_name(),
            // Thousands are conventionally dropped from year numerals.
            hebrew_numeral((self.year % 1000) as u32),
        )
    }
}

/// Render a number (1..=999) with Hebrew letters, geresh/gershayim
/// punctuation, and the ט״ו/ט״ז substitutions.
pub fn hebrew_numeral(mut n: u32) -> String {
    debug_assert!(n >= 1 && n <= 999);
    const UNITS: [&str; 9] = ["א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
    const TENS: [&str; 9] = ["י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
    const HUNDREDS: [&str; 4] = ["ק", "ר", "ש", "ת"];

    let mut letters: Vec<&str> = Vec::new();
    while n >= 100 {
        let h = (n / 100).min(4) as usize;
        letters.push(HUNDREDS[h - 1]);
        n -= (h as u32) * 100;
    }
    // 15 and 16 would spell fragments of the divine name.
    if n == 15 {
        letters.extend(["ט", "ו"]);
    } else if n == 16 {
        letters.extend(["ט", "ז"]);
    } else {
        if n >= 10 {
            letters.push(TENS[(n / 10 - 1) as usize]);
            n %= 10;
        }
        if n > 0 {
            letters.push(UNITS[(n - 1) as usize]);
        }
    }

    match letters.len() {
        1 => format!("{}׳", letters[0]),
        len => {
            let mut out = String::new();
            for (i, l) in letters.iter().enumerate() {
                if i == len - 1 {
                    out.push('״');
                }
                out.push_str(l);
            }
            out
        }
    }
}
