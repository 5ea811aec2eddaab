//! Daf Yomi cycle and Hebrew calendar computation.
//!
//! Pure functions over calendar dates; no I/O. [`cycle`] maps a Gregorian
//! date to the daf studied that day, [`hebrew`] converts to the Hebrew
//! calendar and renders Hebrew numerals.

pub mod cycle;
pub mod hebrew;

pub use cycle::{CYCLE_TABLE, Tractate, cycle_start, daf_for_date, daf_info, total_dapim};
pub use hebrew::{HebrewDate, hebrew_numeral};
