//! Calendar arithmetic for products addressed by year and day-of-year.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Returns the calendar date for a 1-based day-of-year within `year`.
///
/// Pure calendar arithmetic, no timezone semantics. Fails when `doy` does not
/// land inside `year`, e.g. day 366 of a non-leap year.
pub fn date_from_year_doy(year: i32, doy: u32) -> Result<NaiveDate> {
    NaiveDate::from_yo_opt(year, doy).ok_or(Error::InvalidDate { year, doy })
}
