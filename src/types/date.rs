use chrono::NaiveDate;
use derive_more::{Deref, Display, From, Into};

/// Format of an iCalendar DATE value.
pub const DATE_FORMAT: &str = "%Y%m%d";
/// Length of an iCalendar DATE value.
pub const DATE_LEN: usize = 8;

/// Error arising when a DATE value can't be decoded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("expected 8 digits (YYYYMMDD)")]
    NotDigits,
    #[error(transparent)]
    Invalid(#[from] chrono::ParseError),
}

/// A calendar date with day precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref)]
pub struct CalDate(NaiveDate);

impl CalDate {
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse an exact `YYYYMMDD` value.
    pub fn parse(value: &str) -> Result<Self, DateError> {
        // chrono skips spaces and accepts single-digit fields, so check the shape first
        if value.len() != DATE_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::NotDigits);
        }
        Ok(Self(NaiveDate::parse_from_str(value, DATE_FORMAT)?))
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

/// Decode a DATE or DATE-TIME value down to its date.
///
/// Only the first eight characters are looked at, so `20230101T150405Z` yields
/// 2023-01-01. Values shorter than that decode to `None` instead of failing.
pub fn decode_date(value: &str) -> Result<Option<CalDate>, DateError> {
    if value.len() < DATE_LEN {
        return Ok(None);
    }
    // A cut inside a multi-octet character can't be a date either
    let date = value.get(..DATE_LEN).ok_or(DateError::NotDigits)?;
    CalDate::parse(date).map(Some)
}
