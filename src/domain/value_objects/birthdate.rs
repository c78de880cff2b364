//! Birthdate input format.
//!
//! Clients submit birthdates as `dd.mm.yyyy` (for example `25.12.1990`).
//! Both separators are mandatory, day and month are always two digits and the
//! year is always four digits. The text must also name a real calendar day,
//! so `31.02.2020` is rejected even though it matches the pattern.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// A birthdate parsed from the `dd.mm.yyyy` input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Birthdate(NaiveDate);

/// Why a birthdate string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BirthdateError {
    #[error("Invalid date format. Please use \"dd.mm.yyyy\" format.")]
    Format,

    #[error("{0} is not a valid calendar date")]
    NotACalendarDate(String),
}

impl Birthdate {
    /// Parse `dd.mm.yyyy`.
    pub fn parse(input: &str) -> Result<Self, BirthdateError> {
        let bytes = input.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
            return Err(BirthdateError::Format);
        }

        let digits_only = bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2 && *i != 5)
            .all(|(_, b)| b.is_ascii_digit());
        if !digits_only {
            return Err(BirthdateError::Format);
        }

        // All slices are ASCII digits at this point
        let day: u32 = input[0..2].parse().map_err(|_| BirthdateError::Format)?;
        let month: u32 = input[3..5].parse().map_err(|_| BirthdateError::Format)?;
        let year: i32 = input[6..10].parse().map_err(|_| BirthdateError::Format)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| BirthdateError::NotACalendarDate(input.to_string()))
    }
}

impl FromStr for Birthdate {
    type Err = BirthdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Birthdate> for NaiveDate {
    fn from(birthdate: Birthdate) -> Self {
        birthdate.0
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}.{:02}.{:04}",
            self.0.day(),
            self.0.month(),
            self.0.year()
        )
    }
}
