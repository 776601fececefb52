//! Canonical calendar months used as sales keys.

use core::str::FromStr;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use smartstock_core::DomainError;

/// One of the twelve canonical month labels ("January" … "December").
///
/// Serialized as its English name so persisted sales maps read
/// `{"March": 90}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based index (January = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Month for a zero-based index, `None` outside `0..12`.
    pub fn from_index(index: usize) -> Option<Month> {
        Self::ALL.get(index).copied()
    }

    /// Month `offset` steps after `self`, wrapping past December.
    pub fn wrapping_add(self, offset: usize) -> Month {
        Self::ALL[(self.index() + offset) % 12]
    }

    /// The current calendar month (UTC).
    pub fn current() -> Month {
        // month0() is always within 0..12.
        Self::ALL[Utc::now().month0() as usize % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl core::fmt::Display for Month {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = DomainError;

    /// Exact, case-sensitive match on the canonical label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| DomainError::invalid_month(s))
    }
}

impl TryFrom<String> for Month {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(value: Month) -> Self {
        value.name().to_string()
    }
}
