//! Sparse month → units table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use smartstock_core::{DomainError, DomainResult, ValueObject};

use crate::month::Month;

/// Units sold per canonical month.
///
/// The table is **sparse**: an absent month is "no data", which matters for
/// averaging (only present months count) but sums as zero everywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySales(BTreeMap<Month, u64>);

impl ValueObject for MonthlySales {}

impl MonthlySales {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw caller input (string keys, signed counts).
    ///
    /// Rejects keys outside the twelve canonical labels and negative counts.
    pub fn from_raw<'a, I>(raw: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a i64)>,
    {
        let mut sales = BTreeMap::new();
        for (key, &value) in raw {
            let month: Month = key.parse()?;
            let units =
                u64::try_from(value).map_err(|_| DomainError::negative_quantity(key.as_str(), value))?;
            sales.insert(month, units);
        }
        Ok(Self(sales))
    }

    /// Units recorded for `month`, `None` when the month has no entry.
    pub fn get(&self, month: Month) -> Option<u64> {
        self.0.get(&month).copied()
    }

    /// Units for `month`, treating a missing entry as zero.
    pub fn units_or_zero(&self, month: Month) -> u64 {
        self.get(month).unwrap_or(0)
    }

    pub fn set(&mut self, month: Month, units: u64) {
        self.0.insert(month, units);
    }

    pub fn remove(&mut self, month: Month) -> Option<u64> {
        self.0.remove(&month)
    }

    /// Total units over every present month (T).
    pub fn total(&self) -> u64 {
        self.0.values().fold(0, |acc, &u| acc.saturating_add(u))
    }

    /// Number of months that carry an entry (zero-valued entries count).
    pub fn present_months(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, u64)> + '_ {
        self.0.iter().map(|(m, u)| (*m, *u))
    }

    /// Raw form (month name → signed count), as persisted.
    ///
    /// Counts beyond `i64::MAX` saturate.
    pub fn to_raw(&self) -> BTreeMap<String, i64> {
        self.0
            .iter()
            .map(|(m, u)| (m.name().to_string(), i64::try_from(*u).unwrap_or(i64::MAX)))
            .collect()
    }
}

impl FromIterator<(Month, u64)> for MonthlySales {
    fn from_iter<T: IntoIterator<Item = (Month, u64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
