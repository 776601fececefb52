//! Closed set of currency codes. Currencies are tags only; nothing converts
//! between them.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use smartstock_core::{DomainError, ValueObject};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Uah,
    Pln,
}

impl ValueObject for Currency {}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Uah,
        Currency::Pln,
    ];

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Uah => "UAH",
            Currency::Pln => "PLN",
        }
    }

    /// Display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Uah => "₴",
            Currency::Pln => "zł",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| DomainError::unknown_currency(s))
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_codes_case_insensitively() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!("uah".parse::<Currency>().unwrap().symbol(), "₴");
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        let err = "BTC".parse::<Currency>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCurrency("BTC".to_string()));
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Gbp).unwrap(), "\"GBP\"");
        let c: Currency = serde_json::from_str("\"PLN\"").unwrap();
        assert_eq!(c, Currency::Pln);
        assert!(serde_json::from_str::<Currency>("\"XYZ\"").is_err());
    }
}
