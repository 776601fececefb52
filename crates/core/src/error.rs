//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures raised at the
/// mutation boundary. Persistence and notification failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Product name was empty or whitespace only.
    #[error("validation failed: product name cannot be empty")]
    EmptyName,

    /// A sales key is not one of the twelve canonical month labels.
    #[error("validation failed: unknown month '{0}'")]
    InvalidMonth(String),

    /// A monthly unit count was negative (or does not fit a unit count).
    #[error("validation failed: quantity for {month} must be non-negative (got {value})")]
    NegativeQuantity { month: String, value: i64 },

    /// Unit price was negative, NaN or infinite.
    #[error("validation failed: unit price must be a finite non-negative number (got {0})")]
    InvalidPrice(String),

    /// Currency code outside the supported set.
    #[error("validation failed: unknown currency code '{0}'")]
    UnknownCurrency(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A conflict occurred (e.g. an identity already present in the catalog).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_month(key: impl Into<String>) -> Self {
        Self::InvalidMonth(key.into())
    }

    pub fn negative_quantity(month: impl Into<String>, value: i64) -> Self {
        Self::NegativeQuantity {
            month: month.into(),
            value,
        }
    }

    pub fn invalid_price(price: f64) -> Self {
        Self::InvalidPrice(price.to_string())
    }

    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency(code.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// True for errors raised while validating caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName
                | Self::InvalidMonth(_)
                | Self::NegativeQuantity { .. }
                | Self::InvalidPrice(_)
                | Self::UnknownCurrency(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_distinguishable() {
        assert!(DomainError::EmptyName.is_validation());
        assert!(DomainError::invalid_month("Smarch").is_validation());
        assert!(DomainError::negative_quantity("May", -3).is_validation());
        assert!(DomainError::invalid_price(-1.0).is_validation());
        assert!(DomainError::unknown_currency("XYZ").is_validation());

        assert!(!DomainError::conflict("dup").is_validation());
        assert!(!DomainError::invalid_id("nope").is_validation());
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = DomainError::negative_quantity("March", -4);
        assert_eq!(
            err.to_string(),
            "validation failed: quantity for March must be non-negative (got -4)"
        );
        assert_eq!(
            DomainError::unknown_currency("BTC").to_string(),
            "validation failed: unknown currency code 'BTC'"
        );
    }
}
