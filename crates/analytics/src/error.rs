use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("invalid window: {0} months (expected 1, 3, 6 or 12)")]
    InvalidWindow(u32),

    #[error("invalid month index: {0} (expected 0..=11)")]
    InvalidMonthIndex(usize),
}
