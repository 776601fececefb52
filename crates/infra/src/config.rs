//! Environment-driven runtime configuration.

use std::path::PathBuf;
use std::str::FromStr;

use smartstock_analytics::SeriesWindow;

pub const STORE_PATH_VAR: &str = "SMARTSTOCK_STORE_PATH";
pub const RECENT_LIMIT_VAR: &str = "SMARTSTOCK_RECENT_LIMIT";
pub const SEED_DEMO_VAR: &str = "SMARTSTOCK_SEED_DEMO";
pub const WINDOW_VAR: &str = "SMARTSTOCK_WINDOW";

const DEFAULT_STORE_PATH: &str = "smartstock-store.json";
const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SmartStockConfig {
    /// JSON file backing the key-value store.
    pub store_path: PathBuf,
    /// How many recently added products the dashboard lists.
    pub recent_limit: usize,
    /// Insert demo products on first launch.
    pub seed_demo: bool,
    /// Sales-performance chart window.
    pub window: SeriesWindow,
}

impl Default for SmartStockConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            recent_limit: DEFAULT_RECENT_LIMIT,
            seed_demo: true,
            window: SeriesWindow::default(),
        }
    }
}

impl SmartStockConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values are
    /// logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let store_path = lookup(STORE_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);

        let recent_limit = parse_or(&lookup, RECENT_LIMIT_VAR, defaults.recent_limit);
        let seed_demo = parse_or(&lookup, SEED_DEMO_VAR, defaults.seed_demo);

        let window = match lookup(WINDOW_VAR) {
            None => defaults.window,
            Some(raw) => match raw.trim().parse::<u32>().ok().map(SeriesWindow::try_from) {
                Some(Ok(window)) => window,
                _ => {
                    tracing::warn!(var = WINDOW_VAR, value = %raw, "invalid chart window; using default");
                    defaults.window
                }
            },
        };

        Self {
            store_path,
            recent_limit,
            seed_demo,
            window,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: T) -> T
where
    T: FromStr,
{
    match lookup(var) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(var, value = %raw, "invalid config value; using default");
            default
        }),
    }
}
