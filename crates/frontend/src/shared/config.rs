//! Runtime configuration read from the page query string.
//!
//! There is no filesystem in the browser, so the only knobs are URL
//! parameters, e.g. `index.html?log=debug`.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Log level name understood by `log::Level` ("error" .. "trace")
    #[serde(default)]
    pub log: Option<String>,
}

impl AppConfig {
    /// Parses a query string with or without the leading `?`.
    /// Malformed input falls back to defaults.
    pub fn from_query(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|search| Self::from_query(&search))
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> log::Level {
        self.log
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info)
    }
}
