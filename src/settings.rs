//! List Settings - app-level defaults for list views.
//!
//! Loaded from TOML, every key optional:
//!
//! ```toml
//! page_size = 20
//! search_debounce_ms = 300
//! loading_timeout_ms = 30000
//! ```
//!
//! Environment overrides (applied by [`ListSettings::with_env_overrides`]):
//! `SPARK_LIST_PAGE_SIZE`, `SPARK_LIST_SEARCH_DEBOUNCE_MS`,
//! `SPARK_LIST_LOADING_TIMEOUT_MS`.

use std::env;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{ListConfig, DEFAULT_PAGE_SIZE};
use crate::error::{ListError, ListResult};
use crate::state::{DEFAULT_LOADING_TIMEOUT, DEFAULT_SEARCH_DEBOUNCE};

/// Defaults shared by the list views of an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    /// Items per page for new lists.
    pub page_size: usize,
    /// Delay before a typed search query is applied. 0 applies immediately.
    pub search_debounce_ms: u64,
    /// How long a loading flag may stay set before clearing itself.
    pub loading_timeout_ms: u64,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE.as_millis() as u64,
            loading_timeout_ms: DEFAULT_LOADING_TIMEOUT.as_millis() as u64,
        }
    }
}

impl ListSettings {
    /// Load and validate settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ListResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), ?settings, "list settings loaded");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(toml: &str) -> ListResult<Self> {
        let settings: Self = toml::from_str(toml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `SPARK_LIST_*` environment overrides, then validate.
    pub fn with_env_overrides(self) -> ListResult<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name,
    /// then validate. Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> ListResult<Self> {
        if let Some(n) = parse_override::<usize>(&lookup, "SPARK_LIST_PAGE_SIZE") {
            self.page_size = n;
        }
        if let Some(n) = parse_override::<u64>(&lookup, "SPARK_LIST_SEARCH_DEBOUNCE_MS") {
            self.search_debounce_ms = n;
        }
        if let Some(n) = parse_override::<u64>(&lookup, "SPARK_LIST_LOADING_TIMEOUT_MS") {
            self.loading_timeout_ms = n;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check value ranges.
    pub fn validate(&self) -> ListResult<()> {
        if self.page_size == 0 {
            return Err(ListError::InvalidPageSize);
        }
        if self.loading_timeout_ms == 0 {
            return Err(ListError::InvalidDelay { name: "loading_timeout_ms" });
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn loading_timeout(&self) -> Duration {
        Duration::from_millis(self.loading_timeout_ms)
    }

    /// A list config on page 1 using these settings' page size.
    pub fn config<K, F>(&self, filters: F) -> ListConfig<K, F> {
        ListConfig::new(filters).with_page_size(self.page_size)
    }
}

fn parse_override<N: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<N> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable override");
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
