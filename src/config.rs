//! Runtime settings read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present;
//! variables already set in the environment win over it.

use std::path::{Path, PathBuf};

/// Variable naming the store directory.
pub const STORE_ENV: &str = "STOCKROOM_STORE";

/// Variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "STOCKROOM_LOG";

/// Store directory used when [`STORE_ENV`] is unset.
pub const DEFAULT_STORE: &str = ".stockroom";

/// Filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LOG: &str = "warn";

/// Settings for one run of the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding `inventory.yaml`.
    pub store_root: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { store_root: PathBuf::from(DEFAULT_STORE), log_filter: DEFAULT_LOG.to_string() }
    }
}

impl Settings {
    /// Reads settings from `.env` and the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        // A missing .env is the common case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from a variable lookup; blank values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            store_root: get(STORE_ENV).map_or(defaults.store_root, PathBuf::from),
            log_filter: get(LOG_ENV).unwrap_or(defaults.log_filter),
        }
    }

    /// Replaces the store directory when `store` is given.
    #[must_use]
    pub fn with_store(mut self, store: Option<&Path>) -> Self {
        if let Some(store) = store {
            self.store_root = store.to_path_buf();
        }
        self
    }
}
