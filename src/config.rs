//! Table Configuration
//!
//! Loaded from a TOML file. A missing or blank file yields the defaults.
//!
//! ```toml
//! page_size = 10
//! page_size_options = [5, 10, 25, 100]
//! filter_debounce_ms = 150
//! ```

use crate::error::{Error, Result};
use crate::state::{DEFAULT_DEBOUNCE, Paginator};
use crate::table::{DEFAULT_PAGE_SIZE, PageState};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info, warn};

const CONFIG_FILE_NAME: &str = "table-source.toml";

/// Table defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page on first render
    pub page_size: usize,
    /// Page sizes offered by the paginator
    pub page_size_options: Vec<usize>,
    /// Quiet period before a typed filter is applied
    pub filter_debounce_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![5, 10, 25, 100],
            filter_debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl TableConfig {
    /// Platform config location, e.g. `~/.config/table-source/table-source.toml`
    pub fn default_path() -> Result<PathBuf> {
        let Some(project_dirs) = ProjectDirs::from("", "", "table-source") else {
            return Err(Error::Invalid {
                message: "Could not determine project directories".to_string(),
            });
        };
        Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        Self::from_toml_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to load config file");
            e
        })
    }

    /// Load from `path`, or from the platform location when `path` is `None`.
    ///
    /// Without a resolvable platform location the defaults are used.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_optional(Self::default_path().ok()),
        }
    }

    fn load_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                warn!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(value)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Invalid {
                message: "page_size must be at least 1".to_string(),
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(Error::Invalid {
                message: "page_size_options must not contain 0".to_string(),
            });
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }

    /// Paginator starting on the first page with the configured sizes
    pub fn paginator(&self) -> Paginator {
        Paginator::new(PageState::new(0, self.page_size))
            .with_page_size_options(self.page_size_options.iter().copied())
    }
}
