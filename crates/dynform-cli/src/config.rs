use anyhow::Result;
use dynform::Lists;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Configuration for dynform CLI operations, read from `dynform.toml`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where records and templates are stored
    pub store: StoreConfig,

    /// Which lists hold host items, records and templates
    pub lists: Lists,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// `memory:` or a `sqlite:` URL
    pub url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:dynform.db".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the store URL
    pub fn store_url(mut self, url: impl Into<String>) -> Self {
        self.store.url = url.into();
        self
    }

    /// Set the list names
    pub fn lists(mut self, lists: Lists) -> Self {
        self.lists = lists;
        self
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        contents.parse()
    }

    /// Loads the configuration, or returns the defaults if the file does not
    /// exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
