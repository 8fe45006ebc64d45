//! Named lookup sources and the fallback chain over them

use crate::errors::{AssistantError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory holding the secrets file, relative to the working or home directory
pub const SECRETS_DIR: &str = ".pipespec";

/// Secrets file name
pub const SECRETS_FILE: &str = "secrets.toml";

/// A named key/value lookup
pub trait ConfigSource: Send + Sync {
    /// Short label used in logs
    fn name(&self) -> &str;

    /// Raw value for `key`, if this source defines it
    fn get(&self, key: &str) -> Option<String>;
}

/// Flat TOML secrets file (`KEY = "value"` pairs)
#[derive(Debug, Clone, Default)]
pub struct SecretStore {
    path: Option<PathBuf>,
    values: toml::Table,
}

impl SecretStore {
    /// Store with no values
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse secrets from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let values: toml::Table = toml::from_str(contents)
            .map_err(|e| AssistantError::Config(format!("Failed to parse secrets: {}", e)))?;

        Ok(Self { path: None, values })
    }

    /// Load secrets from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AssistantError::Config(format!("Failed to read secrets file {}: {}", path.display(), e))
        })?;

        let mut store = Self::from_toml_str(&contents)?;
        store.path = Some(path.to_path_buf());
        Ok(store)
    }

    /// Find the secrets file.
    ///
    /// An explicit path must exist. Otherwise `./.pipespec/secrets.toml` and
    /// `~/.pipespec/secrets.toml` are tried in that order, and an empty store
    /// is returned when neither exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        for candidate in Self::default_locations() {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "using secrets file");
                return Self::load_from_file(&candidate);
            }
        }

        tracing::debug!("no secrets file found");
        Ok(Self::empty())
    }

    /// Candidate secrets files in lookup order
    pub fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(SECRETS_DIR).join(SECRETS_FILE)];
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(SECRETS_DIR).join(SECRETS_FILE));
        }
        locations
    }

    /// File the values were read from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ConfigSource for SecretStore {
    fn name(&self) -> &str {
        "secrets"
    }

    fn get(&self, key: &str) -> Option<String> {
        match self.values.get(key)? {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Integer(i) => Some(i.to_string()),
            toml::Value::Float(f) => Some(f.to_string()),
            toml::Value::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory values, for overrides and tests
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    name: String,
    values: HashMap<String, String>,
}

impl MapSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Ordered fallback chain; the first source with a non-blank value wins
#[derive(Default)]
pub struct LayeredConfig {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard chain: secrets file, then environment
    pub fn standard(secrets: SecretStore) -> Self {
        Self::new().with_source(secrets).with_source(EnvSource)
    }

    /// Append a lower-priority source
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// First non-blank value for `key`
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.sources.iter().find_map(|source| {
            let value = source.get(key)?;
            if value.trim().is_empty() {
                return None;
            }
            tracing::trace!(key, source = source.name(), "resolved config key");
            Some(value)
        })
    }

    /// Value for `key`, or `default` when no source defines it
    pub fn lookup_or(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }
}
