//! Resolved runtime settings

use crate::config::sources::{LayeredConfig, SecretStore};
use crate::errors::{AssistantError, Result};
use std::fmt;
use std::path::Path;

pub const PINECONE_API_KEY: &str = "PINECONE_API_KEY";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const INDEX_NAME: &str = "INDEX_NAME";
pub const NAMESPACE: &str = "NAMESPACE";
pub const EMBED_MODEL: &str = "EMBED_MODEL";
pub const TOP_K: &str = "TOP_K";
pub const PINECONE_INDEX_HOST: &str = "PINECONE_INDEX_HOST";
pub const PINECONE_CONTROLLER_URL: &str = "PINECONE_CONTROLLER_URL";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

pub const DEFAULT_INDEX_NAME: &str = "aquestia";
pub const DEFAULT_NAMESPACE: &str = "v1";
pub const DEFAULT_EMBED_MODEL: &str = "text-embedding-3-large";
pub const DEFAULT_TOP_K: usize = 20;
pub const DEFAULT_PINECONE_CONTROLLER_URL: &str = "https://api.pinecone.io";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Largest result count the vector service accepts per query
pub const MAX_TOP_K: usize = 10_000;

/// Immutable configuration record
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub pinecone_api_key: String,
    pub openai_api_key: String,
    pub index_name: String,
    pub namespace: String,
    pub embed_model: String,
    pub top_k: usize,
    /// Data-plane host of the index; looked up from the controller when unset
    pub pinecone_index_host: Option<String>,
    pub pinecone_controller_url: String,
    pub openai_base_url: String,
}

impl Settings {
    /// Resolve settings from the secrets file (explicit or discovered) and the environment
    pub fn load(secrets_path: Option<&Path>) -> Result<Self> {
        let secrets = SecretStore::discover(secrets_path)?;
        if let Some(path) = secrets.path() {
            tracing::info!(path = %path.display(), "loaded secrets file");
        }
        Self::resolve(&LayeredConfig::standard(secrets))
    }

    /// Resolve every field against a source chain.
    ///
    /// Fails with [`AssistantError::MissingCredentials`] when either API key
    /// is absent, and with [`AssistantError::Config`] when `TOP_K` is unusable.
    pub fn resolve(config: &LayeredConfig) -> Result<Self> {
        let pinecone_api_key = config.lookup(PINECONE_API_KEY);
        let openai_api_key = config.lookup(OPENAI_API_KEY);

        let (pinecone_api_key, openai_api_key) = match (pinecone_api_key, openai_api_key) {
            (Some(pinecone), Some(openai)) => (pinecone, openai),
            (pinecone, openai) => {
                let mut missing = Vec::new();
                if pinecone.is_none() {
                    missing.push(PINECONE_API_KEY);
                }
                if openai.is_none() {
                    missing.push(OPENAI_API_KEY);
                }
                return Err(AssistantError::MissingCredentials { missing });
            }
        };

        let top_k = match config.lookup(TOP_K) {
            Some(raw) => parse_top_k(&raw)?,
            None => DEFAULT_TOP_K,
        };

        Ok(Self {
            pinecone_api_key,
            openai_api_key,
            index_name: config.lookup_or(INDEX_NAME, DEFAULT_INDEX_NAME),
            namespace: config.lookup_or(NAMESPACE, DEFAULT_NAMESPACE),
            embed_model: config.lookup_or(EMBED_MODEL, DEFAULT_EMBED_MODEL),
            top_k,
            pinecone_index_host: config.lookup(PINECONE_INDEX_HOST),
            pinecone_controller_url: config
                .lookup_or(PINECONE_CONTROLLER_URL, DEFAULT_PINECONE_CONTROLLER_URL),
            openai_base_url: config.lookup_or(OPENAI_BASE_URL, DEFAULT_OPENAI_BASE_URL),
        })
    }

    /// Non-secret values shown in the settings panel
    pub fn debug_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Pinecone Index", self.index_name.clone()),
            ("Namespace", self.namespace.clone()),
            ("Top-K", self.top_k.to_string()),
            ("Embedding Model", self.embed_model.clone()),
        ]
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("pinecone_api_key", &"<redacted>")
            .field("openai_api_key", &"<redacted>")
            .field("index_name", &self.index_name)
            .field("namespace", &self.namespace)
            .field("embed_model", &self.embed_model)
            .field("top_k", &self.top_k)
            .field("pinecone_index_host", &self.pinecone_index_host)
            .field("pinecone_controller_url", &self.pinecone_controller_url)
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}

/// Coerce a raw `TOP_K` value to a usable result count.
///
/// Non-numeric and non-positive values are rejected; values above
/// [`MAX_TOP_K`] are clamped.
pub fn parse_top_k(raw: &str) -> Result<usize> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AssistantError::Config(format!("TOP_K must be an integer, got {:?}", raw)))?;

    if value < 1 {
        return Err(AssistantError::Config(format!(
            "TOP_K must be at least 1, got {}",
            value
        )));
    }

    let value = usize::try_from(value).unwrap_or(MAX_TOP_K);
    if value > MAX_TOP_K {
        tracing::warn!(requested = value, max = MAX_TOP_K, "TOP_K clamped to provider limit");
        return Ok(MAX_TOP_K);
    }

    Ok(value)
}
