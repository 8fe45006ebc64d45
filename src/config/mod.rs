//! Configuration for Pipe-Spec Assistant
//!
//! Settings are resolved once at start-up from an ordered chain of sources:
//! the TOML secrets file, then environment variables, then built-in
//! defaults. The result is an immutable [`Settings`] record.

pub mod settings;
pub mod sources;

pub use settings::{Settings, DEFAULT_EMBED_MODEL, DEFAULT_INDEX_NAME, DEFAULT_NAMESPACE, DEFAULT_TOP_K, MAX_TOP_K};
pub use sources::{ConfigSource, EnvSource, LayeredConfig, MapSource, SecretStore};
