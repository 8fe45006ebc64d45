// Integration tests for layered configuration

use pipespec::{
    config::{LayeredConfig, MapSource, SecretStore, Settings},
    AssistantError,
};
use std::fs;
use tempfile::TempDir;

fn write_secrets(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("secrets.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_secrets_file_resolves_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_secrets(
        &dir,
        "PINECONE_API_KEY = \"pc-file\"\nOPENAI_API_KEY = \"sk-file\"\n",
    );

    let store = SecretStore::load_from_file(&path).unwrap();
    let settings = Settings::resolve(&LayeredConfig::new().with_source(store)).unwrap();

    assert_eq!(settings.pinecone_api_key, "pc-file");
    assert_eq!(settings.openai_api_key, "sk-file");
    assert_eq!(settings.index_name, "aquestia");
    assert_eq!(settings.namespace, "v1");
    assert_eq!(settings.embed_model, "text-embedding-3-large");
    assert_eq!(settings.top_k, 20);
}

#[test]
fn test_secrets_win_over_later_sources() {
    let dir = TempDir::new().unwrap();
    let path = write_secrets(
        &dir,
        "PINECONE_API_KEY = \"pc-file\"\nOPENAI_API_KEY = \"sk-file\"\nTOP_K = 7\n",
    );

    let config = LayeredConfig::new()
        .with_source(SecretStore::load_from_file(&path).unwrap())
        .with_source(
            MapSource::new("env")
                .with("OPENAI_API_KEY", "sk-env")
                .with("TOP_K", "3")
                .with("NAMESPACE", "v2"),
        );
    let settings = Settings::resolve(&config).unwrap();

    assert_eq!(settings.openai_api_key, "sk-file");
    assert_eq!(settings.top_k, 7);
    assert_eq!(settings.namespace, "v2");
}

#[test]
fn test_missing_keys_fail_before_any_client() {
    let dir = TempDir::new().unwrap();
    let path = write_secrets(&dir, "INDEX_NAME = \"other\"\n");

    let store = SecretStore::load_from_file(&path).unwrap();
    let err = Settings::resolve(&LayeredConfig::new().with_source(store)).unwrap_err();

    assert!(err.is_fatal());
    match err {
        AssistantError::MissingCredentials { missing } => {
            assert_eq!(missing, vec!["PINECONE_API_KEY", "OPENAI_API_KEY"]);
        }
        other => panic!("expected missing credentials, got {:?}", other),
    }
}

#[test]
fn test_malformed_secrets_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_secrets(&dir, "PINECONE_API_KEY = \n");

    let err = SecretStore::load_from_file(&path).unwrap_err();
    assert!(matches!(err, AssistantError::Config(_)));
}

#[test]
fn test_unusable_top_k_is_fatal() {
    let config = LayeredConfig::new().with_source(
        MapSource::new("env")
            .with("PINECONE_API_KEY", "pc")
            .with("OPENAI_API_KEY", "sk")
            .with("TOP_K", "twenty"),
    );

    let err = Settings::resolve(&config).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_debug_output_hides_keys() {
    let config = LayeredConfig::new().with_source(
        MapSource::new("env")
            .with("PINECONE_API_KEY", "pc-very-secret")
            .with("OPENAI_API_KEY", "sk-very-secret"),
    );
    let settings = Settings::resolve(&config).unwrap();

    let rendered = format!("{:?}", settings);
    assert!(!rendered.contains("very-secret"));
    for (_, value) in settings.debug_fields() {
        assert!(!value.contains("very-secret"));
    }
}
