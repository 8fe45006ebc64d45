//! Pinecone vector index client
//!
//! - Control plane: GET {controller}/indexes/{name} to find the index host
//! - Data plane: POST https://{host}/query

use crate::errors::{AssistantError, Result};
use crate::providers::VectorSearch;
use crate::types::{EmbeddingVector, RetrievedMatch};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request timeout (60 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// API version header sent with every request
const API_VERSION: &str = "2024-07";

/// Client bound to a single index
#[derive(Debug, Clone)]
pub struct PineconeClient {
    client: Client,
    api_key: String,
    index_url: String,
}

impl PineconeClient {
    /// Bind to an index whose data-plane host is already known
    pub fn with_host(host: &str, api_key: &str) -> Result<Self> {
        Ok(Self {
            client: Self::build_http_client()?,
            api_key: api_key.to_string(),
            index_url: normalize_host(host),
        })
    }

    /// Look up the index host through the control plane, then bind to it
    pub async fn connect(controller_url: &str, index_name: &str, api_key: &str) -> Result<Self> {
        let client = Self::build_http_client()?;
        let url = format!("{}/indexes/{}", controller_url.trim_end_matches('/'), index_name);

        let response = client
            .get(&url)
            .header("Api-Key", api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .send()
            .await
            .map_err(|e| AssistantError::Search(format!("Failed to describe index: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::Search(format!(
                "Index {} lookup failed: HTTP {}: {}",
                index_name, status, error_text
            )));
        }

        let description: IndexDescription = response
            .json()
            .await
            .map_err(|e| AssistantError::Search(format!("Failed to parse index description: {}", e)))?;

        tracing::debug!(index = index_name, host = %description.host, "resolved index host");

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            index_url: normalize_host(&description.host),
        })
    }

    /// Base URL of the bound index
    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    fn build_http_client() -> Result<Client> {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AssistantError::Http)
    }
}

#[async_trait]
impl VectorSearch for PineconeClient {
    async fn search(
        &self,
        vector: &EmbeddingVector,
        top_k: usize,
        namespace: &str,
    ) -> Result<Vec<RetrievedMatch>> {
        let url = format!("{}/query", self.index_url);
        let request = QueryRequest {
            vector,
            top_k,
            namespace,
            include_metadata: true,
        };

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Search(format!("Failed to send query: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::Search(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(AssistantError::Search(format!("HTTP {}: {}", status, body)));
        }

        parse_query_response(&body)
    }
}

/// Index description returned by the control plane
#[derive(Debug, Deserialize)]
struct IndexDescription {
    host: String,
}

/// Query request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    vector: &'a [f32],
    top_k: usize,
    namespace: &'a str,
    include_metadata: bool,
}

/// Query response
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<RetrievedMatch>,
}

fn parse_query_response(body: &str) -> Result<Vec<RetrievedMatch>> {
    let response: QueryResponse = serde_json::from_str(body)
        .map_err(|e| AssistantError::Search(format!("Failed to parse response: {}", e)))?;
    Ok(response.matches)
}

fn normalize_host(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}
