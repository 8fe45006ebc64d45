//! Start-up wiring
//!
//! Builds the provider clients once from resolved settings and hands them
//! to the pipeline. Only called after configuration loaded successfully.

use crate::config::Settings;
use crate::errors::Result;
use crate::providers::{OpenAiClient, PineconeClient};
use crate::rag::{AskPipeline, RetrievalParams};
use std::sync::Arc;

/// Connect to both providers and assemble the pipeline
pub async fn build_pipeline(settings: &Settings) -> Result<AskPipeline> {
    let openai = Arc::new(OpenAiClient::new(
        &settings.openai_base_url,
        &settings.openai_api_key,
    )?);

    let pinecone = match &settings.pinecone_index_host {
        Some(host) => PineconeClient::with_host(host, &settings.pinecone_api_key)?,
        None => {
            PineconeClient::connect(
                &settings.pinecone_controller_url,
                &settings.index_name,
                &settings.pinecone_api_key,
            )
            .await?
        }
    };

    tracing::info!(
        index = %settings.index_name,
        namespace = %settings.namespace,
        top_k = settings.top_k,
        embed_model = %settings.embed_model,
        openai = %openai.base_url(),
        pinecone = %pinecone.index_url(),
        "clients ready"
    );

    Ok(AskPipeline::new(
        openai.clone(),
        Arc::new(pinecone),
        openai,
        RetrievalParams::from(settings),
    ))
}
