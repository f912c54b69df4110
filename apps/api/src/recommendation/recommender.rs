//! Recommender — one skill snapshot in, one squad recommendation out.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::llm_client::{ChatModel, ChatRequest, LlmClient, LlmError};
use crate::recommendation::decoder::decode_reply;
use crate::recommendation::prompts::system_prompt;
use crate::recommendation::{RecommendationError, SquadRecommendation};
use crate::skills::UserSkills;

/// Stateless recommendation client. Cheap to clone; every call is independent.
#[derive(Clone)]
pub struct Recommender {
    model: Arc<dyn ChatModel>,
}

impl Recommender {
    /// Builds the production recommender backed by Groq.
    ///
    /// This is the only place a missing API key is detected. Without a key no
    /// HTTP client is created, so no network call can follow.
    pub fn from_config(config: &Config) -> Result<Self, RecommendationError> {
        let api_key = config
            .api_key()
            .ok_or_else(RecommendationError::configuration_missing)?;
        let client = LlmClient::new(api_key, config.groq_base_url.clone());
        Ok(Self::with_model(Arc::new(client)))
    }

    pub fn with_model(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Sends the snapshot to the model once and decodes the reply.
    pub async fn request_recommendation(
        &self,
        skills: &UserSkills,
    ) -> Result<SquadRecommendation, RecommendationError> {
        let request = build_request(skills).map_err(RecommendationError::RemoteCallFailed)?;

        info!("Requesting squad recommendation");
        let reply = self.model.complete(&request).await.map_err(|e| match e {
            LlmError::EmptyContent => {
                warn!("Recommendation call returned no text");
                RecommendationError::MalformedResponse {
                    reason: "reply was empty".to_string(),
                }
            }
            e => {
                warn!("Recommendation call failed: {e}");
                RecommendationError::RemoteCallFailed(e)
            }
        })?;

        let recommendation = decode_reply(&reply).map_err(|e| {
            warn!("Could not decode recommendation reply: {e}");
            e
        })?;

        info!(
            primary = %recommendation.primary_squad,
            secondary = %recommendation.secondary_squad,
            "Squad recommendation decoded"
        );
        Ok(recommendation)
    }
}

/// System instruction plus the snapshot as compact JSON.
pub fn build_request(skills: &UserSkills) -> Result<ChatRequest, LlmError> {
    let snapshot = serde_json::to_string(skills)?;
    Ok(ChatRequest::new(system_prompt(), snapshot))
}
