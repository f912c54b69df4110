// Squad recommendation: prompt construction, one LLM round trip, two-stage decoding.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod decoder;
pub mod handlers;
pub mod prompts;
pub mod recommender;
pub mod squads;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::API_KEY_VAR;
use crate::llm_client::LlmError;

pub use recommender::Recommender;

/// The three display fields produced by a successful recommendation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadRecommendation {
    #[serde(alias = "primary_squad")]
    pub primary_squad: String,
    #[serde(alias = "secondary_squad")]
    pub secondary_squad: String,
    pub explanation: String,
}

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Configuration missing: {var} is not set")]
    ConfigurationMissing { var: &'static str },

    #[error("Recommendation service call failed: {0}")]
    RemoteCallFailed(#[source] LlmError),

    #[error("Malformed recommendation reply: {reason}")]
    MalformedResponse { reason: String },
}

impl RecommendationError {
    pub fn configuration_missing() -> Self {
        RecommendationError::ConfigurationMissing { var: API_KEY_VAR }
    }

    /// Message safe to show to the end user. Causes stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            RecommendationError::ConfigurationMissing { var } => format!(
                "Groq API key is not configured. Please add your {var} to the .env file."
            ),
            RecommendationError::RemoteCallFailed(_) => {
                "Failed to get recommendations. Please try again.".to_string()
            }
            RecommendationError::MalformedResponse { .. } => {
                "The recommendation could not be read. Please try again.".to_string()
            }
        }
    }
}
