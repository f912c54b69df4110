//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::MODEL;
use crate::recommendation::squads::{catalog, SquadInfo};
use crate::recommendation::{RecommendationError, SquadRecommendation};
use crate::skills::UserSkills;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub model: &'static str,
    #[serde(flatten)]
    pub recommendation: SquadRecommendation,
}

/// POST /api/v1/recommendations
///
/// One skill snapshot in, one recommendation out. Exactly one LLM call per request.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(skills): Json<UserSkills>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let recommender = state
        .recommender
        .as_ref()
        .ok_or_else(RecommendationError::configuration_missing)?;

    let request_id = Uuid::new_v4();
    let recommendation = recommender
        .request_recommendation(&skills)
        .instrument(tracing::info_span!("recommend", %request_id))
        .await?;

    Ok(Json(RecommendationResponse {
        request_id,
        generated_at: Utc::now(),
        model: MODEL,
        recommendation,
    }))
}

/// GET /api/v1/squads
pub async fn handle_list_squads() -> Json<Vec<SquadInfo>> {
    Json(catalog())
}
