pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::recommendation::handlers as recommendation;
use crate::skills::handlers as skills;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skill form
        .route(
            "/api/v1/skills",
            get(skills::handle_form_schema).patch(skills::handle_update_skill),
        )
        // Recommendations
        .route("/api/v1/squads", get(recommendation::handle_list_squads))
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommend),
        )
        .fallback(not_found)
        .with_state(state)
}
