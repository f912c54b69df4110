//! Axum route handlers for the skill form.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::skills::{SkillField, SkillLevel, UserSkills};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: SkillField,
    pub label: &'static str,
}

/// Everything a front end needs to render the eight selectors.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillFormSchema {
    pub fields: Vec<FieldDescriptor>,
    pub levels: [SkillLevel; 4],
    pub defaults: UserSkills,
}

#[derive(Debug, Deserialize)]
pub struct SkillUpdateRequest {
    pub skills: UserSkills,
    pub field: SkillField,
    pub level: SkillLevel,
}

/// GET /api/v1/skills
pub async fn handle_form_schema() -> Json<SkillFormSchema> {
    Json(SkillFormSchema {
        fields: SkillField::ALL
            .into_iter()
            .map(|id| FieldDescriptor {
                id,
                label: id.label(),
            })
            .collect(),
        levels: SkillLevel::ALL,
        defaults: UserSkills::default(),
    })
}

/// PATCH /api/v1/skills
///
/// Applies a single field edit to the submitted snapshot and returns the new one.
pub async fn handle_update_skill(Json(request): Json<SkillUpdateRequest>) -> Json<UserSkills> {
    Json(request.skills.update(request.field, request.level))
}
