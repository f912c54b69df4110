//! Per-session form state: the current snapshot, the last error and the last result.
//!
//! This is the client-side model of one form session. The HTTP API is stateless
//! and only serves the pure `UserSkills::update`; front ends embedding this
//! crate's types drive a `SkillForm` around the recommendation endpoint.

use crate::recommendation::{RecommendationError, SquadRecommendation};
use crate::skills::{SkillField, SkillLevel, UserSkills};

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, Default)]
pub struct SkillForm {
    skills: UserSkills,
    error: Option<String>,
    recommendation: Option<SquadRecommendation>,
    submitting: bool,
}

#[cfg_attr(not(test), allow(dead_code))]
impl SkillForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skills(&self) -> UserSkills {
        self.skills
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn recommendation(&self) -> Option<&SquadRecommendation> {
        self.recommendation.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replaces one rating. Any recorded error is cleared since the user is retrying.
    pub fn update(&mut self, field: SkillField, level: SkillLevel) {
        self.skills = self.skills.update(field, level);
        self.error = None;
    }

    /// Starts a submission and hands out the snapshot to send.
    /// Returns `None` while another submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<UserSkills> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(self.skills)
    }

    /// Records the outcome of the submission started by `begin_submit`.
    ///
    /// A success supersedes the previous recommendation. A failure keeps it and
    /// records the user-facing message.
    pub fn finish_submit(&mut self, result: Result<SquadRecommendation, RecommendationError>) {
        self.submitting = false;
        match result {
            Ok(recommendation) => self.recommendation = Some(recommendation),
            Err(e) => self.error = Some(e.user_message()),
        }
    }
}
