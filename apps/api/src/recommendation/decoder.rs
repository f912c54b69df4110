//! Reply decoder — turns the model's free-text reply into a `SquadRecommendation`.
//!
//! Two stages, tried in order:
//! 1. Structured: the reply is a JSON object with all three fields.
//! 2. Line splitting: the first non-blank line is the primary squad, the next
//!    non-blank line the secondary squad, the rest the explanation. Leading
//!    "Primary Squad:" / "Secondary Squad:" labels are stripped.
//!
//! Each stage reports a tagged `DecodeOutcome`; nothing here panics or indexes
//! past the available lines.

use crate::llm_client::strip_json_fences;
use crate::recommendation::{RecommendationError, SquadRecommendation};

const PRIMARY_LABEL: &str = "Primary Squad:";
const SECONDARY_LABEL: &str = "Secondary Squad:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Decoded(SquadRecommendation),
    DecodeFailed(String),
}

/// Stage 1: parse the reply as a JSON object with the three named fields.
pub fn decode_structured(reply: &str) -> DecodeOutcome {
    match serde_json::from_str::<SquadRecommendation>(strip_json_fences(reply)) {
        Ok(recommendation) => DecodeOutcome::Decoded(recommendation),
        Err(e) => DecodeOutcome::DecodeFailed(format!("not a recommendation object: {e}")),
    }
}

/// Stage 2: positional line splitting.
///
/// Blank lines are skipped when locating the two squad lines, so
/// `"A\n\nB\n\nWhy."` decodes the same as `"A\nB\nWhy."`. Everything after
/// the secondary squad line is the explanation.
pub fn decode_lines(reply: &str) -> DecodeOutcome {
    let lines: Vec<&str> = reply
        .trim()
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();

    let mut squad_lines = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (first, (second_index, second)) = match (squad_lines.next(), squad_lines.next()) {
        (Some((_, first)), Some(second)) => (*first, second),
        _ => {
            return DecodeOutcome::DecodeFailed(format!(
                "reply has {} non-blank line(s), expected at least 2",
                lines.iter().filter(|line| !line.trim().is_empty()).count()
            ))
        }
    };

    let explanation = lines
        .get(second_index + 1..)
        .unwrap_or_default()
        .join("\n");

    DecodeOutcome::Decoded(SquadRecommendation {
        primary_squad: strip_label(first, PRIMARY_LABEL).to_string(),
        secondary_squad: strip_label(second, SECONDARY_LABEL).to_string(),
        explanation: explanation.trim().to_string(),
    })
}

/// Runs both stages. Only a failure of the line-splitting fallback is an error.
pub fn decode_reply(reply: &str) -> Result<SquadRecommendation, RecommendationError> {
    let structured_failure = match decode_structured(reply) {
        DecodeOutcome::Decoded(recommendation) => return Ok(recommendation),
        DecodeOutcome::DecodeFailed(reason) => reason,
    };
    tracing::debug!("Structured decoding failed ({structured_failure}); splitting lines");

    match decode_lines(reply) {
        DecodeOutcome::Decoded(recommendation) => Ok(recommendation),
        DecodeOutcome::DecodeFailed(reason) => {
            Err(RecommendationError::MalformedResponse { reason })
        }
    }
}

/// Removes a leading label (ASCII case-insensitive) and surrounding whitespace.
fn strip_label<'a>(line: &'a str, label: &str) -> &'a str {
    let line = line.trim();
    match line.get(..label.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(label) => line[label.len()..].trim(),
        _ => line,
    }
}
