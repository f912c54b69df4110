// Prompt text for squad recommendation.

use crate::recommendation::squads::Squad;

const SYSTEM_INTRO: &str = "You are an AI expert system that recommends specialized \
    AI/ML study groups (squads) based on user skills.";

const SYSTEM_TASK: &str = "Analyze the user's skills and provide:
1. Primary squad recommendation (most suitable)
2. Secondary squad recommendation (growth opportunity)
3. Brief explanation of recommendations";

const SYSTEM_FORMAT: &str = "Respond in exactly this layout: the 1st line is the primary \
    squad name, the 2nd line is the secondary squad name, and the 3rd line onward is the \
    explanation. Use the squad names exactly as listed. Do NOT add a preamble such as \
    \"Here is your response\" or \"Based on the user's skills\".";

/// Builds the fixed system instruction, listing every squad with its focus.
pub fn system_prompt() -> String {
    let squads = Squad::ALL
        .iter()
        .enumerate()
        .map(|(i, squad)| format!("{}. {} - {}", i + 1, squad.name(), squad.focus()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{SYSTEM_INTRO}\n\nAvailable squads:\n{squads}\n\n{SYSTEM_TASK}\n\n{SYSTEM_FORMAT}")
}
