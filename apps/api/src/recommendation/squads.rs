//! The six peer-learning squads a user can be placed in.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Squad {
    AiBeginners,
    MachineLearningEnthusiasts,
    KaggleWarriors,
    ResearchAndPublications,
    GenerativeAiInnovators,
    DeepLearningExperts,
}

impl Squad {
    pub const ALL: [Squad; 6] = [
        Squad::AiBeginners,
        Squad::MachineLearningEnthusiasts,
        Squad::KaggleWarriors,
        Squad::ResearchAndPublications,
        Squad::GenerativeAiInnovators,
        Squad::DeepLearningExperts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Squad::AiBeginners => "AI Beginners",
            Squad::MachineLearningEnthusiasts => "Machine Learning Enthusiasts",
            Squad::KaggleWarriors => "Kaggle Warriors",
            Squad::ResearchAndPublications => "Research & Publications",
            Squad::GenerativeAiInnovators => "Generative AI Innovators",
            Squad::DeepLearningExperts => "Deep Learning Experts",
        }
    }

    pub fn focus(self) -> &'static str {
        match self {
            Squad::AiBeginners => "Focus on Python basics and AI/ML foundations",
            Squad::MachineLearningEnthusiasts => "Implementing ML algorithms and applications",
            Squad::KaggleWarriors => "Participating in Kaggle competitions",
            Squad::ResearchAndPublications => "Academic research and paper writing",
            Squad::GenerativeAiInnovators => "Working with LLMs, RAG, and modern AI",
            Squad::DeepLearningExperts => "Computer vision, NLP, and deep learning",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SquadInfo {
    pub name: &'static str,
    pub focus: &'static str,
}

pub fn catalog() -> Vec<SquadInfo> {
    Squad::ALL
        .into_iter()
        .map(|squad| SquadInfo {
            name: squad.name(),
            focus: squad.focus(),
        })
        .collect()
}
