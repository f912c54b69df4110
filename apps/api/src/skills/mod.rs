//! Skill Form Model — the eight self-reported ratings and the pure field update.

pub mod form;
pub mod handlers;

use serde::{Deserialize, Serialize};

/// Ordinal self-rating. Ordering follows declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];
}

/// Identifier of one of the eight rated skills. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillField {
    PythonLevel,
    DeepLearningFrameworks,
    NumpyLevel,
    MathematicsLevel,
    StatisticsLevel,
    MlExperience,
    ResearchExperience,
    KaggleExperience,
}

impl SkillField {
    /// All fields in form order.
    pub const ALL: [SkillField; 8] = [
        SkillField::PythonLevel,
        SkillField::DeepLearningFrameworks,
        SkillField::NumpyLevel,
        SkillField::MathematicsLevel,
        SkillField::StatisticsLevel,
        SkillField::MlExperience,
        SkillField::ResearchExperience,
        SkillField::KaggleExperience,
    ];

    /// Label shown next to the selector.
    pub fn label(self) -> &'static str {
        match self {
            SkillField::PythonLevel => "Python",
            SkillField::DeepLearningFrameworks => "Pytorch/Tensorflow",
            SkillField::NumpyLevel => "NumPy & Pandas",
            SkillField::MathematicsLevel => "Mathematics",
            SkillField::StatisticsLevel => "Statistics",
            SkillField::MlExperience => "ML Experience",
            SkillField::ResearchExperience => "Research Experience",
            SkillField::KaggleExperience => "Kaggle Experience",
        }
    }
}

/// Complete skill snapshot. Every field is always set; the default is all-Beginner.
///
/// Serializes to the compact camelCase object the model receives as the user message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkills {
    pub python_level: SkillLevel,
    pub deep_learning_frameworks: SkillLevel,
    pub numpy_level: SkillLevel,
    pub mathematics_level: SkillLevel,
    pub statistics_level: SkillLevel,
    pub ml_experience: SkillLevel,
    pub research_experience: SkillLevel,
    pub kaggle_experience: SkillLevel,
}

impl UserSkills {
    pub fn get(&self, field: SkillField) -> SkillLevel {
        match field {
            SkillField::PythonLevel => self.python_level,
            SkillField::DeepLearningFrameworks => self.deep_learning_frameworks,
            SkillField::NumpyLevel => self.numpy_level,
            SkillField::MathematicsLevel => self.mathematics_level,
            SkillField::StatisticsLevel => self.statistics_level,
            SkillField::MlExperience => self.ml_experience,
            SkillField::ResearchExperience => self.research_experience,
            SkillField::KaggleExperience => self.kaggle_experience,
        }
    }

    /// Returns a new snapshot with `field` set to `level`; the other seven fields are copied.
    #[must_use]
    pub fn update(self, field: SkillField, level: SkillLevel) -> Self {
        let mut next = self;
        let slot = match field {
            SkillField::PythonLevel => &mut next.python_level,
            SkillField::DeepLearningFrameworks => &mut next.deep_learning_frameworks,
            SkillField::NumpyLevel => &mut next.numpy_level,
            SkillField::MathematicsLevel => &mut next.mathematics_level,
            SkillField::StatisticsLevel => &mut next.statistics_level,
            SkillField::MlExperience => &mut next.ml_experience,
            SkillField::ResearchExperience => &mut next.research_experience,
            SkillField::KaggleExperience => &mut next.kaggle_experience,
        };
        *slot = level;
        next
    }
}
