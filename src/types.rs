use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw exercise record as returned by an external exercise database.
///
/// No field is guaranteed to be present or non-null; unrecognized fields
/// in the dump (`force`, `level`, `mechanic`, `images`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExercise {
    pub name: Option<String>,
    pub category: Option<String>,
    pub equipment: Option<String>,
    pub primary_muscles: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
}

/// Coarse body-region classification used by the app for workout organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Core,
    Shoulders,
    Back,
    Arms,
    Legs,
    Cardio,
}

impl MuscleGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Core => "core",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Back => "back",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Cardio => "cardio",
        }
    }

    /// Default rest between sets. Cardio and core work recovers faster than
    /// the strength groups.
    pub fn default_rest_seconds(&self) -> u32 {
        match self {
            MuscleGroup::Cardio | MuscleGroup::Core => 60,
            _ => 90,
        }
    }
}

/// Normalized exercise apparatus. Unrecognized equipment strings collapse
/// into `Other` rather than passing through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Cable,
    Machine,
    Bodyweight,
    Kettlebell,
    Bands,
    Other,
}

impl Equipment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Barbell => "barbell",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Cable => "cable",
            Equipment::Machine => "machine",
            Equipment::Bodyweight => "bodyweight",
            Equipment::Kettlebell => "kettlebell",
            Equipment::Bands => "bands",
            Equipment::Other => "other",
        }
    }
}

/// One entry of the app's exercise library, ready for serialization.
/// Constructed once per accepted raw record and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub is_cardio: bool,
    pub default_rest_seconds: u32,
    pub description: String,
    pub instructions: String,
    pub equipment: Equipment,
}

/// Core trait that all exercise data sources must implement
#[async_trait::async_trait]
pub trait ExerciseSource: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Fetch all raw exercise records from this data source
    async fn fetch_exercises(&self) -> Result<Vec<RawExercise>>;
}
