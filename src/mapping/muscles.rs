use crate::types::MuscleGroup;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Maps Free Exercise DB `primaryMuscles` values to the app's muscle groups.
static MUSCLE_GROUPS: Lazy<HashMap<&'static str, MuscleGroup>> = Lazy::new(|| {
    HashMap::from([
        ("chest", MuscleGroup::Chest),
        ("abdominals", MuscleGroup::Core),
        ("abs", MuscleGroup::Core),
        ("core", MuscleGroup::Core),
        ("shoulders", MuscleGroup::Shoulders),
        ("traps", MuscleGroup::Back),
        ("lats", MuscleGroup::Back),
        ("middle back", MuscleGroup::Back),
        ("lower back", MuscleGroup::Back),
        ("upper back", MuscleGroup::Back),
        ("back", MuscleGroup::Back),
        ("triceps", MuscleGroup::Arms),
        ("biceps", MuscleGroup::Arms),
        ("forearms", MuscleGroup::Arms),
        ("quadriceps", MuscleGroup::Legs),
        ("hamstrings", MuscleGroup::Legs),
        ("calves", MuscleGroup::Legs),
        ("glutes", MuscleGroup::Legs),
        ("legs", MuscleGroup::Legs),
        ("hip flexors", MuscleGroup::Legs),
        ("adductors", MuscleGroup::Legs),
        ("abductors", MuscleGroup::Legs),
    ])
});

/// Picks the muscle group for an exercise.
///
/// Cardio exercises are grouped as cardio regardless of the muscles they
/// work. Otherwise the first muscle in the list with a known mapping wins;
/// unmapped entries are passed over. Returns `None` when nothing maps, which
/// the caller treats as a skip, not an error.
pub fn classify(category: &str, primary_muscles: &[String]) -> Option<MuscleGroup> {
    if category == "cardio" {
        return Some(MuscleGroup::Cardio);
    }
    primary_muscles
        .iter()
        .find_map(|muscle| MUSCLE_GROUPS.get(muscle.trim().to_lowercase().as_str()).copied())
}
