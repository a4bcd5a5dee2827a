use crate::error::Result;
use crate::mapping::{category, equipment, muscles, text};
use crate::types::{Exercise, ExerciseSource, MuscleGroup, RawExercise};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, instrument};

/// Outcome of a pipeline run: the mapped library plus skip accounting.
#[derive(Debug, Default)]
pub struct PipelineResult {
    pub fetched: usize,
    pub exercises: Vec<Exercise>,
    pub skipped_category: usize,
    pub skipped_no_muscle: usize,
    pub skipped_duplicate: usize,
}

impl PipelineResult {
    /// Output counts keyed by muscle group, alphabetical by key.
    pub fn by_muscle_group(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for exercise in &self.exercises {
            *counts.entry(exercise.muscle_group.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Output counts keyed by equipment, alphabetical by key.
    pub fn by_equipment(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for exercise in &self.exercises {
            *counts.entry(exercise.equipment.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

pub struct Pipeline;

impl Pipeline {
    /// Fetches the raw dump from the source and runs the full transform.
    /// A fetch failure aborts the run; rejected records never do.
    #[instrument(skip(source), fields(source = source.source_name()))]
    pub async fn run(source: &dyn ExerciseSource) -> Result<PipelineResult> {
        let raw = source.fetch_exercises().await?;
        let result = Self::transform(raw);
        info!(
            "Pipeline finished: {} of {} records accepted",
            result.exercises.len(),
            result.fetched
        );
        Ok(result)
    }

    /// The pure transform: filter by category, dedupe names, classify
    /// muscles, normalize equipment, format text, and sort.
    ///
    /// Records are processed strictly in input order and short-circuit on the
    /// first failing step. A name claims its slot in the dedup set only once
    /// its record is accepted, so a record rejected for unmappable muscles
    /// does not block a later record with the same name.
    pub fn transform(raw: Vec<RawExercise>) -> PipelineResult {
        let mut result = PipelineResult {
            fetched: raw.len(),
            ..Default::default()
        };
        let mut seen_names: HashSet<String> = HashSet::new();

        for record in raw {
            let category = category::normalize_category(record.category.as_deref());
            if !category::is_included_category(&category) {
                result.skipped_category += 1;
                continue;
            }

            // Empty names are silently invalid, not counted in any bucket.
            let name = record.name.unwrap_or_default().trim().to_string();
            if name.is_empty() {
                continue;
            }
            if seen_names.contains(&name) {
                result.skipped_duplicate += 1;
                continue;
            }

            let primary_muscles = record.primary_muscles.unwrap_or_default();
            let Some(group) = muscles::classify(&category, &primary_muscles) else {
                debug!("No muscle mapping for {:?}, skipping", name);
                result.skipped_no_muscle += 1;
                continue;
            };

            seen_names.insert(name.clone());

            let instructions = record.instructions.unwrap_or_default();
            result.exercises.push(Exercise {
                name,
                muscle_group: group,
                is_cardio: group == MuscleGroup::Cardio,
                default_rest_seconds: group.default_rest_seconds(),
                description: text::format_description(&primary_muscles, group),
                instructions: text::format_instructions(&instructions),
                equipment: equipment::normalize(record.equipment.as_deref()),
            });
        }

        // Stable sort: ties keep their original relative order.
        result
            .exercises
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        result
    }

    /// Serializes the sorted library as pretty-printed JSON. serde_json
    /// emits non-ASCII characters literally, as the app expects.
    pub fn to_json(result: &PipelineResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(&result.exercises)?)
    }
}
