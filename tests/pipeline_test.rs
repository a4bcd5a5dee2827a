use exercise_prep::pipeline::Pipeline;
use exercise_prep::types::{Equipment, MuscleGroup, RawExercise};
use pretty_assertions::assert_eq;

fn raw(name: &str, category: &str, muscles: &[&str], equipment: &str) -> RawExercise {
    RawExercise {
        name: Some(name.to_string()),
        category: Some(category.to_string()),
        equipment: Some(equipment.to_string()),
        primary_muscles: Some(muscles.iter().map(|m| m.to_string()).collect()),
        instructions: None,
    }
}

#[test]
fn strength_record_maps_to_its_muscle_group() {
    let result = Pipeline::transform(vec![raw("Bench Press", "strength", &["chest"], "Barbell")]);

    assert_eq!(result.exercises.len(), 1);
    let exercise = &result.exercises[0];
    assert_eq!(exercise.muscle_group, MuscleGroup::Chest);
    assert_eq!(exercise.equipment, Equipment::Barbell);
    assert_eq!(exercise.default_rest_seconds, 90);
    assert!(!exercise.is_cardio);
}

#[test]
fn cardio_category_forces_cardio_group() {
    let result = Pipeline::transform(vec![raw("Hill Sprints", "cardio", &["quadriceps"], "")]);

    let exercise = &result.exercises[0];
    assert_eq!(exercise.muscle_group, MuscleGroup::Cardio);
    assert_eq!(exercise.default_rest_seconds, 60);
    assert!(exercise.is_cardio);
    // Description still reflects the raw muscles, not the group.
    assert_eq!(exercise.description, "Targets the Quadriceps.");
}

#[test]
fn excluded_categories_are_counted_and_dropped() {
    let result = Pipeline::transform(vec![
        raw("Snatch", "olympic weightlifting", &["shoulders"], "barbell"),
        raw("Runner Stretch", "stretching", &["hamstrings"], ""),
    ]);

    assert!(result.exercises.is_empty());
    assert_eq!(result.skipped_category, 2);
    assert_eq!(result.skipped_no_muscle, 0);
}

#[test]
fn duplicate_names_keep_the_first_occurrence() {
    let result = Pipeline::transform(vec![
        raw("Push Up", "strength", &["chest"], "body only"),
        raw("Push Up", "strength", &["triceps"], "body only"),
    ]);

    assert_eq!(result.exercises.len(), 1);
    assert_eq!(result.exercises[0].muscle_group, MuscleGroup::Chest);
    assert_eq!(result.skipped_duplicate, 1);
}

#[test]
fn unmapped_muscles_are_skipped_until_one_matches() {
    let result = Pipeline::transform(vec![raw(
        "Mystery Press",
        "strength",
        &["unknown_muscle", "chest"],
        "machine",
    )]);

    let exercise = &result.exercises[0];
    assert_eq!(exercise.muscle_group, MuscleGroup::Chest);
    assert_eq!(exercise.description, "Targets the Unknown_muscle, Chest.");
}

#[test]
fn wholly_unmappable_records_are_counted() {
    let result = Pipeline::transform(vec![raw("Neck Curl", "strength", &["neck"], "machine")]);

    assert!(result.exercises.is_empty());
    assert_eq!(result.skipped_no_muscle, 1);
}

#[test]
fn rejected_record_does_not_claim_its_name() {
    let result = Pipeline::transform(vec![
        raw("Curl", "strength", &["neck"], "machine"),
        raw("Curl", "strength", &["biceps"], "dumbbell"),
    ]);

    assert_eq!(result.exercises.len(), 1);
    assert_eq!(result.exercises[0].muscle_group, MuscleGroup::Arms);
    assert_eq!(result.skipped_no_muscle, 1);
    assert_eq!(result.skipped_duplicate, 0);
}

#[test]
fn empty_names_are_silently_invalid() {
    let result = Pipeline::transform(vec![
        raw("   ", "strength", &["chest"], "barbell"),
        RawExercise {
            category: Some("strength".into()),
            primary_muscles: Some(vec!["chest".into()]),
            ..Default::default()
        },
    ]);

    assert!(result.exercises.is_empty());
    assert_eq!(result.skipped_category, 0);
    assert_eq!(result.skipped_no_muscle, 0);
    assert_eq!(result.skipped_duplicate, 0);
}

#[test]
fn instructions_are_numbered_over_kept_steps() {
    let mut record = raw("Push Up", "strength", &["chest"], "body only");
    record.instructions = Some(vec![
        "  Step one.  ".into(),
        "".into(),
        "Step two.".into(),
    ]);
    let result = Pipeline::transform(vec![record]);

    assert_eq!(result.exercises[0].instructions, "1. Step one.\n2. Step two.");
}

#[test]
fn output_is_sorted_case_insensitively() {
    let result = Pipeline::transform(vec![
        raw("squat", "strength", &["quadriceps"], "barbell"),
        raw("Bench Press", "strength", &["chest"], "barbell"),
        raw("ab Wheel", "strength", &["abdominals"], "other"),
    ]);

    let names: Vec<&str> = result.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["ab Wheel", "Bench Press", "squat"]);
}

#[test]
fn rest_seconds_follow_the_group_rule() {
    let result = Pipeline::transform(vec![
        raw("Crunch", "strength", &["abdominals"], ""),
        raw("Row Machine", "cardio", &[], "machine"),
        raw("Deadlift", "strength", &["lower back"], "barbell"),
    ]);

    for exercise in &result.exercises {
        let expected = match exercise.muscle_group {
            MuscleGroup::Cardio | MuscleGroup::Core => 60,
            _ => 90,
        };
        assert_eq!(exercise.default_rest_seconds, expected);
        assert_eq!(
            exercise.is_cardio,
            exercise.muscle_group == MuscleGroup::Cardio
        );
    }
}

#[test]
fn breakdowns_are_alphabetical_by_key() {
    let result = Pipeline::transform(vec![
        raw("Squat", "strength", &["quadriceps"], "barbell"),
        raw("Lunge", "strength", &["quadriceps"], "dumbbell"),
        raw("Crunch", "strength", &["abdominals"], ""),
    ]);

    let groups: Vec<&str> = result.by_muscle_group().keys().copied().collect();
    assert_eq!(groups, vec!["core", "legs"]);
    assert_eq!(result.by_muscle_group()["legs"], 2);

    let kinds: Vec<&str> = result.by_equipment().keys().copied().collect();
    assert_eq!(kinds, vec!["barbell", "dumbbell", "other"]);
}

#[test]
fn transform_is_deterministic() {
    let records = vec![
        raw("Squat", "strength", &["quadriceps"], "barbell"),
        raw("Jumping Jacks", "cardio", &[], "body only"),
        raw("Plank", "strength", &["abdominals"], "body only"),
    ];

    let first = Pipeline::to_json(&Pipeline::transform(records.clone())).unwrap();
    let second = Pipeline::to_json(&Pipeline::transform(records)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn serialized_output_preserves_non_ascii() {
    let result = Pipeline::transform(vec![raw("Güd Mörning", "strength", &["hamstrings"], "barbell")]);
    let json = Pipeline::to_json(&result).unwrap();
    assert!(json.contains("Güd Mörning"));
    assert!(!json.contains("\\u"));
}
