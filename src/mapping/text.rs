use crate::types::MuscleGroup;

/// Renders raw instruction steps as a 1-indexed numbered list joined by
/// newlines. Blank steps are dropped and the numbering stays contiguous over
/// the kept steps. Empty input yields the empty string.
pub fn format_instructions(steps: &[String]) -> String {
    steps
        .iter()
        .map(|step| step.trim())
        .filter(|step| !step.is_empty())
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the one-line description shown in the exercise library.
///
/// Uses the raw muscle names in their original order when present; the
/// classified group only appears in the fallback.
pub fn format_description(primary_muscles: &[String], group: MuscleGroup) -> String {
    if primary_muscles.is_empty() {
        return format!("A {} exercise.", group.as_str());
    }
    let names = primary_muscles
        .iter()
        .map(|muscle| capitalize(muscle))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Targets the {}.", names)
}

/// First character uppercased, remainder lowercased ("middle back" ->
/// "Middle back").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
