/// Source name constants to ensure consistency across logs and diagnostics

// User-friendly source name (used in logs)
pub const FREE_EXERCISE_DB_API: &str = "free_exercise_db";

/// Published JSON dump of the Free Exercise DB (public domain, Unlicense).
/// Fixed by design; the tool takes no configuration.
pub const FREE_EXERCISE_DB_URL: &str =
    "https://raw.githubusercontent.com/yuhonas/free-exercise-db/main/dist/exercises.json";
