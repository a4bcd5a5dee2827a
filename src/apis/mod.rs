pub mod free_exercise_db;
