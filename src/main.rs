use clap::Parser;

use exercise_prep::apis::free_exercise_db::FreeExerciseDb;
use exercise_prep::logging::init_logging;
use exercise_prep::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "exercise_prep")]
#[command(about = "Fetches the Free Exercise DB and prepares the app's exercise library")]
#[command(version = "0.1.0")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    eprintln!("Fetching Free Exercise DB...");
    let source = FreeExerciseDb::new();
    let result = Pipeline::run(&source).await?;
    eprintln!("Fetched {} total exercises.", result.fetched);

    // The library JSON is the only thing ever written to stdout.
    println!("{}", Pipeline::to_json(&result)?);

    eprintln!("\nDone. Total exercises output: {}", result.exercises.len());
    eprintln!("Skipped (excluded category): {}", result.skipped_category);
    eprintln!("Skipped (no muscle mapping): {}", result.skipped_no_muscle);
    eprintln!("Skipped (duplicate name): {}", result.skipped_duplicate);

    eprintln!("\nBy muscle group:");
    for (group, count) in result.by_muscle_group() {
        eprintln!("  {}: {}", group, count);
    }

    eprintln!("\nBy equipment:");
    for (kind, count) in result.by_equipment() {
        eprintln!("  {}: {}", kind, count);
    }

    Ok(())
}
