use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system.
///
/// All log output is written to stderr; stdout is reserved for the
/// exercise library JSON document.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("exercise_prep=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
