//! kplc CLI entry point

fn main() {
    // Structured logging with env-based filter, defaulting to warn so diagnostics stay readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    kplc::cli::run();
}
