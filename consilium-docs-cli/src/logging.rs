use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count. Never read from the environment.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Logs go to stderr; stdout carries only the report.
pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
