use log::LevelFilter;

/// Environment variable holding the log filter, e.g. `MAT_NUMERIC_LOG=mat_numeric=trace`.
pub const LOG_ENV: &str = "MAT_NUMERIC_LOG";

/// Install an `env_logger` logger. Later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, "error"))
        .try_init();
}
