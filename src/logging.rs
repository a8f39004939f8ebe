use log::LevelFilter;

/// Environment variable holding the log filter, e.g. `debug` or
/// `connect_four::game=debug`.
pub const LOG_ENV: &str = "CONNECT_FOUR_LOG";

/// Initialize logging to stderr with a filter taken from `CONNECT_FOUR_LOG`.
/// Defaults to `warn` so the board on stdout stays readable.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .try_init();
}
