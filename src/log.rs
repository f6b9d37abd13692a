use log::LevelFilter;

/// Initialize logging for the scrabblegram binaries.
///
/// # Behavior
/// - `Debug` level when `debug_enabled`, otherwise `Info`.
/// - `RUST_LOG`, when set, overrides both.
/// - No timestamps, module paths or targets: output goes to stderr next to the
///   human-readable diagnostics.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second initialization (e.g. from a test harness) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
