use log::LevelFilter;
use std::env;

/// Initialize logging for the solver CLI.
///
/// # Behavior
/// - `debug_enabled` selects `Debug` level, otherwise `Info`.
/// - An explicit `RUST_LOG` overrides those defaults.
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
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("Logger initialized at {level:?} level");
}
