use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` still wins when set, so a single module can be turned up
/// without touching the command line.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp_millis();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
