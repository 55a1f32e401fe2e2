use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Install the global logger once, at the given level
pub fn init_logging(level: LevelFilter) {
    let result = SimpleLogger::new()
        .with_level(level)
        .with_module_level("notify", LevelFilter::Warn)
        .init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}
