use ahub_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_writes_no_files() {
    let logger = Logger::builder()
        .name("console-only")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.writes_files());
}
