use ahub_logger::{Logger, LoggerError};
use ahub_domain::config::LoggingConfig;

#[test]
fn second_install_is_rejected() {
    let _logger =
        Logger::from_config("init-twice", &LoggingConfig::default()).expect("first init");

    let err = Logger::builder().name("init-twice-again").init().expect_err("second init");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "got {err}");
}
