use ahub_domain::config::LoggingConfig;
use ahub_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn configured_directory_receives_log_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let directory = tmp.path().join("logs");
    let config = LoggingConfig {
        level: "ahub=debug,info".to_owned(),
        directory: Some(directory.clone()),
        json: true,
    };

    let logger = Logger::from_config("file-logging", &config)?;
    assert!(logger.writes_files());

    tracing::info!(route = "/dashboard", "rendered");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let file = fs::read_dir(&directory)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should exist");

    let contents = fs::read_to_string(file)?;
    assert!(contents.contains("\"route\":\"/dashboard\""), "json line missing: {contents}");
    Ok(())
}
