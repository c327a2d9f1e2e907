use crate::LoggerError;
use ahub_domain::config::LoggingConfig;
use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct Settings {
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    directives: Option<String>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            directives: None,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
        }
    }
}

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);
#[derive(Debug)]
pub struct ConsoleOnly;
#[derive(Debug)]
pub struct WithFiles;

mod private {
    pub trait Sealed {}
}
impl Sealed for Unnamed {}
impl Sealed for Named {}
impl Sealed for ConsoleOnly {}
impl Sealed for WithFiles {}

/// Configures the global subscriber.
///
/// A name is required before [`LoggerBuilder::init`] is available; file-only options
/// (rotation, retention, JSON) unlock once a directory is set.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = Unnamed, F: Sealed = ConsoleOnly> {
    settings: Settings,
    name: N,
    output: PhantomData<F>,
}

impl LoggerBuilder {
    pub(crate) fn new() -> Self {
        Self { settings: Settings::default(), name: Unnamed, output: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Unnamed, F> {
    /// Names the application; also the prefix of rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named, F> {
        LoggerBuilder { settings: self.settings, name: Named(name.into()), output: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<Named, F> {
    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Filter directives such as `ahub_access=debug,dioxus=warn`. `RUST_LOG` is ignored when set.
    #[must_use = "the builder does nothing until `init` is called"]
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes rolling log files into `directory`, creating it on init.
    pub fn directory(self, directory: impl Into<PathBuf>) -> LoggerBuilder<Named, WithFiles> {
        let mut settings = self.settings;
        settings.directory = Some(directory.into());
        LoggerBuilder { settings, name: self.name, output: PhantomData }
    }

    /// Installs the subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker; keep it alive until shutdown.
    ///
    /// # Errors
    /// [`LoggerError::Subscriber`] when a global subscriber already exists,
    /// [`LoggerError::InvalidConfiguration`] for an empty name, zero retention, bad directives
    /// or no enabled output, and [`LoggerError::Appender`] when the file writer cannot start.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        let settings = self.settings;
        validate(&settings, &name)?;

        let filter = env_filter(&settings)?;
        let mut layers = Vec::new();

        #[cfg(all(feature = "profiling", tokio_unstable))]
        if settings.console {
            layers.push(console_subscriber::spawn().boxed());
        }

        if settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match settings.directory {
            Some(directory) => {
                fs::create_dir_all(&directory).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("creating {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(settings.rotation)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(settings.max_files)
                    .build(directory)?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if settings.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "console and file output are both disabled".into(),
                context: Some(name.into()),
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<Named, WithFiles> {
    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Log files as JSON lines; the console stays human-readable.
    #[must_use = "the builder does nothing until `init` is called"]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }
}

/// The installed logging system.
#[must_use = "dropping the handle stops the background file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Installs the subscriber described by the portal's `[logging]` section.
    ///
    /// `level` accepts either a bare level (`debug`) or full filter directives.
    ///
    /// # Errors
    /// See [`LoggerBuilder::init`].
    pub fn from_config(name: &str, config: &LoggingConfig) -> Result<Self, LoggerError> {
        let builder = Self::builder().name(name);
        let builder = match config.level.parse::<LevelFilter>() {
            Ok(level) => builder.level(level),
            Err(_) => builder.directives(config.level.as_str()),
        };

        match &config.directory {
            Some(directory) => builder.directory(directory).json(config.json).init(),
            None => builder.init(),
        }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logger shutting down, flushing log files");
        }
    }
}

fn validate(settings: &Settings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: Some(name.to_owned().into()),
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("invalid directives '{directives}': {e}").into(),
            context: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let builder = Logger::builder().name("portal");
        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert!(builder.settings.directory.is_none());
        assert_eq!(builder.settings.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    fn test_file_options() {
        let builder = Logger::builder()
            .name("portal")
            .directives("ahub_access=debug")
            .directory("/tmp/ahub-logs")
            .rotation(Rotation::HOURLY)
            .max_files(3)
            .json(true);

        assert_eq!(builder.settings.directives.as_deref(), Some("ahub_access=debug"));
        assert_eq!(builder.settings.max_files, 3);
        assert!(builder.settings.json);
    }

    #[test]
    fn test_rejects_before_installing() {
        let empty = Logger::builder().name("  ").init();
        assert!(matches!(empty, Err(LoggerError::InvalidConfiguration { .. })));

        let silent = Logger::builder().name("portal").console(false).init();
        assert!(matches!(silent, Err(LoggerError::InvalidConfiguration { .. })));

        let retention = Logger::builder().name("portal").directory("/tmp/x").max_files(0).init();
        assert!(matches!(retention, Err(LoggerError::InvalidConfiguration { .. })));
    }
}
