//! Tracing setup for the portal: a compact console layer plus optional rolling log files.
//!
//! * `RUST_LOG` overrides the configured level unless explicit directives are given.
//! * The `profiling` feature adds the tokio console layer (needs `--cfg tokio_unstable`).
//!
//! ```rust,no_run
//! # use ahub_logger::{LevelFilter, Logger};
//! let _logger = Logger::builder().name("ahub-portal").level(LevelFilter::DEBUG).init()?;
//! # Ok::<(), ahub_logger::LoggerError>(())
//! ```

mod builder;
mod error;

pub use crate::builder::{ConsoleOnly, Logger, LoggerBuilder, Named, Unnamed, WithFiles};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;
