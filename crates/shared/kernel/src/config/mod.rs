use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default config file stem, resolved against the working directory.
pub const DEFAULT_CONFIG: &str = "portal";

/// Prefix for environment overrides (`AHUB__SESSION__BOOTSTRAP_TIMEOUT_MS=5000`).
pub const ENV_PREFIX: &str = "AHUB";

/// Custom error type for config loading.
#[ahub_derive::ahub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration structure from a file, overlaid with environment variables.
///
/// 1. **Base File**: `path` (any format the `config` crate recognises by extension), or
///    [`DEFAULT_CONFIG`] when `None`. The file is optional: every portal setting has a default.
/// 2. **Environment Overrides**: variables prefixed with `AHUB__`, nested with `__`
///    (e.g. `AHUB__ROUTES__LOGIN_PATH` maps to `routes.login_path`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when a source is malformed or the merged values do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use ahub_kernel::config::load_config;
/// use ahub_kernel::domain::config::PortalConfig;
///
/// let cfg: PortalConfig = load_config(Some("config/missing")).unwrap_or_default();
/// assert_eq!(cfg.routes.login_path, "/login");
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
