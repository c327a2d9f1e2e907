use crate::constants::paths;
use crate::language::Language;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level portal configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalConfigInner {
    pub routes: RoutesConfig,
    pub navigation: NavigationConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct PortalConfig {
    #[serde(flatten, default)]
    inner: Arc<PortalConfigInner>,
}

impl Deref for PortalConfig {
    type Target = PortalConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PortalConfig {
    fn deref_mut(&mut self) -> &mut PortalConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Well-known navigation targets used by the guard and the denied view.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub login_path: String,
    pub home_path: String,
    /// Where the "go back" action of the access-denied view leads.
    pub denied_back_path: String,
}

/// What the menu resolver does with a role it does not recognise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRolePolicy {
    /// Show the smallest menu (influencer).
    #[default]
    Restrictive,
    /// Show the full admin menu.
    Permissive,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub unknown_role: UnknownRolePolicy,
    pub default_language: Language,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Give up on the bootstrap check after this many milliseconds; `None` waits forever.
    pub bootstrap_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`info`, `debug`, ...); `RUST_LOG` still wins.
    pub level: String,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login_path: paths::LOGIN.to_owned(),
            home_path: paths::HOME.to_owned(),
            denied_back_path: paths::DASHBOARD.to_owned(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            unknown_role: UnknownRolePolicy::default(),
            default_language: Language::default(),
            languages: Language::ALL.to_vec(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
