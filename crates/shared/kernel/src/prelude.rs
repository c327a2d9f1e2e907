//! Glob-import for slices and apps.

pub use crate::domain::access::{AccessPolicy, RouteDefinition};
pub use crate::domain::config::PortalConfig;
pub use crate::domain::language::Language;
pub use crate::domain::menu::{MenuItem, MenuTarget};
pub use crate::domain::role::{Role, RoleSet};
pub use crate::domain::session::{Session, SessionUser};
pub use crate::security::guard::{Chrome, GuardDecision, RouteGuard};
