use crate::role::{Role, RoleSet};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The authorization requirement attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "roles", rename_all = "snake_case")]
pub enum AccessPolicy {
    /// No session required.
    Public,
    /// Any signed-in user.
    AnyAuthenticated,
    /// Signed-in users whose role is in the set.
    ///
    /// An empty set admits every authenticated user; see [`AccessPolicy::normalized`].
    RoleRestricted(RoleSet),
}

impl AccessPolicy {
    /// Builds a role-restricted policy from a list of roles.
    pub fn restricted(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::RoleRestricted(roles.into_iter().collect())
    }

    /// Collapses `RoleRestricted(∅)` into `AnyAuthenticated`.
    ///
    /// An empty allow-list never means "deny all".
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::RoleRestricted(roles) if roles.is_empty() => Self::AnyAuthenticated,
            other => other,
        }
    }

    #[must_use]
    pub const fn requires_session(self) -> bool {
        !matches!(self, Self::Public)
    }
}

/// A route registered at startup: a path pattern, the page it shows and who may see it.
///
/// Patterns are absolute paths; a segment starting with `:` matches any single segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub pattern: Cow<'static, str>,
    pub page: Cow<'static, str>,
    pub policy: AccessPolicy,
}

impl RouteDefinition {
    pub fn new(
        pattern: impl Into<Cow<'static, str>>,
        page: impl Into<Cow<'static, str>>,
        policy: AccessPolicy,
    ) -> Self {
        Self { pattern: pattern.into(), page: page.into(), policy }
    }
}
