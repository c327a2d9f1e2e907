use crate::role::{self, Role};
use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: String,
    /// `None` when the backend sent a role this build does not know.
    #[serde(default, deserialize_with = "role::lenient")]
    pub role: Option<Role>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub subscription_plan: Option<String>,
}

impl SessionUser {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role: Some(role),
            display_name: String::new(),
            subscription_plan: None,
        }
    }

    /// Builds a user from a raw role claim; unknown claims leave the role unset.
    pub fn from_claim(user_id: impl Into<String>, claim: Option<&str>) -> Self {
        Self {
            user_id: user_id.into(),
            role: claim.and_then(Role::parse),
            display_name: String::new(),
            subscription_plan: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    #[must_use]
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.subscription_plan = Some(plan.into());
        self
    }
}

/// The current authentication state observed by the frontend.
///
/// `loading` is `true` until the bootstrap check resolves; while it is set the
/// `user` field carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Session {
    /// The state at app start, before the bootstrap check resolves.
    #[must_use]
    pub const fn loading() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    #[must_use]
    pub const fn authenticated(user: SessionUser) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.user_id.as_str())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
