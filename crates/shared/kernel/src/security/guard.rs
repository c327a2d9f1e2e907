use crate::domain::access::AccessPolicy;
use crate::domain::role::RoleSet;
use crate::domain::session::Session;
use tracing::debug;

/// Page chrome a rendered route receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chrome {
    /// Public pages seen by anonymous visitors: no sidebar, no header.
    Bare,
    /// The standard layout with sidebar and header; every page a signed-in user sees.
    Layout,
}

/// Outcome of gating one route for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardDecision {
    /// The session bootstrap has not resolved; show only the placeholder.
    Loading,
    /// No session on a protected route; replace the history entry with the login page.
    RedirectToLogin,
    /// Signed in with the wrong role; show the denied view inside the layout.
    Denied { allowed: RoleSet },
    /// Show the page.
    Render(Chrome),
}

impl GuardDecision {
    #[must_use]
    pub const fn renders_page(self) -> bool {
        matches!(self, Self::Render(_))
    }
}

/// Decides whether a route may render for a session.
///
/// Decision order is fixed: loading, then authentication, then role.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    #[must_use]
    pub fn evaluate(session: &Session, policy: AccessPolicy) -> GuardDecision {
        let decision = Self::decide(session, policy.normalized());
        debug!(?policy, ?decision, user = session.user_id(), "Route guard evaluated");
        decision
    }

    fn decide(session: &Session, policy: AccessPolicy) -> GuardDecision {
        if session.loading {
            return GuardDecision::Loading;
        }

        let Some(user) = &session.user else {
            return if policy.requires_session() {
                GuardDecision::RedirectToLogin
            } else {
                GuardDecision::Render(Chrome::Bare)
            };
        };

        match policy {
            AccessPolicy::Public | AccessPolicy::AnyAuthenticated => {
                GuardDecision::Render(Chrome::Layout)
            }
            AccessPolicy::RoleRestricted(allowed) => match user.role {
                Some(role) if allowed.allows(role) => GuardDecision::Render(Chrome::Layout),
                _ => GuardDecision::Denied { allowed },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::role::Role;
    use crate::domain::session::SessionUser;

    fn signed_in(role: Role) -> Session {
        Session::authenticated(SessionUser::new("u-1", role))
    }

    #[test]
    fn test_loading_dominates() {
        let mut session = signed_in(Role::Admin);
        session.loading = true;

        for policy in [
            AccessPolicy::Public,
            AccessPolicy::AnyAuthenticated,
            AccessPolicy::RoleRestricted(RoleSet::ADMIN),
        ] {
            assert_eq!(RouteGuard::evaluate(&session, policy), GuardDecision::Loading);
        }
    }

    #[test]
    fn test_anonymous_visitors() {
        let session = Session::anonymous();
        assert_eq!(
            RouteGuard::evaluate(&session, AccessPolicy::Public),
            GuardDecision::Render(Chrome::Bare)
        );
        assert_eq!(
            RouteGuard::evaluate(&session, AccessPolicy::AnyAuthenticated),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            RouteGuard::evaluate(&session, AccessPolicy::restricted([Role::Merchant])),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_signed_in_users_keep_the_layout_on_public_routes() {
        for role in Role::ALL {
            assert_eq!(
                RouteGuard::evaluate(&signed_in(role), AccessPolicy::Public),
                GuardDecision::Render(Chrome::Layout)
            );
        }
    }

    #[test]
    fn test_role_restriction() {
        let policy = AccessPolicy::restricted([Role::Merchant, Role::Admin]);

        assert_eq!(
            RouteGuard::evaluate(&signed_in(Role::Merchant), policy),
            GuardDecision::Render(Chrome::Layout)
        );
        assert_eq!(
            RouteGuard::evaluate(&signed_in(Role::Influencer), policy),
            GuardDecision::Denied { allowed: RoleSet::MERCHANT | RoleSet::ADMIN }
        );
    }

    #[test]
    fn test_unknown_role_is_denied_on_restricted_routes() {
        let session = Session::authenticated(SessionUser::from_claim("u-9", Some("partner")));
        assert!(matches!(
            RouteGuard::evaluate(&session, AccessPolicy::restricted([Role::Admin])),
            GuardDecision::Denied { .. }
        ));
        assert_eq!(
            RouteGuard::evaluate(&session, AccessPolicy::restricted([])),
            GuardDecision::Render(Chrome::Layout)
        );
    }
}
