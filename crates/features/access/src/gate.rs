use crate::error::AccessError;
use crate::navigator::Navigator;
use crate::pattern::normalize;
use crate::table::RouteTable;
use ahub_kernel::domain::access::{AccessPolicy, RouteDefinition};
use ahub_kernel::domain::config::RoutesConfig;
use ahub_kernel::domain::role::RoleSet;
use ahub_kernel::domain::session::Session;
use ahub_kernel::security::guard::{Chrome, GuardDecision, RouteGuard};
use tracing::{info, warn};

/// Query parameter carrying the originally requested path to the login page.
pub const RETURN_TO_PARAM: &str = "next";

/// Shown instead of a page the user's role may not open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeniedNotice {
    pub path: String,
    pub allowed: RoleSet,
}

impl DeniedNotice {
    #[must_use]
    pub fn message(&self) -> String {
        format!("Access denied. This page is reserved for: {}.", self.allowed)
    }
}

/// What the view layer should display for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView<'a> {
    Loading,
    /// A login redirect was issued; render nothing.
    Redirecting,
    Denied(DeniedNotice),
    Page { route: Option<&'a RouteDefinition>, chrome: Chrome },
}

/// Route table plus guard: decides and enforces access for a location.
#[derive(Debug, Clone)]
pub struct AccessGate {
    table: RouteTable,
    login_path: String,
    back_path: String,
}

impl AccessGate {
    /// # Errors
    /// Returns [`AccessError::Misconfigured`] unless the configured login path resolves to a
    /// public route, which is what keeps the login redirect from looping.
    pub fn new(table: RouteTable, routes: &RoutesConfig) -> Result<Self, AccessError> {
        let login_policy = table.policy_for(&routes.login_path);
        if login_policy != AccessPolicy::Public {
            return Err(AccessError::Misconfigured {
                message: format!("login path '{}' is not a public route", routes.login_path)
                    .into(),
                context: Some(format!("resolved policy {login_policy:?}").into()),
            });
        }

        Ok(Self {
            table,
            login_path: normalize(&routes.login_path).to_owned(),
            back_path: routes.denied_back_path.clone(),
        })
    }

    #[must_use]
    pub const fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    #[must_use]
    pub fn decide(&self, session: &Session, location: &str) -> GuardDecision {
        RouteGuard::evaluate(session, self.table.policy_for(location))
    }

    /// The login location for a redirect away from `location`.
    #[must_use]
    pub fn login_redirect(&self, location: &str) -> String {
        format!("{}?{RETURN_TO_PARAM}={}", self.login_path, normalize(location))
    }

    /// What to display for `location`, without navigating.
    ///
    /// Safe to call on every render; [`GateView::Redirecting`] means a login redirect is due and
    /// [`AccessGate::enforce`] has to issue it.
    #[must_use]
    pub fn view(&self, session: &Session, location: &str) -> GateView<'_> {
        match self.decide(session, location) {
            GuardDecision::Loading => GateView::Loading,
            GuardDecision::RedirectToLogin => GateView::Redirecting,
            GuardDecision::Denied { allowed } => {
                GateView::Denied(DeniedNotice { path: normalize(location).to_owned(), allowed })
            }
            GuardDecision::Render(chrome) => {
                GateView::Page { route: self.table.resolve(location).map(|m| m.definition), chrome }
            }
        }
    }

    /// Decides, issues the login redirect if one is due, and returns what to display.
    ///
    /// A redirect is issued at most once per call and always replaces the history entry. Run it
    /// once per change of location or session, not per render.
    pub fn enforce<N: Navigator>(
        &self,
        session: &Session,
        location: &str,
        navigator: &mut N,
    ) -> GateView<'_> {
        let view = self.view(session, location);
        match &view {
            GateView::Redirecting => {
                let target = self.login_redirect(location);
                info!(from = normalize(location), to = %target, "Redirecting to login");
                navigator.replace(&target);
            }
            GateView::Denied(notice) => {
                warn!(path = %notice.path, role = ?session.role(), allowed = %notice.allowed, "Access denied");
            }
            GateView::Loading | GateView::Page { .. } => {}
        }
        view
    }

    /// Where a successful login lands: the `next` location it was sent with, when that is a
    /// local path other than the login page itself, else the dashboard.
    #[must_use]
    pub fn after_login<'a>(&'a self, next: Option<&'a str>) -> &'a str {
        next.map(str::trim)
            .filter(|next| next.starts_with('/') && !next.starts_with("//"))
            .filter(|next| normalize(next) != self.login_path)
            .unwrap_or(self.back_path.as_str())
    }

    /// The denied view's manual "go back" action.
    pub fn leave_denied<N: Navigator>(&self, navigator: &mut N) {
        navigator.push(&self.back_path);
    }
}
