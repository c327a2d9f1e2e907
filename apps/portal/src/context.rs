use ahub::domain::config::PortalConfig;
use ahub::domain::registry::SliceRegistry;
use ahub::domain::role::Role;
use ahub::domain::session::SessionUser;
use ahub::features::access::Access;
use ahub::features::navigation::Navigation;
use ahub::features::session::{InMemoryProvider, Sessions};
use std::sync::Arc;

/// Everything the components need, shared through the Dioxus context.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: PortalConfig,
    pub access: Access,
    pub navigation: Navigation,
    pub sessions: Sessions,
    pub provider: Arc<InMemoryProvider>,
}

impl AppContext {
    /// Picks the slices out of the registry and attaches the demo authentication provider.
    ///
    /// # Errors
    /// Fails when a slice was not registered.
    pub fn from_registry(config: PortalConfig, registry: &SliceRegistry) -> anyhow::Result<Self> {
        let access = registry.get::<Access>().cloned().ok_or_else(|| missing(Access::NAME))?;
        let navigation =
            registry.get::<Navigation>().cloned().ok_or_else(|| missing(Navigation::NAME))?;
        let sessions =
            registry.get::<Sessions>().cloned().ok_or_else(|| missing(Sessions::NAME))?;

        Ok(Self { config, access, navigation, sessions, provider: Arc::new(demo_provider()) })
    }
}

fn missing(name: &str) -> anyhow::Error {
    anyhow::anyhow!("feature slice '{name}' is not registered")
}

/// One account per role, password `demo`.
fn demo_provider() -> InMemoryProvider {
    Role::ALL.into_iter().fold(InMemoryProvider::new(), |provider, role| {
        let user = SessionUser::new(format!("demo-{role}"), role)
            .with_display_name(format!("Demo {role}"))
            .with_plan("starter");
        provider.with_account(&format!("{role}@demo.test"), "demo", user)
    })
}
