//! Facade crate for the `AffiliateHub` portal features and shared modules.
//! Re-exports domain/kernel primitives and registers every feature slice.
//! Keep this crate thin: it composes the other crates, it does not implement rules.

pub use ahub_domain as domain;
pub use ahub_kernel as kernel;

use domain::config::PortalConfig;
use domain::registry::SliceRegistry;

pub mod features {
    pub use ahub_access as access;
    pub use ahub_navigation as navigation;
    pub use ahub_session as session;

    /// Slices registered by [`init`](crate::init), in order.
    pub const ENABLED: &[&str] = &[
        access::Access::NAME,
        navigation::Navigation::NAME,
        session::Sessions::NAME,
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns the first slice initialization failure.
pub fn init(config: &PortalConfig) -> Result<SliceRegistry, Box<dyn std::error::Error + Send + Sync>> {
    let mut registry = SliceRegistry::new();

    // Access: route table + guard
    registry.insert(features::access::init(config)?);

    // Navigation: role menus
    registry.insert(features::navigation::init(config)?);

    // Session: observable auth state
    registry.insert(features::session::init(config)?);

    tracing::info!(slices = registry.len(), "Features initialized");
    Ok(registry)
}
