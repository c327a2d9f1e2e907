//! Navigation feature slice: role menus and the sidebar's local state.
//!
//! * [`RoleMenuResolver`] maps a role to its menu tree.
//! * [`MenuExpansionState`] tracks which groups are open.
//! * [`NavigationState`] bundles the expansion state with the active language.

mod catalog;
mod error;
mod expansion;
pub mod resolver;
mod state;

pub use crate::error::{NavigationError, NavigationErrorExt};
pub use crate::expansion::MenuExpansionState;
pub use crate::resolver::RoleMenuResolver;
pub use crate::state::NavigationState;
use ahub_kernel::domain::config::{NavigationConfig, PortalConfig};
use ahub_kernel::domain::registry::InitializedSlice;

/// Navigation feature state
#[ahub_derive::ahub_slice]
pub struct Navigation {
    pub resolver: RoleMenuResolver,
    pub config: NavigationConfig,
}

/// Initialize the navigation slice.
///
/// # Errors
/// Currently infallible; the signature matches the other slices.
pub fn init(config: &PortalConfig) -> Result<InitializedSlice, NavigationError> {
    let resolver = RoleMenuResolver::new(config.navigation.unknown_role);

    tracing::info!(
        unknown_role = ?resolver.unknown_role_policy(),
        language = %config.navigation.default_language,
        "Navigation slice initialized"
    );

    let inner = NavigationInner { resolver, config: config.navigation.clone() };

    Ok(InitializedSlice::new(Navigation::new(inner)))
}
