//! Session feature slice: the boundary to the authentication backend.
//!
//! Authentication is someone else's job. This crate only mirrors its answers into an
//! observable [`SessionStore`] that route guards and menus read from.

mod error;
mod provider;
mod store;

pub use crate::error::{SessionError, SessionErrorExt};
pub use crate::provider::{Credentials, InMemoryProvider, SessionProvider};
pub use crate::store::SessionStore;
use ahub_kernel::domain::config::PortalConfig;
use ahub_kernel::domain::registry::InitializedSlice;

/// Session feature state
#[ahub_derive::ahub_slice]
pub struct Sessions {
    pub store: SessionStore,
}

/// Initialize the session slice with a loading store.
///
/// # Errors
/// Currently infallible; the signature matches the other slices.
pub fn init(config: &PortalConfig) -> Result<InitializedSlice, SessionError> {
    let store = SessionStore::from_config(&config.session);

    tracing::info!(
        bootstrap_timeout_ms = config.session.bootstrap_timeout_ms,
        "Session slice initialized"
    );

    Ok(InitializedSlice::new(Sessions::new(SessionsInner { store })))
}
