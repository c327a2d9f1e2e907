//! Access feature slice: the route table and the guard that gates every location.
//!
//! The guard decision itself lives in [`ahub_kernel::security::guard`]; this slice maps
//! locations to policies and turns decisions into navigation through a [`Navigator`].

mod error;
mod gate;
mod navigator;
pub mod pattern;
pub mod standard;
mod table;

pub use crate::error::{AccessError, AccessErrorExt};
pub use crate::gate::{AccessGate, DeniedNotice, GateView, RETURN_TO_PARAM};
pub use crate::navigator::{NavigationMode, Navigator};
pub use crate::table::{RouteMatch, RouteTable, UNMATCHED_POLICY};
use ahub_kernel::domain::config::PortalConfig;
use ahub_kernel::domain::registry::InitializedSlice;

/// Access feature state
#[ahub_derive::ahub_slice]
pub struct Access {
    pub gate: AccessGate,
}

/// Initialize the access slice over the standard route table.
///
/// # Errors
/// Fails when the standard table does not build or contradicts `config.routes`.
pub fn init(config: &PortalConfig) -> Result<InitializedSlice, AccessError> {
    let table = standard::standard_routes().context("Building standard routes")?;
    let routes = table.len();
    let gate = AccessGate::new(table, &config.routes)?;

    tracing::info!(routes, login = gate.login_path(), "Access slice initialized");

    Ok(InitializedSlice::new(Access::new(AccessInner { gate })))
}
