//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and hosts the cross-cutting rules every
//! slice agrees on: config loading and the route guard.
//!
//! ## Route guard
//! ```rust
//! use ahub_kernel::domain::access::AccessPolicy;
//! use ahub_kernel::domain::session::Session;
//! use ahub_kernel::security::guard::{GuardDecision, RouteGuard};
//!
//! let decision = RouteGuard::evaluate(&Session::loading(), AccessPolicy::Public);
//! assert_eq!(decision, GuardDecision::Loading);
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use ahub_kernel::config::load_config;
//!     let cfg: ahub_kernel::domain::config::PortalConfig = load_config(Some("portal")).unwrap();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;
pub mod security;

pub use ahub_domain as domain;
