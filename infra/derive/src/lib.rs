#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the AffiliateHub crates.
//!
//! * [`macro@ahub_error`] turns an enum into a `thiserror` error with `.context()` support.
//! * [`macro@ahub_slice`] turns a struct into a cheaply clonable feature slice handle.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! ahub-derive.workspace = true
//! ```
//!
//! The examples below are `ignore`d because they cannot compile inside a proc-macro crate.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Defines a domain error enum.
///
/// # Injected Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A companion `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, SourceError>` for every variant that wraps a source.
/// * `From<SourceError>` for variants with a `source` field (or a `#[source]`/`#[from]` field).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper used by the `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Variants must use named fields; tuple and unit variants are rejected.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[ahub_derive::ahub_error]
/// pub enum AccessError {
///     #[error("Invalid route pattern{}: {message}", format_context(.context))]
///     InvalidPattern { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal access error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn ahub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a vertical slice handle.
///
/// The annotated struct becomes `<Name>Inner`, and `<Name>` becomes an `Arc` wrapper that
/// derefs to it and implements `FeatureSlice` for registration in the kernel registry.
///
/// # Example
/// ```rust,ignore
/// #[ahub_derive::ahub_slice]
/// pub struct Navigation {
///     pub resolver: RoleMenuResolver,
/// }
///
/// let slice = Navigation::new(NavigationInner { resolver });
/// ```
#[proc_macro_attribute]
pub fn ahub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
