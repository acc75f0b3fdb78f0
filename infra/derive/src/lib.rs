#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every Evolution Hub crate.
//!
//! * [`evohub_error`] turns a plain enum into a crate error type with context support.
//! * [`evohub_slice`] turns a struct into an `Arc`-backed feature slice handle.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own macros in doctests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(..)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a source field,
///   so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
///
/// # Requirements
///
/// 1. Applied to an **enum** with named-field variants only.
/// 2. Context-carrying variants declare `context: Option<Cow<'static, str>>`.
/// 3. Variants with a `source` field (or `#[source]`/`#[from]`) must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[evohub_derive::evohub_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?.try_deserialize().context("Bad shape")
/// }
/// ```
#[proc_macro_attribute]
pub fn evohub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` becomes a cloneable `Arc` wrapper that
/// derefs to the inner state and implements `FeatureSlice` for registration.
///
/// # Example
/// ```rust,ignore
/// #[evohub_derive::evohub_slice]
/// pub struct Entitlements {
///     pub features: Vec<ProductFeature>,
/// }
///
/// let slice = Entitlements::new(EntitlementsInner { features: ProductFeature::ALL.to_vec() });
/// ```
#[proc_macro_attribute]
pub fn evohub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand(input).into()
}
