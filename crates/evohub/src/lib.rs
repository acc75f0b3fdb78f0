//! Facade crate for Evolution Hub features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Depend on `evohub`; every slice listed in [`features::ENABLED`] is compiled in.
//! - Call [`init`] once at startup and pass the returned [`kernel::state::AppState`] around.

pub use evohub_domain as domain;
pub use evohub_kernel as kernel;

use evohub_domain::config::AppConfig;
use evohub_kernel::state::{AppState, AppStateError};
use std::borrow::Cow;

/// Feature registry for runtime introspection.
pub mod features {
    pub use evohub_entitlements as entitlements;

    /// Feature slices registered by [`crate::init`].
    pub const ENABLED: &[&str] = &["entitlements"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[evohub_derive::evohub_error]
pub enum InitError {
    #[error("Entitlements initialization failed{}: {source}", format_context(.context))]
    Entitlements {
        source: evohub_entitlements::EntitlementError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Application state error{}: {source}", format_context(.context))]
    State { source: AppStateError, context: Option<Cow<'static, str>> },
}

/// Initialize all enabled features and freeze them into an [`AppState`].
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &AppConfig) -> Result<AppState, InitError> {
    let state = AppState::builder()
        .config(config.clone())
        .register_slice(features::entitlements::init(config.boundary)?)
        .build()?;

    tracing::debug!(slices = ?state.slice_names(), "Application state ready");

    Ok(state)
}
