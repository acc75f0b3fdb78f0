use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub logging: LoggingConfig,
    pub boundary: BoundaryConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logger settings applied by binaries at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Explicit filter such as `evohub_kernel=debug`; overrides `RUST_LOG`.
    pub env_filter: Option<String>,
    /// Directory for rolling log files. Console-only when absent.
    pub path: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
}

/// How raw owner/plan strings are normalized before they reach a resolver.
#[derive(Default, Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    pub unknown_plan: UnknownPlanPolicy,
    pub guest_plan: GuestPlanPolicy,
}

/// Handling of plan strings outside the known tier set.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPlanPolicy {
    /// Refuse the request.
    #[default]
    Reject,
    /// Treat the caller as `free`.
    Free,
}

/// Handling of a plan supplied alongside a guest owner.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestPlanPolicy {
    /// Accept the plan and drop it; guests always get the guest ceiling.
    #[default]
    Ignore,
    /// Refuse the request.
    Reject,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), env_filter: None, path: None, json: false }
    }
}
