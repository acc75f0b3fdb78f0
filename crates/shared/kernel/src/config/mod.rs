use config::{Case, Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Prefix for environment overrides (`EVOHUB__BOUNDARY__UNKNOWN_PLAN=free`).
pub const ENV_PREFIX: &str = "EVOHUB";

/// Base name of the optional config file looked up when no path is given.
const DEFAULT_FILE: &str = "evohub";

/// Error type for config loading.
#[evohub_derive::evohub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: the given path (required), or an optional `evohub.{toml,json,yaml}` in the
///    working directory when `None`. The format is picked from the extension.
/// 2. **Environment Overrides**: variables prefixed with `EVOHUB__`, nested with `__`
///    (`EVOHUB__LOGGING__LEVEL` maps to `logging.level`). Applied with or without a file.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is malformed, or
/// the merged values do not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_FILE), |p| p.as_ref().to_path_buf());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(Case::Snake))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
