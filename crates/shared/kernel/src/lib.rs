//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the input-validation boundary that
//! turns raw request strings into typed domain values, and the shared application state.
//!
//! ## Boundary
//! ```rust
//! use evohub_kernel::domain::config::BoundaryConfig;
//! use evohub_kernel::domain::{OwnerType, Plan};
//! use evohub_kernel::security::boundary::EntitlementRequest;
//!
//! let request = EntitlementRequest::from_raw("user", Some("pro"), &BoundaryConfig::default())
//!     .unwrap();
//! assert_eq!(request.owner, OwnerType::User);
//! assert_eq!(request.plan, Some(Plan::Pro));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use evohub_kernel::config::load_config;
//! use evohub_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("evohub.toml")).unwrap();
//! ```

pub mod config;
pub mod security;
pub mod state;

pub use evohub_domain as domain;
