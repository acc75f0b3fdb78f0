//! # Domain Models
//!
//! Pure data types shared by every Evolution Hub crate: subscription plans, owner
//! classification, product features, configuration shapes, and the slice registry marker.
//! Keep it lean: no I/O and no business rules beyond trivial helpers.

pub mod config;
pub mod owner;
pub mod plan;
pub mod product;
pub mod registry;

pub use crate::owner::OwnerType;
pub use crate::plan::Plan;
pub use crate::product::ProductFeature;
