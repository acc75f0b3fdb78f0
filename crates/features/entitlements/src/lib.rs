//! # Entitlements
//!
//! Resolves the resource ceiling an owner gets for each product feature, from the owner's
//! classification (`user` or `guest`) and optional subscription [`Plan`].
//!
//! ## Architecture
//!
//! 1.  **Tables ([`video`], [`voice`], [`webscraper`]):** one module per feature, each holding
//!     `const` rows, a guest constant, an exhaustive `entry(plan)` and `resolve_entitlement`.
//! 2.  **Resolver ([`resolver`]):** the [`FeatureEntitlements`] trait shared by all tables and
//!     [`resolve_for`] for runtime feature selection.
//! 3.  **Quota ([`quota`]):** compares caller-held usage counters against a ceiling.
//! 4.  **Snapshots ([`snapshot`]):** serializable dumps of whole tables.
//!
//! Resolution is pure and lock-free; tables are fixed at compile time and changing a cap
//! means shipping a new build.
//!
//! ## Example
//!
//! ```rust
//! use evohub_domain::{OwnerType, Plan};
//! use evohub_entitlements::{video, webscraper};
//!
//! assert_eq!(video::resolve_entitlement(OwnerType::User, Some(Plan::Pro)).monthly_credits_tenths, 1000);
//! assert_eq!(webscraper::resolve_entitlement(OwnerType::Guest, None).daily_burst_cap, 5);
//! ```

mod error;
pub mod quota;
pub mod resolver;
pub mod snapshot;
pub mod video;
pub mod voice;
pub mod webscraper;

pub use crate::error::{EntitlementError, EntitlementErrorExt};
pub use crate::quota::{Ceiling, QuotaDecision};
pub use crate::resolver::{Entitlement, FeatureEntitlements, resolve_for};

use evohub_domain::config::BoundaryConfig;
use evohub_domain::registry::InitializedSlice;
use evohub_domain::{Plan, ProductFeature};
use evohub_kernel::security::boundary::{BoundaryError, EntitlementRequest, parse_feature};
use strum::VariantArray;

/// Entitlements feature state: the boundary policy applied to raw requests.
#[evohub_derive::evohub_slice]
pub struct Entitlements {
    pub boundary: BoundaryConfig,
}

impl Entitlements {
    /// Resolves a validated request for `feature`.
    #[must_use]
    pub fn resolve(&self, feature: ProductFeature, request: EntitlementRequest) -> Entitlement {
        resolve_for(feature, request.owner, request.plan)
    }

    /// Validates raw strings with this slice's boundary policy, then resolves.
    ///
    /// # Errors
    /// Returns a [`BoundaryError`] if the feature, owner, or plan is not recognized.
    pub fn resolve_raw(
        &self,
        feature: &str,
        owner: &str,
        plan: Option<&str>,
    ) -> Result<Entitlement, BoundaryError> {
        let feature = parse_feature(feature)?;
        let request = EntitlementRequest::from_raw(owner, plan, &self.boundary)?;
        Ok(self.resolve(feature, request))
    }
}

/// Initialize the entitlements slice.
///
/// Audits every table before handing out the slice.
///
/// # Errors
/// Returns [`EntitlementError::Table`] if a table breaks tier ordering.
pub fn init(boundary: BoundaryConfig) -> Result<InitializedSlice, EntitlementError> {
    audit::<video::Video>()?;
    audit::<voice::Voice>()?;
    audit::<webscraper::Webscraper>()?;

    tracing::info!(?boundary, "Entitlements slice initialized");

    let slice = Entitlements::new(EntitlementsInner { boundary });

    Ok(InitializedSlice::new("entitlements", slice))
}

/// Checks that guests never out-rank `free` and that higher tiers never grant less than
/// lower ones. Identical adjacent tiers are allowed but reported.
fn audit<F: FeatureEntitlements>() -> Result<(), EntitlementError> {
    let feature = F::FEATURE.as_str();

    if F::GUEST.limit() > F::entry(Plan::Free).limit() {
        return Err(EntitlementError::Table {
            message: "guest ceiling exceeds the free tier".into(),
            context: Some(feature.into()),
        });
    }

    for pair in Plan::VARIANTS.windows(2) {
        let (lower, higher) = (pair[0], pair[1]);
        let (low, high) = (F::entry(lower).limit(), F::entry(higher).limit());
        if high < low {
            return Err(EntitlementError::Table {
                message: format!("{higher} grants {high}, less than {lower} ({low})").into(),
                context: Some(feature.into()),
            });
        }
        if high == low && lower.is_paid() {
            tracing::info!(feature, %lower, %higher, limit = high, "Paid tiers share an allowance");
        }
    }

    Ok(())
}
