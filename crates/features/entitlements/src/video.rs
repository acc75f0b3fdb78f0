//! AI video generation allowances, metered in monthly credits.
//!
//! Credits are stored in tenths so partial-credit renders bill without floating point.
//! `pro` and `premium` currently grant the same allowance.

use crate::quota::Ceiling;
use crate::resolver::{FeatureEntitlements, billed_plan};
use evohub_domain::{OwnerType, Plan, ProductFeature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntitlement {
    pub monthly_credits_tenths: u32,
}

impl VideoEntitlement {
    #[must_use]
    pub const fn new(monthly_credits_tenths: u32) -> Self {
        Self { monthly_credits_tenths }
    }

    /// Whole credits, rounded down.
    #[must_use]
    pub const fn whole_credits(self) -> u32 {
        self.monthly_credits_tenths / 10
    }
}

impl Ceiling for VideoEntitlement {
    fn limit(&self) -> u64 {
        u64::from(self.monthly_credits_tenths)
    }
}

pub const GUEST: VideoEntitlement = VideoEntitlement::new(0);
pub const FREE: VideoEntitlement = VideoEntitlement::new(0);
pub const PRO: VideoEntitlement = VideoEntitlement::new(1000);
pub const PREMIUM: VideoEntitlement = VideoEntitlement::new(1000);
pub const ENTERPRISE: VideoEntitlement = VideoEntitlement::new(5000);

#[must_use]
pub const fn entry(plan: Plan) -> VideoEntitlement {
    match plan {
        Plan::Free => FREE,
        Plan::Pro => PRO,
        Plan::Premium => PREMIUM,
        Plan::Enterprise => ENTERPRISE,
    }
}

#[must_use]
pub const fn resolve_entitlement(owner: OwnerType, plan: Option<Plan>) -> VideoEntitlement {
    match billed_plan(owner, plan) {
        Some(plan) => entry(plan),
        None => GUEST,
    }
}

/// Table marker for generic code.
#[derive(Debug, Clone, Copy)]
pub struct Video;

impl FeatureEntitlements for Video {
    type Record = VideoEntitlement;

    const FEATURE: ProductFeature = ProductFeature::Video;
    const GUEST: VideoEntitlement = self::GUEST;

    fn entry(plan: Plan) -> VideoEntitlement {
        self::entry(plan)
    }
}
