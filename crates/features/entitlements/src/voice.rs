//! Voice transcription allowances: transcription chunks per day.

use crate::quota::Ceiling;
use crate::resolver::{FeatureEntitlements, billed_plan};
use evohub_domain::{OwnerType, Plan, ProductFeature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceEntitlement {
    pub daily_burst_cap: u32,
}

impl VoiceEntitlement {
    #[must_use]
    pub const fn new(daily_burst_cap: u32) -> Self {
        Self { daily_burst_cap }
    }
}

impl Ceiling for VoiceEntitlement {
    fn limit(&self) -> u64 {
        u64::from(self.daily_burst_cap)
    }
}

pub const GUEST: VoiceEntitlement = VoiceEntitlement::new(20);
pub const FREE: VoiceEntitlement = VoiceEntitlement::new(60);
pub const PRO: VoiceEntitlement = VoiceEntitlement::new(600);
pub const PREMIUM: VoiceEntitlement = VoiceEntitlement::new(1200);
pub const ENTERPRISE: VoiceEntitlement = VoiceEntitlement::new(3000);

#[must_use]
pub const fn entry(plan: Plan) -> VoiceEntitlement {
    match plan {
        Plan::Free => FREE,
        Plan::Pro => PRO,
        Plan::Premium => PREMIUM,
        Plan::Enterprise => ENTERPRISE,
    }
}

#[must_use]
pub const fn resolve_entitlement(owner: OwnerType, plan: Option<Plan>) -> VoiceEntitlement {
    match billed_plan(owner, plan) {
        Some(plan) => entry(plan),
        None => GUEST,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Voice;

impl FeatureEntitlements for Voice {
    type Record = VoiceEntitlement;

    const FEATURE: ProductFeature = ProductFeature::Voice;
    const GUEST: VoiceEntitlement = self::GUEST;

    fn entry(plan: Plan) -> VoiceEntitlement {
        self::entry(plan)
    }
}
