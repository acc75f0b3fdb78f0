//! Web scraper allowances: scrape requests per day.

use crate::quota::Ceiling;
use crate::resolver::{FeatureEntitlements, billed_plan};
use evohub_domain::{OwnerType, Plan, ProductFeature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebscraperEntitlement {
    pub daily_burst_cap: u32,
}

impl WebscraperEntitlement {
    #[must_use]
    pub const fn new(daily_burst_cap: u32) -> Self {
        Self { daily_burst_cap }
    }
}

impl Ceiling for WebscraperEntitlement {
    fn limit(&self) -> u64 {
        u64::from(self.daily_burst_cap)
    }
}

pub const GUEST: WebscraperEntitlement = WebscraperEntitlement::new(5);
pub const FREE: WebscraperEntitlement = WebscraperEntitlement::new(20);
pub const PRO: WebscraperEntitlement = WebscraperEntitlement::new(100);
pub const PREMIUM: WebscraperEntitlement = WebscraperEntitlement::new(500);
pub const ENTERPRISE: WebscraperEntitlement = WebscraperEntitlement::new(2000);

#[must_use]
pub const fn entry(plan: Plan) -> WebscraperEntitlement {
    match plan {
        Plan::Free => FREE,
        Plan::Pro => PRO,
        Plan::Premium => PREMIUM,
        Plan::Enterprise => ENTERPRISE,
    }
}

#[must_use]
pub const fn resolve_entitlement(owner: OwnerType, plan: Option<Plan>) -> WebscraperEntitlement {
    match billed_plan(owner, plan) {
        Some(plan) => entry(plan),
        None => GUEST,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Webscraper;

impl FeatureEntitlements for Webscraper {
    type Record = WebscraperEntitlement;

    const FEATURE: ProductFeature = ProductFeature::Webscraper;
    const GUEST: WebscraperEntitlement = self::GUEST;

    fn entry(plan: Plan) -> WebscraperEntitlement {
        self::entry(plan)
    }
}
