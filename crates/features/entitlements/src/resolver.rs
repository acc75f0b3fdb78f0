//! # Resolver
//!
//! Every product feature owns one frozen table and one guest constant. [`FeatureEntitlements`]
//! captures that shape once so the resolution rule lives in a single place:
//!
//! * `guest` owners get the guest constant; the plan is never consulted.
//! * `user` owners get the row for their plan, or the `free` row when no plan is known.
//!
//! Resolution is a pure function over `const` data: no I/O, no logging, no locks.

use crate::quota::Ceiling;
use crate::video::{Video, VideoEntitlement};
use crate::voice::{Voice, VoiceEntitlement};
use crate::webscraper::{Webscraper, WebscraperEntitlement};
use evohub_domain::{OwnerType, Plan, ProductFeature};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::VariantArray;

/// A product feature with a plan-indexed entitlement table.
pub trait FeatureEntitlements {
    /// The allowance shape for this feature.
    type Record: Copy + Eq + Debug + Serialize + DeserializeOwned + Ceiling + 'static;

    /// Which product surface this table governs.
    const FEATURE: ProductFeature;

    /// Ceiling for anonymous callers, independent of any plan.
    const GUEST: Self::Record;

    /// The table row for `plan`. Total over [`Plan`].
    fn entry(plan: Plan) -> Self::Record;

    /// Resolves the allowance for an owner and an optional plan.
    #[must_use]
    fn resolve(owner: OwnerType, plan: Option<Plan>) -> Self::Record {
        billed_plan(owner, plan).map_or(Self::GUEST, Self::entry)
    }

    /// All plan rows in tier order.
    fn rows() -> impl Iterator<Item = (Plan, Self::Record)> {
        Plan::VARIANTS.iter().map(|&plan| (plan, Self::entry(plan)))
    }
}

/// The table row an owner is resolved against, or `None` for the guest constant.
///
/// Guests never consult the plan; users fall back to `free` when no plan is known.
#[must_use]
pub const fn billed_plan(owner: OwnerType, plan: Option<Plan>) -> Option<Plan> {
    match (owner, plan) {
        (OwnerType::Guest, _) => None,
        (OwnerType::User, Some(plan)) => Some(plan),
        (OwnerType::User, None) => Some(Plan::Free),
    }
}

/// A resolved allowance tagged with the feature it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "feature", rename_all = "lowercase")]
pub enum Entitlement {
    Video(VideoEntitlement),
    Voice(VoiceEntitlement),
    Webscraper(WebscraperEntitlement),
}

impl Entitlement {
    #[must_use]
    pub const fn feature(&self) -> ProductFeature {
        match self {
            Self::Video(_) => ProductFeature::Video,
            Self::Voice(_) => ProductFeature::Voice,
            Self::Webscraper(_) => ProductFeature::Webscraper,
        }
    }
}

impl Ceiling for Entitlement {
    fn limit(&self) -> u64 {
        match self {
            Self::Video(record) => record.limit(),
            Self::Voice(record) => record.limit(),
            Self::Webscraper(record) => record.limit(),
        }
    }
}

/// Resolves an allowance for a feature chosen at runtime.
#[must_use]
pub fn resolve_for(feature: ProductFeature, owner: OwnerType, plan: Option<Plan>) -> Entitlement {
    match feature {
        ProductFeature::Video => Entitlement::Video(Video::resolve(owner, plan)),
        ProductFeature::Voice => Entitlement::Voice(Voice::resolve(owner, plan)),
        ProductFeature::Webscraper => Entitlement::Webscraper(Webscraper::resolve(owner, plan)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{video, voice, webscraper};

    #[test]
    fn guests_are_never_billed() {
        for plan in Plan::VARIANTS.iter().copied().map(Some).chain([None]) {
            assert_eq!(billed_plan(OwnerType::Guest, plan), None);
        }
    }

    #[test]
    fn users_without_a_plan_are_billed_as_free() {
        assert_eq!(billed_plan(OwnerType::User, None), Some(Plan::Free));
        assert_eq!(billed_plan(OwnerType::User, Some(Plan::Premium)), Some(Plan::Premium));
    }

    #[test]
    fn table_functions_agree_with_the_trait() {
        for owner in [OwnerType::Guest, OwnerType::User] {
            for plan in Plan::VARIANTS.iter().copied().map(Some).chain([None]) {
                assert_eq!(video::resolve_entitlement(owner, plan), Video::resolve(owner, plan));
                assert_eq!(voice::resolve_entitlement(owner, plan), Voice::resolve(owner, plan));
                assert_eq!(
                    webscraper::resolve_entitlement(owner, plan),
                    Webscraper::resolve(owner, plan)
                );
            }
        }
    }
}
