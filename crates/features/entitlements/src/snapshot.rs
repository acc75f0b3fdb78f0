//! Serializable views of complete entitlement tables, for operators and documentation.

use crate::error::{EntitlementError, EntitlementErrorExt};
use crate::resolver::FeatureEntitlements;
use crate::video::{Video, VideoEntitlement};
use crate::voice::{Voice, VoiceEntitlement};
use crate::webscraper::{Webscraper, WebscraperEntitlement};
use evohub_domain::{Plan, ProductFeature};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::VariantArray;

/// One feature's guest constant and plan rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementSnapshot<R> {
    pub feature: ProductFeature,
    pub guest: R,
    pub plans: BTreeMap<Plan, R>,
}

impl<R: Copy> EntitlementSnapshot<R> {
    fn of<F: FeatureEntitlements<Record = R>>() -> Self {
        Self { feature: F::FEATURE, guest: F::GUEST, plans: F::rows().collect() }
    }
}

/// A snapshot of any feature's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureSnapshot {
    Video(EntitlementSnapshot<VideoEntitlement>),
    Voice(EntitlementSnapshot<VoiceEntitlement>),
    Webscraper(EntitlementSnapshot<WebscraperEntitlement>),
}

impl FeatureSnapshot {
    #[must_use]
    pub const fn feature(&self) -> ProductFeature {
        match self {
            Self::Video(s) => s.feature,
            Self::Voice(s) => s.feature,
            Self::Webscraper(s) => s.feature,
        }
    }
}

#[must_use]
pub fn snapshot(feature: ProductFeature) -> FeatureSnapshot {
    match feature {
        ProductFeature::Video => FeatureSnapshot::Video(EntitlementSnapshot::of::<Video>()),
        ProductFeature::Voice => FeatureSnapshot::Voice(EntitlementSnapshot::of::<Voice>()),
        ProductFeature::Webscraper => {
            FeatureSnapshot::Webscraper(EntitlementSnapshot::of::<Webscraper>())
        },
    }
}

/// Snapshots of every feature, in declaration order.
#[must_use]
pub fn snapshot_all() -> Vec<FeatureSnapshot> {
    ProductFeature::VARIANTS.iter().copied().map(snapshot).collect()
}

/// Renders any snapshot (or list of snapshots) as pretty JSON.
///
/// # Errors
/// Returns [`EntitlementError::Serialize`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, EntitlementError> {
    serde_json::to_string_pretty(value).context("Rendering entitlement snapshot")
}
