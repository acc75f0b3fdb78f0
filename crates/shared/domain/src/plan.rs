use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Subscription tier controlling resource ceilings.
///
/// The set is closed: adding a tier means adding a variant here and a row to every
/// entitlement table, which the exhaustive `match` in each table enforces at compile time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Plan {
    Free,
    Pro,
    Premium,
    Enterprise,
}

impl Plan {
    /// Wire name of the plan (`free`, `pro`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Returns `true` for every tier that is billed.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        !matches!(self, Self::Free)
    }
}
