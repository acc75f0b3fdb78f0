use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Product surfaces that carry their own entitlement table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProductFeature {
    /// AI video generation, metered in monthly credits.
    Video,
    /// Voice transcription, metered in chunks per day.
    Voice,
    /// Web scraper, metered in requests per day.
    Webscraper,
}

impl ProductFeature {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
