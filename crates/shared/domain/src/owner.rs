use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantArray};

/// Classification of the caller: an authenticated account or an anonymous session.
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
pub enum OwnerType {
    User,
    Guest,
}

impl OwnerType {
    /// Maps session presence to an owner type: a session means a registered user.
    #[must_use]
    pub const fn from_session(has_session: bool) -> Self {
        if has_session { Self::User } else { Self::Guest }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
