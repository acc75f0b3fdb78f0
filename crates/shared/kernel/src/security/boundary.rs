//! # Request Boundary
//!
//! Entitlement resolvers accept only the closed [`OwnerType`] and [`Plan`] enums and have no
//! error path. Everything that arrives as text (session classification, subscription records,
//! CLI arguments) passes through this module first, which either produces typed values or
//! rejects the request. An unknown plan never leaks through as an undefined record: depending
//! on [`UnknownPlanPolicy`] it is refused or pinned to `free`.

use evohub_domain::config::{BoundaryConfig, GuestPlanPolicy, UnknownPlanPolicy};
use evohub_domain::{OwnerType, Plan, ProductFeature};
use std::borrow::Cow;
use std::str::FromStr;
use tracing::{debug, warn};

#[evohub_derive::evohub_error]
pub enum BoundaryError {
    #[error("Unknown owner type{}: '{value}'", format_context(.context))]
    UnknownOwner { value: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown plan{}: '{value}'", format_context(.context))]
    UnknownPlan { value: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown product feature{}: '{value}'", format_context(.context))]
    UnknownFeature { value: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Plan supplied for a guest owner{}: '{value}'", format_context(.context))]
    GuestPlan { value: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Parses an owner classification. Surrounding whitespace and letter case are ignored.
///
/// # Errors
/// Returns [`BoundaryError::UnknownOwner`] for anything other than `user` or `guest`.
pub fn parse_owner_type(raw: &str) -> Result<OwnerType, BoundaryError> {
    let value = raw.trim();
    OwnerType::from_str(value)
        .map_err(|_| BoundaryError::UnknownOwner { value: value.to_owned().into(), context: None })
}

/// Parses a product feature name.
///
/// # Errors
/// Returns [`BoundaryError::UnknownFeature`] for names outside the feature set.
pub fn parse_feature(raw: &str) -> Result<ProductFeature, BoundaryError> {
    let value = raw.trim();
    ProductFeature::from_str(value).map_err(|_| BoundaryError::UnknownFeature {
        value: value.to_owned().into(),
        context: None,
    })
}

/// Parses an optional plan.
///
/// Absent or blank input yields `None` (the resolver then applies its own default).
/// Unknown names are refused or pinned to [`Plan::Free`] according to `policy`.
///
/// # Errors
/// Returns [`BoundaryError::UnknownPlan`] under [`UnknownPlanPolicy::Reject`].
pub fn parse_plan(
    raw: Option<&str>,
    policy: UnknownPlanPolicy,
) -> Result<Option<Plan>, BoundaryError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match (Plan::from_str(value), policy) {
        (Ok(plan), _) => Ok(Some(plan)),
        (Err(_), UnknownPlanPolicy::Free) => {
            warn!(plan = value, "Unknown plan pinned to free");
            Ok(Some(Plan::Free))
        },
        (Err(_), UnknownPlanPolicy::Reject) => {
            Err(BoundaryError::UnknownPlan { value: value.to_owned().into(), context: None })
        },
    }
}

/// A validated pair of resolver inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitlementRequest {
    pub owner: OwnerType,
    pub plan: Option<Plan>,
}

impl EntitlementRequest {
    #[must_use]
    pub const fn new(owner: OwnerType, plan: Option<Plan>) -> Self {
        Self { owner, plan }
    }

    /// Validates raw owner and plan strings under the given boundary policy.
    ///
    /// For guests, [`GuestPlanPolicy::Ignore`] still validates the plan (so malformed input
    /// is caught the same way for every owner) but the resolver will not consult it;
    /// [`GuestPlanPolicy::Reject`] refuses any non-blank plan.
    ///
    /// # Errors
    /// Returns the [`BoundaryError`] describing the first invalid input.
    pub fn from_raw(
        owner: &str,
        plan: Option<&str>,
        config: &BoundaryConfig,
    ) -> Result<Self, BoundaryError> {
        let owner = parse_owner_type(owner)?;

        if owner == OwnerType::Guest
            && config.guest_plan == GuestPlanPolicy::Reject
            && let Some(value) = plan.map(str::trim).filter(|v| !v.is_empty())
        {
            return Err(BoundaryError::GuestPlan {
                value: value.to_owned().into(),
                context: Some("guest_plan policy is 'reject'".into()),
            });
        }

        let plan = parse_plan(plan, config.unknown_plan).context(owner.as_str())?;
        if owner == OwnerType::Guest && plan.is_some() {
            debug!(?plan, "Plan supplied for guest will be ignored");
        }

        Ok(Self { owner, plan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_plan_is_absent() {
        assert_eq!(parse_plan(None, UnknownPlanPolicy::Reject).unwrap(), None);
        assert_eq!(parse_plan(Some("   "), UnknownPlanPolicy::Reject).unwrap(), None);
    }

    #[test]
    fn unknown_plan_fails_closed() {
        let err = parse_plan(Some("platinum"), UnknownPlanPolicy::Reject).unwrap_err();
        assert!(matches!(err, BoundaryError::UnknownPlan { .. }));

        let pinned = parse_plan(Some("platinum"), UnknownPlanPolicy::Free).unwrap();
        assert_eq!(pinned, Some(Plan::Free));
    }

    #[test]
    fn owner_is_trimmed_and_case_folded() {
        assert_eq!(parse_owner_type(" USER ").unwrap(), OwnerType::User);
        assert!(parse_owner_type("anonymous").is_err());
    }

    #[test]
    fn plan_error_carries_owner_context() {
        let err = EntitlementRequest::from_raw("user", Some("gold"), &BoundaryConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown plan (user): 'gold'");
    }
}
