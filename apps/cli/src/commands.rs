use crate::args::Target;
use anyhow::Result;
use evohub::features::entitlements::snapshot::{snapshot, snapshot_all, to_json};
use evohub::features::entitlements::{Ceiling, Entitlement, Entitlements, QuotaDecision};
use evohub::kernel::security::boundary::parse_feature;
use evohub::kernel::state::AppState;

fn resolve_target(state: &AppState, target: &Target) -> Result<Entitlement> {
    let slice = state.try_get_slice::<Entitlements>()?;
    let entitlement =
        slice.resolve_raw(&target.feature, &target.owner, target.plan.as_deref())?;

    tracing::debug!(
        feature = %entitlement.feature(),
        owner = %target.owner,
        plan = target.plan.as_deref().unwrap_or("-"),
        limit = entitlement.limit(),
        "Entitlement resolved"
    );

    Ok(entitlement)
}

pub fn resolve(state: &AppState, target: &Target) -> Result<String> {
    Ok(to_json(&resolve_target(state, target)?)?)
}

pub fn check(
    state: &AppState,
    target: &Target,
    used: u64,
    requested: u64,
) -> Result<(QuotaDecision, String)> {
    let decision = resolve_target(state, target)?.check(used, requested);
    if !decision.is_allowed() {
        tracing::warn!(feature = %target.feature, used, requested, "Quota exceeded");
    }
    Ok((decision, serde_json::to_string_pretty(&decision)?))
}

pub fn table(feature: Option<&str>) -> Result<String> {
    let rendered = match feature {
        Some(raw) => to_json(&snapshot(parse_feature(raw)?))?,
        None => to_json(&snapshot_all())?,
    };
    Ok(rendered)
}
