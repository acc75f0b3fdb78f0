use evohub::domain::config::{AppConfig, UnknownPlanPolicy};
use evohub::domain::{OwnerType, Plan, ProductFeature};
use evohub::features::entitlements::{Entitlement, Entitlements};
use evohub::kernel::security::boundary::EntitlementRequest;

#[test]
fn default_build_registers_entitlements() {
    assert!(evohub::features::is_enabled("entitlements"));
    assert!(!evohub::features::is_enabled("billing"));

    let state = evohub::init(&AppConfig::default()).expect("init should succeed");
    assert_eq!(state.slice_names(), vec!["entitlements"]);
}

#[test]
fn slice_resolves_through_state() {
    let state = evohub::init(&AppConfig::default()).expect("init should succeed");
    let slice = state.try_get_slice::<Entitlements>().expect("entitlements slice");

    let entitlement =
        slice.resolve(ProductFeature::Voice, EntitlementRequest::new(OwnerType::User, Some(Plan::Enterprise)));
    assert!(matches!(entitlement, Entitlement::Voice(v) if v.daily_burst_cap == 3000));
}

#[test]
fn boundary_policy_flows_from_config() {
    let mut config = AppConfig::default();
    config.boundary.unknown_plan = UnknownPlanPolicy::Free;

    let state = evohub::init(&config).expect("init should succeed");
    let slice = state.try_get_slice::<Entitlements>().expect("entitlements slice");

    let entitlement = slice.resolve_raw("webscraper", "user", Some("platinum")).expect("fallback to free");
    assert!(matches!(entitlement, Entitlement::Webscraper(w) if w.daily_burst_cap == 20));
    assert_eq!(state.config.boundary.unknown_plan, UnknownPlanPolicy::Free);
}
