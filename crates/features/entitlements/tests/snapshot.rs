use evohub_domain::{Plan, ProductFeature};
use evohub_entitlements::snapshot::{FeatureSnapshot, snapshot, snapshot_all, to_json};
use evohub_entitlements::voice;
use serde_json::{Value, json};

#[test]
fn snapshot_contains_guest_and_every_plan() {
    let FeatureSnapshot::Voice(table) = snapshot(ProductFeature::Voice) else {
        panic!("voice snapshot expected");
    };

    assert_eq!(table.guest, voice::GUEST);
    assert_eq!(table.plans.len(), 4);
    assert_eq!(table.plans[&Plan::Enterprise], voice::ENTERPRISE);
}

#[test]
fn snapshot_all_covers_each_feature_once() {
    let features: Vec<ProductFeature> = snapshot_all().iter().map(FeatureSnapshot::feature).collect();
    assert_eq!(features, [ProductFeature::Video, ProductFeature::Voice, ProductFeature::Webscraper]);
}

#[test]
fn snapshot_json_shape() {
    let rendered = to_json(&snapshot(ProductFeature::Webscraper)).unwrap();
    let value: Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(
        value,
        json!({
            "feature": "webscraper",
            "guest": { "dailyBurstCap": 5 },
            "plans": {
                "free": { "dailyBurstCap": 20 },
                "pro": { "dailyBurstCap": 100 },
                "premium": { "dailyBurstCap": 500 },
                "enterprise": { "dailyBurstCap": 2000 }
            }
        })
    );
}
