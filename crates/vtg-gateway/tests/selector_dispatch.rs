//! Dispatch tests for the adapter selector using in-process fake adapters

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use vtg_core::{
    AdapterError, AdapterResult, Battery, BrandTag, Door, EngineCommand, EngineCommandResult,
    Fuel, VehicleAdapter, VehicleInfo,
};
use vtg_gateway::AdapterSelector;

/// Fake adapter that records every call it receives
struct RecordingAdapter {
    brand: BrandTag,
    calls: Mutex<Vec<String>>,
}

impl RecordingAdapter {
    fn new(brand: &str) -> Arc<Self> {
        Arc::new(Self {
            brand: BrandTag::from(brand),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VehicleAdapter for RecordingAdapter {
    fn brand(&self) -> &BrandTag {
        &self.brand
    }

    fn name(&self) -> &str {
        "recording"
    }

    async fn vehicle_info(&self, vehicle_id: &str) -> AdapterResult<VehicleInfo> {
        self.record(format!("vehicle_info:{vehicle_id}"));
        Ok(VehicleInfo {
            vin: format!("{}-{vehicle_id}", self.brand),
            color: "Red".into(),
            door_count: 4,
            drive_train: "v6".into(),
        })
    }

    async fn door_status(&self, vehicle_id: &str) -> AdapterResult<Vec<Door>> {
        self.record(format!("door_status:{vehicle_id}"));
        Ok(vec![Door {
            location: "frontLeft".into(),
            locked: true,
        }])
    }

    async fn fuel_level(&self, vehicle_id: &str) -> AdapterResult<Fuel> {
        self.record(format!("fuel_level:{vehicle_id}"));
        Ok(Fuel { percent: Some(12.5) })
    }

    async fn battery_level(&self, vehicle_id: &str) -> AdapterResult<Battery> {
        self.record(format!("battery_level:{vehicle_id}"));
        Ok(Battery { percent: None })
    }

    async fn set_engine_state(
        &self,
        vehicle_id: &str,
        command: EngineCommand,
    ) -> AdapterResult<EngineCommandResult> {
        self.record(format!("set_engine_state:{vehicle_id}:{command}"));
        match command {
            EngineCommand::Start => Ok(EngineCommandResult::success()),
            EngineCommand::Stop => Err(AdapterError::upstream(None, "engine unreachable")),
        }
    }
}

#[tokio::test]
async fn routes_each_capability_to_the_registered_brand() {
    let gm = RecordingAdapter::new("gm");
    let ford = RecordingAdapter::new("ford");

    let mut selector = AdapterSelector::new();
    selector.register_adapter(gm.clone());
    selector.register_adapter(ford.clone());

    let brand = BrandTag::from("gm");
    let info = selector.vehicle_info(&brand, "1234").await.unwrap();
    assert_eq!(info.vin, "gm-1234");

    let doors = selector.door_status(&brand, "1234").await.unwrap();
    assert_eq!(doors.len(), 1);
    assert_eq!(
        selector.fuel_level(&brand, "1234").await.unwrap(),
        Fuel { percent: Some(12.5) }
    );
    assert_eq!(
        selector.battery_level(&brand, "1234").await.unwrap(),
        Battery { percent: None }
    );
    assert_eq!(
        selector
            .set_engine_state(&brand, "1234", EngineCommand::Start)
            .await
            .unwrap(),
        EngineCommandResult::success()
    );

    assert_eq!(
        gm.calls(),
        vec![
            "vehicle_info:1234",
            "door_status:1234",
            "fuel_level:1234",
            "battery_level:1234",
            "set_engine_state:1234:START",
        ]
    );
    assert!(ford.calls().is_empty());
}

#[tokio::test]
async fn unknown_brand_fails_without_touching_adapters() {
    let gm = RecordingAdapter::new("gm");
    let mut selector = AdapterSelector::new();
    selector.register_adapter(gm.clone());

    let err = selector
        .vehicle_info(&BrandTag::from("tesla"), "1234")
        .await
        .unwrap_err();

    assert!(matches!(err, AdapterError::UnsupportedBrand(ref msg) if msg == "brand tesla not found"));
    assert_eq!(err.status_code(), 404);
    assert!(gm.calls().is_empty());
}

#[tokio::test]
async fn adapter_errors_pass_through_unchanged() {
    let mut selector = AdapterSelector::new();
    selector.register_adapter(RecordingAdapter::new("gm"));

    let err = selector
        .set_engine_state(&BrandTag::from("gm"), "1234", EngineCommand::Stop)
        .await
        .unwrap_err();

    match err {
        AdapterError::Upstream { status, reason } => {
            assert_eq!(status, None);
            assert_eq!(reason, "engine unreachable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn brands_are_listed_sorted_and_replacement_keeps_one_entry() {
    let mut selector = AdapterSelector::new();
    selector.register_adapter(RecordingAdapter::new("gm"));
    selector.register_adapter(RecordingAdapter::new("ford"));
    selector.register_adapter(RecordingAdapter::new("gm"));

    assert_eq!(
        selector.brands(),
        vec![BrandTag::from("ford"), BrandTag::from("gm")]
    );
    assert!(selector.supports(&BrandTag::from("ford")));
}
