//! Adapter Selector - routes capability calls to brand adapters
//!
//! The selector holds no business logic: it looks up the adapter registered
//! for a brand and forwards the call. The registry is filled at startup and
//! read-only afterwards, so concurrent requests never contend on a lock.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};
use vtg_core::{
    AdapterError, AdapterResult, Battery, BrandTag, Door, EngineCommand, EngineCommandResult,
    Fuel, VehicleAdapter, VehicleInfo,
};

/// Registration map from brand tag to adapter
#[derive(Clone, Default)]
pub struct AdapterSelector {
    /// Registered adapters by brand
    adapters: HashMap<BrandTag, Arc<dyn VehicleAdapter>>,
}

impl AdapterSelector {
    /// Create an empty selector
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its own brand tag.
    ///
    /// Registering a second adapter for the same brand replaces the first.
    pub fn register_adapter(&mut self, adapter: Arc<dyn VehicleAdapter>) {
        let brand = adapter.brand().clone();
        info!(brand = %brand, adapter = adapter.name(), "Registering adapter");
        if self.adapters.insert(brand.clone(), adapter).is_some() {
            warn!(brand = %brand, "Replaced previously registered adapter");
        }
    }

    /// Get the adapter for a brand
    pub fn get_adapter(&self, brand: &BrandTag) -> AdapterResult<&Arc<dyn VehicleAdapter>> {
        self.adapters.get(brand).ok_or_else(|| {
            warn!(brand = %brand, "No adapter registered for brand");
            AdapterError::UnsupportedBrand(format!("brand {} not found", brand))
        })
    }

    /// Whether an adapter is registered for the brand
    pub fn supports(&self, brand: &BrandTag) -> bool {
        self.adapters.contains_key(brand)
    }

    /// List registered brand tags, sorted
    pub fn brands(&self) -> Vec<BrandTag> {
        let mut brands: Vec<BrandTag> = self.adapters.keys().cloned().collect();
        brands.sort();
        brands
    }

    pub async fn vehicle_info(
        &self,
        brand: &BrandTag,
        vehicle_id: &str,
    ) -> AdapterResult<VehicleInfo> {
        let adapter = self.get_adapter(brand)?;
        debug!(brand = %brand, vehicle_id = %vehicle_id, "Dispatching vehicle_info");
        adapter.vehicle_info(vehicle_id).await
    }

    pub async fn door_status(&self, brand: &BrandTag, vehicle_id: &str) -> AdapterResult<Vec<Door>> {
        let adapter = self.get_adapter(brand)?;
        debug!(brand = %brand, vehicle_id = %vehicle_id, "Dispatching door_status");
        adapter.door_status(vehicle_id).await
    }

    pub async fn fuel_level(&self, brand: &BrandTag, vehicle_id: &str) -> AdapterResult<Fuel> {
        let adapter = self.get_adapter(brand)?;
        debug!(brand = %brand, vehicle_id = %vehicle_id, "Dispatching fuel_level");
        adapter.fuel_level(vehicle_id).await
    }

    pub async fn battery_level(&self, brand: &BrandTag, vehicle_id: &str) -> AdapterResult<Battery> {
        let adapter = self.get_adapter(brand)?;
        debug!(brand = %brand, vehicle_id = %vehicle_id, "Dispatching battery_level");
        adapter.battery_level(vehicle_id).await
    }

    pub async fn set_engine_state(
        &self,
        brand: &BrandTag,
        vehicle_id: &str,
        command: EngineCommand,
    ) -> AdapterResult<EngineCommandResult> {
        let adapter = self.get_adapter(brand)?;
        debug!(
            brand = %brand,
            vehicle_id = %vehicle_id,
            command = %command,
            "Dispatching set_engine_state"
        );
        adapter.set_engine_state(vehicle_id, command).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selector() {
        let selector = AdapterSelector::new();
        assert!(selector.brands().is_empty());
        assert!(!selector.supports(&BrandTag::from("gm")));
    }

    #[test]
    fn test_unknown_brand_is_unsupported() {
        let selector = AdapterSelector::new();
        let err = selector.get_adapter(&BrandTag::from("ford")).err().unwrap();
        match err {
            AdapterError::UnsupportedBrand(msg) => assert_eq!(msg, "brand ford not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
