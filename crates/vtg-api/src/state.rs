//! Application state for the vehicle API

use std::sync::Arc;

use vtg_core::{BrandTag, VehicleResolver};
use vtg_gateway::AdapterSelector;

use crate::error::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Vehicle id to brand lookup
    resolver: VehicleResolver,
    /// Registered brand adapters
    selector: Arc<AdapterSelector>,
}

impl AppState {
    /// Create a new AppState from a resolver and a filled selector
    pub fn new(resolver: VehicleResolver, selector: AdapterSelector) -> Self {
        Self {
            resolver,
            selector: Arc::new(selector),
        }
    }

    pub fn selector(&self) -> &AdapterSelector {
        &self.selector
    }

    /// Resolve the brand for a vehicle
    pub async fn brand_for(&self, vehicle_id: &str) -> Result<BrandTag, ApiError> {
        Ok(self.resolver.resolve(vehicle_id).await?)
    }
}
