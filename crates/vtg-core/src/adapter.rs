//! VehicleAdapter trait - the core abstraction for brand adapters

use async_trait::async_trait;

use crate::error::AdapterResult;
use crate::models::{
    Battery, BrandTag, Door, EngineCommand, EngineCommandResult, Fuel, VehicleInfo,
};

/// The capability interface every brand adapter implements.
///
/// An adapter bridges one manufacturer's remote API to the normalized
/// domain model. Implementations are stateless per request: every call
/// performs a fresh upstream round-trip and translates the result.
///
/// Adding a brand means implementing this trait and registering the
/// adapter with the selector; callers and other adapters stay unchanged.
#[async_trait]
pub trait VehicleAdapter: Send + Sync {
    /// Brand tag this adapter is registered under
    fn brand(&self) -> &BrandTag;

    /// Human-readable adapter name (for logs)
    fn name(&self) -> &str;

    /// Get identity and body information
    async fn vehicle_info(&self, vehicle_id: &str) -> AdapterResult<VehicleInfo>;

    /// Get the lock state of every door, in upstream order
    async fn door_status(&self, vehicle_id: &str) -> AdapterResult<Vec<Door>>;

    /// Get the fuel tank level
    async fn fuel_level(&self, vehicle_id: &str) -> AdapterResult<Fuel>;

    /// Get the battery charge level
    async fn battery_level(&self, vehicle_id: &str) -> AdapterResult<Battery>;

    /// Start or stop the engine
    async fn set_engine_state(
        &self,
        vehicle_id: &str,
        command: EngineCommand,
    ) -> AdapterResult<EngineCommandResult>;
}
