//! GmAdapter - VehicleAdapter backed by the GM vehicle API

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;
use vtg_core::{
    AdapterResult, Battery, BrandTag, Door, EngineCommand, EngineCommandResult, Fuel,
    VehicleAdapter, VehicleInfo,
};

use crate::client::{endpoints, GmClient, ResponseMode};
use crate::config::GmConfig;
use crate::error::Result;
use crate::translate;

/// A `VehicleAdapter` for GM vehicles.
///
/// Each capability is one remote call followed by one translation; the
/// adapter holds no per-vehicle state.
#[derive(Debug, Clone)]
pub struct GmAdapter {
    brand: BrandTag,
    client: GmClient,
}

impl GmAdapter {
    /// Brand tag this adapter registers under
    pub const BRAND: &'static str = "gm";

    pub fn new(client: GmClient) -> Self {
        Self {
            brand: BrandTag::from(Self::BRAND),
            client,
        }
    }

    /// Build the adapter and its client from configuration
    pub fn from_config(config: &GmConfig) -> Result<Self> {
        Ok(Self::new(GmClient::from_config(config)?))
    }

    pub fn client(&self) -> &GmClient {
        &self.client
    }

    async fn data(&self, endpoint: &str, vehicle_id: &str) -> AdapterResult<Value> {
        Ok(self
            .client
            .call(endpoint, vehicle_id, None, ResponseMode::Data)
            .await?)
    }
}

#[async_trait]
impl VehicleAdapter for GmAdapter {
    fn brand(&self) -> &BrandTag {
        &self.brand
    }

    fn name(&self) -> &str {
        "GM vehicle API"
    }

    async fn vehicle_info(&self, vehicle_id: &str) -> AdapterResult<VehicleInfo> {
        let data = self.data(endpoints::VEHICLE_INFO, vehicle_id).await?;
        translate::translate_vehicle_info(&data)
    }

    async fn door_status(&self, vehicle_id: &str) -> AdapterResult<Vec<Door>> {
        let data = self.data(endpoints::SECURITY_STATUS, vehicle_id).await?;
        translate::translate_door_status(&data)
    }

    async fn fuel_level(&self, vehicle_id: &str) -> AdapterResult<Fuel> {
        let data = self.data(endpoints::ENERGY, vehicle_id).await?;
        translate::translate_fuel_level(&data)
    }

    async fn battery_level(&self, vehicle_id: &str) -> AdapterResult<Battery> {
        let data = self.data(endpoints::ENERGY, vehicle_id).await?;
        translate::translate_battery_level(&data)
    }

    async fn set_engine_state(
        &self,
        vehicle_id: &str,
        command: EngineCommand,
    ) -> AdapterResult<EngineCommandResult> {
        let token = translate::engine_command_token(command);
        debug!(vehicle_id = %vehicle_id, command = token, "Sending engine command");

        let mut extra = Map::new();
        extra.insert("command".to_string(), Value::String(token.to_string()));

        let envelope = self
            .client
            .call(endpoints::ACTION_ENGINE, vehicle_id, Some(extra), ResponseMode::Raw)
            .await?;
        let action_result = translate::action_result(&envelope)?;
        translate::translate_engine_result(&action_result)
    }
}
