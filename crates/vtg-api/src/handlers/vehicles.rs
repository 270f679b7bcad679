//! Vehicle capability handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use vtg_core::{Battery, Door, EngineCommand, EngineCommandResult, Fuel, VehicleInfo};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /vehicles/{vehicle_id}/engine`
#[derive(Debug, Deserialize)]
pub struct EngineRequest {
    pub action: String,
}

/// GET /vehicles/{vehicle_id}
pub async fn get_vehicle_info(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<VehicleInfo>, ApiError> {
    let brand = state.brand_for(&vehicle_id).await?;
    let info = state.selector().vehicle_info(&brand, &vehicle_id).await?;
    Ok(Json(info))
}

/// GET /vehicles/{vehicle_id}/doors
pub async fn get_doors(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Vec<Door>>, ApiError> {
    let brand = state.brand_for(&vehicle_id).await?;
    let doors = state.selector().door_status(&brand, &vehicle_id).await?;
    Ok(Json(doors))
}

/// GET /vehicles/{vehicle_id}/fuel
pub async fn get_fuel(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Fuel>, ApiError> {
    let brand = state.brand_for(&vehicle_id).await?;
    let fuel = state.selector().fuel_level(&brand, &vehicle_id).await?;
    Ok(Json(fuel))
}

/// GET /vehicles/{vehicle_id}/battery
pub async fn get_battery(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Battery>, ApiError> {
    let brand = state.brand_for(&vehicle_id).await?;
    let battery = state.selector().battery_level(&brand, &vehicle_id).await?;
    Ok(Json(battery))
}

/// POST /vehicles/{vehicle_id}/engine
///
/// The action is validated before the vehicle is resolved, so a bad token
/// is a 400 even for unknown vehicles.
pub async fn post_engine(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    body: Result<Json<EngineRequest>, JsonRejection>,
) -> Result<Json<EngineCommandResult>, ApiError> {
    let Json(request) = body?;
    let command: EngineCommand = request.action.parse()?;

    let brand = state.brand_for(&vehicle_id).await?;
    info!(vehicle_id = %vehicle_id, brand = %brand, command = %command, "Engine command");
    let result = state
        .selector()
        .set_engine_state(&brand, &vehicle_id, command)
        .await?;
    Ok(Json(result))
}
