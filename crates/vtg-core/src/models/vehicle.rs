//! Vehicle attribute models

use serde::{Deserialize, Serialize};

/// Identity and body information about a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    /// Vehicle identification number
    pub vin: String,
    /// Exterior color, as reported by the manufacturer
    pub color: String,
    /// Number of doors (0 when the manufacturer does not say)
    pub door_count: u32,
    /// Drive train description (e.g. "v8", "electric")
    pub drive_train: String,
}

/// Lock state of a single door
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Door position, in the manufacturer's vocabulary (e.g. "frontLeft")
    pub location: String,
    pub locked: bool,
}

/// Fuel tank level.
///
/// `percent` is `None` when the vehicle has no fuel tank; it is serialized
/// as an explicit `null`, never omitted and never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    pub percent: Option<f64>,
}

/// Battery charge level.
///
/// `percent` is `None` when the vehicle has no traction battery.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    pub percent: Option<f64>,
}
