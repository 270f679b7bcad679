//! Translation from GM payloads to the normalized model
//!
//! GM wraps every scalar as `{"type": ..., "value": ...}` and encodes
//! booleans and nulls as strings (`"True"`, `"null"`). That coercion happens
//! here and nowhere else. Each entry point runs through
//! [`vtg_core::translation::guard`] so structural failures surface as
//! [`AdapterError::Translation`].

use serde_json::Value;
use vtg_core::translation::guard;
use vtg_core::{
    AdapterError, AdapterResult, Battery, Door, EngineCommand, EngineCommandResult, Fuel,
    TranslationError, VehicleInfo,
};

/// GM's string encoding of `true`
const GM_TRUE: &str = "True";

/// GM engine command tokens
pub const START_VEHICLE: &str = "START_VEHICLE";
pub const STOP_VEHICLE: &str = "STOP_VEHICLE";

/// Translate `getVehicleInfoService` data into [`VehicleInfo`].
///
/// `doorCount` is derived from the body-style flags: a coupe wins over a
/// sedan, and neither flag yields 0.
pub fn translate_vehicle_info(data: &Value) -> AdapterResult<VehicleInfo> {
    guard("vehicle_info", data, |data| {
        let door_count = if flag(data, "twoDoorCoupe") {
            2
        } else if flag(data, "fourDoorSedan") {
            4
        } else {
            0
        };

        Ok(VehicleInfo {
            vin: required_value_str(data, "vin")?.to_string(),
            color: required_value_str(data, "color")?.to_string(),
            door_count,
            drive_train: required_value_str(data, "driveTrain")?.to_string(),
        })
    })
}

/// Translate `getSecurityStatusService` data into doors, in upstream order.
///
/// A door is locked only when its lock state is the string `"True"`.
pub fn translate_door_status(data: &Value) -> AdapterResult<Vec<Door>> {
    guard("door_status", data, |data| {
        let doors = match data.get("doors") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Object(map)) if map.is_empty() => return Ok(Vec::new()),
            Some(Value::Array(list)) if list.is_empty() => return Ok(Vec::new()),
            Some(doors) => doors,
        };

        let values = match doors.get("values") {
            Some(Value::Array(values)) => values,
            Some(other) => return Err(TranslationError::mismatch("doors.values", "array", other)),
            None => return Err(TranslationError::missing("doors.values")),
        };

        values
            .iter()
            .enumerate()
            .map(|(i, door)| {
                let field = |name: &str| format!("doors.values[{i}].{name}");
                let location = wrapped(door, "location")
                    .ok_or_else(|| TranslationError::missing(field("location")))?;
                let location = location
                    .as_str()
                    .ok_or_else(|| TranslationError::mismatch(field("location"), "string", location))?;
                let locked = wrapped(door, "locked")
                    .ok_or_else(|| TranslationError::missing(field("locked")))?;

                Ok(Door {
                    location: location.to_string(),
                    locked: is_gm_true(locked),
                })
            })
            .collect()
    })
}

/// Translate `getEnergyService` data into [`Fuel`] (`tankLevel`).
pub fn translate_fuel_level(data: &Value) -> AdapterResult<Fuel> {
    guard("fuel_level", data, |data| {
        Ok(Fuel {
            percent: percent(data, "tankLevel")?,
        })
    })
}

/// Translate `getEnergyService` data into [`Battery`] (`batteryLevel`).
pub fn translate_battery_level(data: &Value) -> AdapterResult<Battery> {
    guard("battery_level", data, |data| {
        Ok(Battery {
            percent: percent(data, "batteryLevel")?,
        })
    })
}

/// GM's command token for an engine command
pub fn engine_command_token(command: EngineCommand) -> &'static str {
    match command {
        EngineCommand::Start => START_VEHICLE,
        EngineCommand::Stop => STOP_VEHICLE,
    }
}

/// Map a normalized engine action token to GM's command token.
pub fn translate_engine_command(action: &str) -> AdapterResult<&'static str> {
    action.parse::<EngineCommand>().map(engine_command_token)
}

/// Map GM's `actionResult` object to an [`EngineCommandResult`].
///
/// `EXECUTED` is a success and `FAILED` an error. Any other status is an
/// upstream failure since its meaning is unknown.
pub fn translate_engine_result(action_result: &Value) -> AdapterResult<EngineCommandResult> {
    let status = guard("set_engine_state", action_result, |result| {
        let status = result
            .get("status")
            .ok_or_else(|| TranslationError::missing("actionResult.status"))?;
        status
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| TranslationError::mismatch("actionResult.status", "string", status))
    })?;

    match status.as_str() {
        "EXECUTED" => Ok(EngineCommandResult::success()),
        "FAILED" => Ok(EngineCommandResult::error()),
        other => Err(AdapterError::upstream(
            None,
            format!("unrecognized engine action status {}", other),
        )),
    }
}

/// Pull `actionResult` out of a raw `actionEngineService` envelope.
pub fn action_result(envelope: &Value) -> AdapterResult<Value> {
    guard("set_engine_state", envelope, |envelope| {
        envelope
            .get("actionResult")
            .cloned()
            .ok_or_else(|| TranslationError::missing("actionResult"))
    })
}

/// The `value` inside a GM `{type, value}` wrapper
fn wrapped<'a>(data: &'a Value, name: &str) -> Option<&'a Value> {
    data.get(name).and_then(|field| field.get("value"))
}

fn required_value_str<'a>(data: &'a Value, name: &str) -> Result<&'a str, TranslationError> {
    let value = wrapped(data, name).ok_or_else(|| TranslationError::missing(format!("{name}.value")))?;
    value
        .as_str()
        .ok_or_else(|| TranslationError::mismatch(format!("{name}.value"), "string", value))
}

/// Only the exact string `"True"` is true
fn is_gm_true(value: &Value) -> bool {
    value.as_str() == Some(GM_TRUE)
}

/// Body-style flag; anything but `"True"`, absence included, reads as false
fn flag(data: &Value, name: &str) -> bool {
    wrapped(data, name).is_some_and(is_gm_true)
}

/// Percentage that may be absent, `null` or the string `"null"`
fn percent(data: &Value, name: &str) -> Result<Option<f64>, TranslationError> {
    let field = format!("{name}.value");
    let parsed = match wrapped(data, name) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("null") {
                return Ok(None);
            }
            s.parse::<f64>()
                .map_err(|_| TranslationError::invalid(&field, s, "a number"))?
        }
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| TranslationError::invalid(&field, n.to_string(), "a number"))?,
        Some(other) => return Err(TranslationError::mismatch(field, "string", other)),
    };

    if parsed.is_finite() {
        Ok(Some(parsed))
    } else {
        Err(TranslationError::invalid(field, parsed.to_string(), "a finite number"))
    }
}
