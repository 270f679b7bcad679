//! Test utilities for vtg-gm
//!
//! [`MockGmServer`] is an in-process fake of the GM vehicle API. It serves
//! the four GM endpoints from built-in fixtures:
//!
//! | Vehicle | Body style | Drive train | Fuel | Battery |
//! |---|---|---|---|---|
//! | `1234` | four-door sedan | v8 | 30.2 | null |
//! | `1235` | two-door coupe | electric | null | 73.3 |
//!
//! Unknown ids get envelope status `"404"`. The engine endpoint answers
//! `START_VEHICLE` with `EXECUTED`, `STOP_VEHICLE` with `FAILED`, and any
//! other command with envelope status `"400"`.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::client::endpoints;
use crate::config::GmConfig;

/// A request received by the mock, for assertions on outgoing bodies
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub body: Value,
}

type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// A fake GM API that shuts down when dropped
pub struct MockGmServer {
    pub addr: SocketAddr,
    requests: RequestLog,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl MockGmServer {
    /// Start the fake GM API with the built-in fixtures
    pub async fn start() -> std::io::Result<Self> {
        let requests = RequestLog::default();
        let router = fixture_router(requests.clone());
        Self::serve(router, requests).await
    }

    /// Serve an arbitrary router in place of the fixtures, e.g. to fake
    /// malformed envelopes
    pub async fn start_router(router: Router) -> std::io::Result<Self> {
        Self::serve(router, RequestLog::default()).await
    }

    async fn serve(router: Router, requests: RequestLog) -> std::io::Result<Self> {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        // Give server a moment to start
        tokio::time::sleep(Duration::from_millis(10)).await;

        Ok(Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the mock server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Adapter configuration pointing at this server, with short timeouts
    pub fn config(&self) -> GmConfig {
        GmConfig {
            base_url: self.base_url(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        match self.requests.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for MockGmServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

fn fixture_router(requests: RequestLog) -> Router {
    Router::new()
        .route(&format!("/{}", endpoints::VEHICLE_INFO), post(vehicle_info))
        .route(&format!("/{}", endpoints::SECURITY_STATUS), post(security_status))
        .route(&format!("/{}", endpoints::ENERGY), post(energy))
        .route(&format!("/{}", endpoints::ACTION_ENGINE), post(action_engine))
        .with_state(requests)
}

fn record(requests: &RequestLog, path: &str, body: &Value) {
    let entry = RecordedRequest {
        path: path.to_string(),
        body: body.clone(),
    };
    match requests.lock() {
        Ok(mut log) => log.push(entry),
        Err(poisoned) => poisoned.into_inner().push(entry),
    }
}

fn wrap(kind: &str, value: &str) -> Value {
    json!({"type": kind, "value": value})
}

fn not_found(service: &str, id: &str) -> Value {
    json!({
        "service": service,
        "status": "404",
        "reason": format!("Vehicle id: {} not found.", id),
    })
}

fn vehicle_id(body: &Value) -> &str {
    body.get("id").and_then(Value::as_str).unwrap_or_default()
}

async fn vehicle_info(State(requests): State<RequestLog>, Json(body): Json<Value>) -> Json<Value> {
    record(&requests, endpoints::VEHICLE_INFO, &body);
    let id = vehicle_id(&body);
    let data = match id {
        "1234" => json!({
            "vin": wrap("String", "123123412412"),
            "color": wrap("String", "Metallic Silver"),
            "fourDoorSedan": wrap("Boolean", "True"),
            "twoDoorCoupe": wrap("Boolean", "False"),
            "driveTrain": wrap("String", "v8"),
        }),
        "1235" => json!({
            "vin": wrap("String", "1235AZ91XP"),
            "color": wrap("String", "Forest Green"),
            "fourDoorSedan": wrap("Boolean", "False"),
            "twoDoorCoupe": wrap("Boolean", "True"),
            "driveTrain": wrap("String", "electric"),
        }),
        _ => return Json(not_found("getVehicleInfo", id)),
    };
    Json(json!({"service": "getVehicleInfo", "status": "200", "data": data}))
}

fn door(location: &str, locked: &str) -> Value {
    json!({
        "location": wrap("String", location),
        "locked": wrap("Boolean", locked),
    })
}

async fn security_status(
    State(requests): State<RequestLog>,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&requests, endpoints::SECURITY_STATUS, &body);
    let id = vehicle_id(&body);
    let values = match id {
        "1234" => json!([
            door("frontLeft", "False"),
            door("frontRight", "True"),
            door("backLeft", "False"),
            door("backRight", "True"),
        ]),
        "1235" => json!([door("frontLeft", "True"), door("frontRight", "False")]),
        _ => return Json(not_found("getSecurityStatus", id)),
    };
    Json(json!({
        "service": "getSecurityStatus",
        "status": "200",
        "data": {"doors": {"type": "Array", "values": values}},
    }))
}

async fn energy(State(requests): State<RequestLog>, Json(body): Json<Value>) -> Json<Value> {
    record(&requests, endpoints::ENERGY, &body);
    let id = vehicle_id(&body);
    let (tank, battery) = match id {
        "1234" => (wrap("Number", "30.2"), wrap("Null", "null")),
        "1235" => (wrap("Null", "null"), wrap("Number", "73.3")),
        _ => return Json(not_found("getEnergy", id)),
    };
    Json(json!({
        "service": "getEnergyService",
        "status": "200",
        "data": {"tankLevel": tank, "batteryLevel": battery},
    }))
}

async fn action_engine(State(requests): State<RequestLog>, Json(body): Json<Value>) -> Json<Value> {
    record(&requests, endpoints::ACTION_ENGINE, &body);
    let id = vehicle_id(&body);
    if !matches!(id, "1234" | "1235") {
        return Json(not_found("actionEngine", id));
    }

    let outcome = match body.get("command").and_then(Value::as_str) {
        Some("START_VEHICLE") => "EXECUTED",
        Some("STOP_VEHICLE") => "FAILED",
        other => {
            return Json(json!({
                "service": "actionEngine",
                "status": "400",
                "reason": format!("Unknown command {}", other.unwrap_or("(none)")),
            }))
        }
    };
    Json(json!({
        "service": "actionEngine",
        "status": "200",
        "actionResult": {"status": outcome},
    }))
}
