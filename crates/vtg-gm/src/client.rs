//! GM API HTTP client
//!
//! Every GM endpoint takes a `POST` with `{id, responseType: "JSON"}` and
//! answers with an envelope `{status, data?, reason?}`. [`GmClient::call`]
//! owns that envelope handling so the adapter only deals with payloads.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::GmConfig;
use crate::error::{GmClientError, Result};

/// GM endpoint names
pub mod endpoints {
    pub const VEHICLE_INFO: &str = "getVehicleInfoService";
    pub const SECURITY_STATUS: &str = "getSecurityStatusService";
    pub const ENERGY: &str = "getEnergyService";
    pub const ACTION_ENGINE: &str = "actionEngineService";
}

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// What [`GmClient::call`] hands back on success
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// Only the envelope's `data` field
    #[default]
    Data,
    /// The whole envelope
    Raw,
}

/// GM vehicle API client
#[derive(Debug, Clone)]
pub struct GmClient {
    client: Client,
    base_url: Url,
}

impl GmClient {
    /// Create a new client with default timeouts
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the GM API (e.g., "http://gmapi.azurewebsites.net")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Create a client from adapter configuration
    pub fn from_config(config: &GmConfig) -> Result<Self> {
        Self::with_config(&config.base_url, config.timeout(), config.connect_timeout())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Call a GM endpoint for a vehicle.
    ///
    /// `extra_fields` are merged into the request body and win over `id` and
    /// `responseType` on collision. The envelope's `status` decides success;
    /// when it is absent the HTTP status code is used instead.
    #[instrument(skip(self, extra_fields))]
    pub async fn call(
        &self,
        endpoint: &str,
        vehicle_id: &str,
        extra_fields: Option<Map<String, Value>>,
        mode: ResponseMode,
    ) -> Result<Value> {
        if vehicle_id.is_empty() {
            return Err(GmClientError::InvalidArgument(
                "vehicle_id must not be empty".to_string(),
            ));
        }
        if endpoint.is_empty() {
            return Err(GmClientError::InvalidArgument(
                "endpoint must not be empty".to_string(),
            ));
        }

        let url = self.endpoint_url(endpoint);

        let mut body = Map::new();
        body.insert("id".to_string(), Value::String(vehicle_id.to_string()));
        body.insert("responseType".to_string(), Value::String("JSON".to_string()));
        if let Some(extra) = extra_fields {
            body.extend(extra);
        }

        debug!(url = %url, "Calling GM API");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport)?;
        let http_status = response.status();

        let envelope: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GmClientError::Timeout
            } else {
                GmClientError::ParseError(e.to_string())
            }
        })?;

        let status = match envelope.get("status") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => http_status.as_u16().to_string(),
        };

        if status != "200" {
            let reason = envelope
                .get("reason")
                .and_then(Value::as_str)
                .unwrap_or("no reason given")
                .to_string();
            warn!(endpoint, vehicle_id, status = %status, reason = %reason, "GM API reported failure");
            return Err(GmClientError::status(status, reason));
        }

        match mode {
            ResponseMode::Raw => Ok(envelope),
            ResponseMode::Data => match envelope {
                Value::Object(mut fields) => match fields.remove("data") {
                    Some(Value::Null) | None => Err(GmClientError::EmptyData),
                    Some(data) => Ok(data),
                },
                _ => Err(GmClientError::EmptyData),
            },
        }
    }

    /// `{base_url}{endpoint}` with a single `/` between them
    fn endpoint_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        if endpoint.starts_with('/') {
            format!("{}{}", base, endpoint)
        } else {
            format!("{}/{}", base, endpoint)
        }
    }

    fn map_transport(e: reqwest::Error) -> GmClientError {
        if e.is_timeout() {
            GmClientError::Timeout
        } else {
            GmClientError::HttpError(e)
        }
    }
}
