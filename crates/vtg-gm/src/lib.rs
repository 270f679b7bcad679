//! vtg-gm - GM brand adapter
//!
//! Implements [`VehicleAdapter`](vtg_core::VehicleAdapter) for vehicles served
//! by the GM vehicle API. Transport and translation are kept apart:
//!
//! - [`GmClient`]: the remote call primitive (envelope handling, timeouts)
//! - [`translate`]: pure functions from GM payloads to the normalized model
//! - [`GmAdapter`]: wires the two together per capability
//!
//! # Example
//!
//! ```rust,no_run
//! use vtg_core::VehicleAdapter;
//! use vtg_gm::{GmAdapter, GmConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = GmAdapter::from_config(&GmConfig::default())?;
//!     let info = adapter.vehicle_info("1234").await?;
//!     println!("{} ({} doors)", info.vin, info.door_count);
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module runs a fake GM API in-process:
//!
//! ```rust,ignore
//! use vtg_gm::testing::MockGmServer;
//!
//! let upstream = MockGmServer::start().await?;
//! let adapter = GmAdapter::from_config(&upstream.config())?;
//! ```

mod adapter;
mod client;
mod config;
mod error;
pub mod testing;
pub mod translate;

pub use adapter::GmAdapter;
pub use client::{endpoints, GmClient, ResponseMode};
pub use config::GmConfig;
pub use error::{GmClientError, Result, UPSTREAM_UNREACHABLE};
