//! vtg-gateway - Brand dispatch for the vehicle telemetry gateway
//!
//! This crate provides the [`AdapterSelector`], a registration map from
//! [`BrandTag`] to brand adapters. Each capability call is routed to the
//! adapter registered for the vehicle's brand.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                   AdapterSelector                      │
//! │  - Holds BrandTag -> Arc<dyn VehicleAdapter>           │
//! │  - Routes each capability call by brand                │
//! │  - Fails with UnsupportedBrand for unknown tags        │
//! └───────────────────────────┬────────────────────────────┘
//!                             │
//!              ┌──────────────┼──────────────┐
//!              ▼              ▼              ▼
//!      ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//!      │  GmAdapter   │ │ FordAdapter  │ │     ...      │
//!      └──────────────┘ └──────────────┘ └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use vtg_gateway::AdapterSelector;
//! use vtg_gm::GmAdapter;
//!
//! let mut selector = AdapterSelector::new();
//! selector.register_adapter(Arc::new(GmAdapter::new(config)?));
//!
//! let info = selector.vehicle_info(&"gm".into(), "1234").await?;
//! ```

mod selector;

pub use selector::AdapterSelector;

// Re-export core types for convenience
pub use vtg_core::{AdapterError, AdapterResult, BrandTag, VehicleAdapter};
