//! vtg-core - Core traits and types for the vehicle telemetry gateway
//!
//! This crate provides the normalized domain model and the abstractions that
//! let brand-specific adapters (GM, ...) serve the same REST API:
//!
//! - [`VehicleAdapter`]: the fixed capability interface every brand implements
//! - [`VehicleResolver`]: maps an opaque vehicle id to the [`BrandTag`] of its adapter
//! - [`AdapterError`]: the single error taxonomy shared by all layers

pub mod adapter;
pub mod error;
pub mod models;
pub mod resolver;
pub mod translation;

pub use adapter::VehicleAdapter;
pub use error::{AdapterError, AdapterResult, TranslationError};
pub use models::*;
pub use resolver::{BrandSource, StaticBrandSource, VehicleResolver};
