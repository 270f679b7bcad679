//! HTTP request handlers for the vehicle API
//!
//! Handlers resolve the vehicle's brand and forward to the adapter selector.
//! They are brand-agnostic and hold no translation logic.

pub mod vehicles;
