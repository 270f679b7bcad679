//! Normalized domain model shared by every brand adapter

mod brand;
mod engine;
mod vehicle;

pub use brand::*;
pub use engine::*;
pub use vehicle::*;
