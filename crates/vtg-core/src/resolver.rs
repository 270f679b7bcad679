//! Vehicle identifier resolution
//!
//! Maps an opaque vehicle id to the [`BrandTag`] of the adapter that serves
//! it. The lookup data lives behind the [`BrandSource`] trait so the static
//! table can be swapped for a database without touching callers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{AdapterError, AdapterResult};
use crate::models::BrandTag;

/// Data source behind the resolver
#[async_trait]
pub trait BrandSource: Send + Sync {
    /// Short label for logs (e.g. "static", "postgres")
    fn kind(&self) -> &'static str;

    /// Look up the brand of a vehicle. `Ok(None)` means "no mapping".
    async fn brand_for(&self, vehicle_id: &str) -> AdapterResult<Option<BrandTag>>;
}

/// In-memory lookup table
#[derive(Debug, Clone, Default)]
pub struct StaticBrandSource {
    table: HashMap<String, BrandTag>,
}

impl StaticBrandSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping (builder style)
    pub fn with(mut self, vehicle_id: impl Into<String>, brand: impl Into<BrandTag>) -> Self {
        self.table.insert(vehicle_id.into(), brand.into());
        self
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over `(vehicle_id, brand)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (&str, &BrandTag)> {
        self.table.iter().map(|(id, brand)| (id.as_str(), brand))
    }
}

impl FromIterator<(String, BrandTag)> for StaticBrandSource {
    fn from_iter<I: IntoIterator<Item = (String, BrandTag)>>(iter: I) -> Self {
        Self {
            table: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl BrandSource for StaticBrandSource {
    fn kind(&self) -> &'static str {
        "static"
    }

    async fn brand_for(&self, vehicle_id: &str) -> AdapterResult<Option<BrandTag>> {
        Ok(self.table.get(vehicle_id).cloned())
    }
}

/// Resolves vehicle ids to brand tags
#[derive(Clone)]
pub struct VehicleResolver {
    source: Arc<dyn BrandSource>,
}

impl VehicleResolver {
    pub fn new(source: Arc<dyn BrandSource>) -> Self {
        Self { source }
    }

    /// Resolver over an in-memory table
    pub fn from_static(source: StaticBrandSource) -> Self {
        Self::new(Arc::new(source))
    }

    /// Resolve a vehicle id to its brand tag.
    ///
    /// Fails with [`AdapterError::NotFound`] when the id has no mapping.
    pub async fn resolve(&self, vehicle_id: &str) -> AdapterResult<BrandTag> {
        match self.source.brand_for(vehicle_id).await {
            Ok(Some(brand)) => {
                debug!(
                    vehicle_id = %vehicle_id,
                    brand = %brand,
                    source = self.source.kind(),
                    "Resolved vehicle brand"
                );
                Ok(brand)
            }
            Ok(None) => {
                warn!(
                    vehicle_id = %vehicle_id,
                    source = self.source.kind(),
                    "No brand mapping for vehicle"
                );
                Err(AdapterError::NotFound(format!(
                    "unable to find brand for vehicle_id {}",
                    vehicle_id
                )))
            }
            Err(e) => {
                warn!(
                    vehicle_id = %vehicle_id,
                    source = self.source.kind(),
                    error = %e,
                    "Brand lookup failed"
                );
                Err(e)
            }
        }
    }
}
