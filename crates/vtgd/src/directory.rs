//! PostgreSQL-backed vehicle directory
//!
//! Looks up brands in the `vehicle_brands` table. Query failures are
//! reported as [`AdapterError::Internal`] so the API answers 500.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use vtg_core::{AdapterError, AdapterResult, BrandSource, BrandTag};

/// Brand source over a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgBrandSource {
    pool: PgPool,
}

impl PgBrandSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to PostgreSQL and create the directory table if needed.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        tracing::info!("running database migrations");
        sqlx::raw_sql(include_str!("../migrations/001_vehicle_brands.sql"))
            .execute(&pool)
            .await?;
        tracing::info!("migrations complete");

        Ok(Self::new(pool))
    }

    /// Number of vehicles in the directory
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicle_brands")
            .fetch_one(&self.pool)
            .await
    }
}

#[async_trait]
impl BrandSource for PgBrandSource {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    async fn brand_for(&self, vehicle_id: &str) -> AdapterResult<Option<BrandTag>> {
        let brand = sqlx::query_scalar::<_, String>(
            "SELECT brand FROM vehicle_brands WHERE vehicle_id = $1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdapterError::Internal(format!("vehicle directory lookup failed: {}", e)))?;

        Ok(brand.map(BrandTag::from))
    }
}
