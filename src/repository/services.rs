//! Service catalog repository (read paths used by the booking flow)

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::service::ServiceOffering,
};

#[derive(Clone)]
pub struct ServicesRepository {
    pool: Pool<Postgres>,
}

impl ServicesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a service offering by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<ServiceOffering> {
        sqlx::query_as::<_, ServiceOffering>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    /// List a provider's active services for the booking page
    pub async fn list_for_provider(&self, provider_id: i32) -> AppResult<Vec<ServiceOffering>> {
        let rows = sqlx::query_as::<_, ServiceOffering>(
            "SELECT * FROM services WHERE provider_id = $1 AND is_active ORDER BY name",
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
