//! Providers repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::provider::Provider,
};

#[derive(Clone)]
pub struct ProvidersRepository {
    pool: Pool<Postgres>,
}

impl ProvidersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get provider by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Provider> {
        sqlx::query_as::<_, Provider>("SELECT * FROM providers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Provider {} not found", id)))
    }

    /// Get provider by booking-page slug
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Provider> {
        sqlx::query_as::<_, Provider>("SELECT * FROM providers WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Provider '{}' not found", slug)))
    }
}
