//! Service catalog service (read-only booking-page data)

use crate::{
    error::AppResult,
    models::{Provider, ServiceOffering},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a provider's public page header data
    pub async fn get_provider(&self, provider_id: i32) -> AppResult<Provider> {
        self.repository.providers.get_by_id(provider_id).await
    }

    /// List a provider's active services
    pub async fn list_services(&self, provider_id: i32) -> AppResult<Vec<ServiceOffering>> {
        // Verify provider exists
        self.repository.providers.get_by_id(provider_id).await?;
        self.repository.services.list_for_provider(provider_id).await
    }

    /// Get a single service offering
    pub async fn get_service(&self, service_id: i32) -> AppResult<ServiceOffering> {
        self.repository.services.get_by_id(service_id).await
    }
}
