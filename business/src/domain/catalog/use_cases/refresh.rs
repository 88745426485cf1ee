use async_trait::async_trait;

use crate::domain::catalog::model::CatalogSummary;

#[async_trait]
pub trait RefreshCatalogUseCase: Send + Sync {
    async fn execute(&self) -> CatalogSummary;
}
