use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::FilterOptions;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::get_filter_options::GetFilterOptionsUseCase;
use crate::domain::logger::Logger;

pub struct GetFilterOptionsUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFilterOptionsUseCase for GetFilterOptionsUseCaseImpl {
    async fn execute(&self) -> FilterOptions {
        self.logger.debug("Fetching filter options");
        self.store.snapshot().await.filters.clone()
    }
}
