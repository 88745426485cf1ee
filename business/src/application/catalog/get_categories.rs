use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Category;
use crate::domain::catalog::query;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetCategoriesUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Vec<Category> {
        self.logger.info("Fetching categories");
        let categories = query::categories_with_counts(&*self.store.snapshot().await);
        self.logger
            .info(&format!("Found {} categories", categories.len()));
        categories
    }
}
