use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::query;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::logger::Logger;

pub struct SearchProductsUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Vec<Product> {
        self.logger
            .info(&format!("Searching products for '{}'", params.query));
        let results = query::search(&*self.store.snapshot().await, &params.query);
        self.logger
            .info(&format!("Search matched {} products", results.len()));
        results
    }
}
