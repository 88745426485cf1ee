use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::query;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::get_products::{GetProductsParams, GetProductsUseCase};
use crate::domain::logger::Logger;

pub struct GetProductsUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(&self, params: GetProductsParams) -> Vec<Product> {
        let snapshot = self.store.snapshot().await;
        let products = match params.category.as_deref() {
            Some(category) => {
                self.logger
                    .info(&format!("Fetching products in category: {}", category));
                query::by_category(&*snapshot, category)
            }
            None => {
                self.logger.info("Fetching all products");
                query::all(&*snapshot)
            }
        };
        self.logger
            .info(&format!("Found {} products", products.len()));
        products
    }
}
