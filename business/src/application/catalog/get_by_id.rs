use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::query;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetProductByIdUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Option<Product> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));
        let product = query::by_id(&*self.store.snapshot().await, params.id);
        if product.is_none() {
            self.logger
                .debug(&format!("No product with id {}", params.id));
        }
        product
    }
}
