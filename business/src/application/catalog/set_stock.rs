use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::set_stock::{SetStockParams, SetStockUseCase};
use crate::domain::logger::Logger;

pub struct SetStockUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetStockUseCase for SetStockUseCaseImpl {
    async fn execute(&self, params: SetStockParams) -> bool {
        let updated = self
            .store
            .set_stock(params.id, params.stock_quantity)
            .await;
        if updated {
            self.logger.info(&format!(
                "Product {} stock set to {}",
                params.id, params.stock_quantity
            ));
        } else {
            self.logger.warn(&format!(
                "Ignoring stock change for unknown product {}",
                params.id
            ));
        }
        updated
    }
}
