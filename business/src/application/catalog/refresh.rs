use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::CatalogSummary;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::logger::Logger;

pub struct RefreshCatalogUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshCatalogUseCase for RefreshCatalogUseCaseImpl {
    async fn execute(&self) -> CatalogSummary {
        self.logger.info("Refreshing catalog");
        self.store.invalidate().await;
        let snapshot = self.store.load(true).await;
        let summary = CatalogSummary::from(&*snapshot);
        if snapshot.is_fallback() {
            self.logger.warn(&format!(
                "Catalog refresh fell back to built-in data with {} products",
                summary.product_count
            ));
        } else {
            self.logger.info(&format!(
                "Catalog refreshed from {} with {} products",
                summary.origin, summary.product_count
            ));
        }
        summary
    }
}
