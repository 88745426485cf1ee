use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::set_favorite::{SetFavoriteParams, SetFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct SetFavoriteUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetFavoriteUseCase for SetFavoriteUseCaseImpl {
    async fn execute(&self, params: SetFavoriteParams) -> bool {
        let updated = self
            .store
            .set_favorite(params.id, params.is_favorite)
            .await;
        if updated {
            self.logger.info(&format!(
                "Product {} favorite set to {}",
                params.id, params.is_favorite
            ));
        } else {
            self.logger.warn(&format!(
                "Ignoring favorite change for unknown product {}",
                params.id
            ));
        }
        updated
    }
}
