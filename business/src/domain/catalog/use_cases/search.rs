use async_trait::async_trait;

use crate::domain::catalog::model::Product;

pub struct SearchProductsParams {
    pub query: String,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Vec<Product>;
}
