use async_trait::async_trait;

use crate::domain::catalog::model::Product;

pub struct GetProductsParams {
    /// Category name to restrict to; `None` or `"All"` returns every product.
    pub category: Option<String>,
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductsParams) -> Vec<Product>;
}
