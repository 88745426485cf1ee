use async_trait::async_trait;

use crate::domain::catalog::model::Product;

pub struct GetProductByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams) -> Option<Product>;
}
