use async_trait::async_trait;

pub struct SetStockParams {
    pub id: i64,
    pub stock_quantity: u32,
}

#[async_trait]
pub trait SetStockUseCase: Send + Sync {
    /// Returns `false` when no product has the given id.
    async fn execute(&self, params: SetStockParams) -> bool;
}
