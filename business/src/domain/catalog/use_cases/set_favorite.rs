use async_trait::async_trait;

pub struct SetFavoriteParams {
    pub id: i64,
    pub is_favorite: bool,
}

#[async_trait]
pub trait SetFavoriteUseCase: Send + Sync {
    /// Returns `false` when no product has the given id.
    async fn execute(&self, params: SetFavoriteParams) -> bool;
}
