use async_trait::async_trait;

use crate::domain::catalog::model::Product;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// Inclusive bounds; a sentinel or infinite `max` is unbounded.
    PriceRange { min: f64, max: f64 },
    MinRating(f64),
    Favorites,
    InStock,
    Discounted,
    CategoryId(i64),
}

pub struct FilterProductsParams {
    pub filter: ProductFilter,
}

#[async_trait]
pub trait FilterProductsUseCase: Send + Sync {
    async fn execute(&self, params: FilterProductsParams) -> Vec<Product>;
}
