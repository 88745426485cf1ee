use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::use_cases::filter::{
    FilterProductsParams, FilterProductsUseCase, ProductFilter,
};
use business::domain::catalog::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::catalog::use_cases::get_products::{GetProductsParams, GetProductsUseCase};
use business::domain::catalog::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::catalog::use_cases::set_favorite::{SetFavoriteParams, SetFavoriteUseCase};
use business::domain::catalog::use_cases::set_stock::{SetStockParams, SetStockUseCase};
use business::domain::catalog::model::Product;
use business::domain::catalog::value_objects::UNBOUNDED_PRICE;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductResponse, SetFavoriteRequest, SetStockRequest};
use crate::api::product::error_mapper::ProductApiError;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_products_use_case: Arc<dyn GetProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    filter_use_case: Arc<dyn FilterProductsUseCase>,
    set_favorite_use_case: Arc<dyn SetFavoriteUseCase>,
    set_stock_use_case: Arc<dyn SetStockUseCase>,
}

impl ProductApi {
    pub fn new(
        get_products_use_case: Arc<dyn GetProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        filter_use_case: Arc<dyn FilterProductsUseCase>,
        set_favorite_use_case: Arc<dyn SetFavoriteUseCase>,
        set_stock_use_case: Arc<dyn SetStockUseCase>,
    ) -> Self {
        Self {
            get_products_use_case,
            get_by_id_use_case,
            search_use_case,
            filter_use_case,
            set_favorite_use_case,
            set_stock_use_case,
        }
    }

    async fn product_or_not_found(&self, id: i64) -> ProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Some(product) => ProductByIdResponse::Ok(Json(product.into())),
            None => ProductByIdResponse::NotFound(not_found(id)),
        }
    }
}

fn not_found(id: i64) -> Json<ErrorResponse> {
    tracing::debug!(id, "product not in current catalog");
    ProductApiError::NotFound.into_error_response().1
}

fn to_responses(products: Vec<Product>) -> Json<Vec<ProductResponse>> {
    Json(products.into_iter().map(|p| p.into()).collect())
}

/// Picks the first filter supplied, in parameter order.
fn select_filter(
    min_price: Option<f64>,
    max_price: Option<f64>,
    min_rating: Option<f64>,
    favorites: Option<bool>,
    in_stock: Option<bool>,
    discounted: Option<bool>,
    category_id: Option<i64>,
) -> Option<ProductFilter> {
    if min_price.is_some() || max_price.is_some() {
        return Some(ProductFilter::PriceRange {
            min: min_price.unwrap_or(0.0),
            max: max_price.unwrap_or(UNBOUNDED_PRICE),
        });
    }
    if let Some(threshold) = min_rating {
        return Some(ProductFilter::MinRating(threshold));
    }
    if favorites == Some(true) {
        return Some(ProductFilter::Favorites);
    }
    if in_stock == Some(true) {
        return Some(ProductFilter::InStock);
    }
    if discounted == Some(true) {
        return Some(ProductFilter::Discounted);
    }
    category_id.map(ProductFilter::CategoryId)
}

/// Product catalog API
///
/// Read-only views over the current catalog plus favorite and stock updates.
/// Updates live in memory only and are discarded on catalog refresh.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns every product in catalog order, or only those in `category`
    /// (case-insensitive; "All" returns everything).
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(&self, category: Query<Option<String>>) -> Json<Vec<ProductResponse>> {
        let products = self
            .get_products_use_case
            .execute(GetProductsParams {
                category: category.0,
            })
            .await;
        to_responses(products)
    }

    /// Search products
    ///
    /// Exact name matches first, then name/description/category matches,
    /// then tag matches. A blank query returns the whole catalog.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(&self, q: Query<Option<String>>) -> Json<Vec<ProductResponse>> {
        let products = self
            .search_use_case
            .execute(SearchProductsParams {
                query: q.0.unwrap_or_default(),
            })
            .await;
        to_responses(products)
    }

    /// Filter products
    ///
    /// Applies the first supplied filter in this order: price range
    /// (`min_price`/`max_price`, inclusive, a max of 999999 or more is
    /// unbounded), `min_rating`, `favorites`, `in_stock`, `discounted`,
    /// `category_id`. Without any filter, returns every product.
    #[oai(path = "/products/filter", method = "get", tag = "ApiTags::Products")]
    async fn filter_products(
        &self,
        min_price: Query<Option<f64>>,
        max_price: Query<Option<f64>>,
        min_rating: Query<Option<f64>>,
        favorites: Query<Option<bool>>,
        in_stock: Query<Option<bool>>,
        discounted: Query<Option<bool>>,
        category_id: Query<Option<i64>>,
    ) -> Json<Vec<ProductResponse>> {
        let filter = select_filter(
            min_price.0,
            max_price.0,
            min_rating.0,
            favorites.0,
            in_stock.0,
            discounted.0,
            category_id.0,
        );

        let products = match filter {
            Some(filter) => {
                self.filter_use_case
                    .execute(FilterProductsParams { filter })
                    .await
            }
            None => {
                self.get_products_use_case
                    .execute(GetProductsParams { category: None })
                    .await
            }
        };
        to_responses(products)
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> ProductByIdResponse {
        self.product_or_not_found(id.0).await
    }

    /// Mark or unmark a product as favorite
    #[oai(path = "/products/:id/favorite", method = "put", tag = "ApiTags::Products")]
    async fn set_favorite(
        &self,
        id: Path<i64>,
        body: Json<SetFavoriteRequest>,
    ) -> ProductByIdResponse {
        let updated = self
            .set_favorite_use_case
            .execute(SetFavoriteParams {
                id: id.0,
                is_favorite: body.0.is_favorite,
            })
            .await;

        if !updated {
            return ProductByIdResponse::NotFound(not_found(id.0));
        }
        self.product_or_not_found(id.0).await
    }

    /// Set a product's stock quantity
    #[oai(path = "/products/:id/stock", method = "put", tag = "ApiTags::Products")]
    async fn set_stock(&self, id: Path<i64>, body: Json<SetStockRequest>) -> ProductByIdResponse {
        let updated = self
            .set_stock_use_case
            .execute(SetStockParams {
                id: id.0,
                stock_quantity: body.0.stock_quantity,
            })
            .await;

        if !updated {
            return ProductByIdResponse::NotFound(not_found(id.0));
        }
        self.product_or_not_found(id.0).await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
