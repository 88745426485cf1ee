use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::catalog::use_cases::get_filter_options::GetFilterOptionsUseCase;
use business::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;

use crate::api::catalog::dto::{CatalogSummaryResponse, CategoryResponse, FilterOptionsResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    get_filter_options_use_case: Arc<dyn GetFilterOptionsUseCase>,
    refresh_use_case: Arc<dyn RefreshCatalogUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
        get_filter_options_use_case: Arc<dyn GetFilterOptionsUseCase>,
        refresh_use_case: Arc<dyn RefreshCatalogUseCase>,
    ) -> Self {
        Self {
            get_categories_use_case,
            get_filter_options_use_case,
            refresh_use_case,
        }
    }
}

/// Catalog metadata API
#[OpenApi]
impl CatalogApi {
    /// List categories
    ///
    /// Counts reflect the products in the current catalog.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn get_categories(&self) -> Json<Vec<CategoryResponse>> {
        let categories = self.get_categories_use_case.execute().await;
        Json(categories.into_iter().map(Into::into).collect())
    }

    /// Get filter options
    #[oai(path = "/filters", method = "get", tag = "ApiTags::Catalog")]
    async fn get_filters(&self) -> Json<FilterOptionsResponse> {
        Json(self.get_filter_options_use_case.execute().await.into())
    }

    /// Reload the catalog
    ///
    /// Drops the cached catalog and reads the source again. Favorite and stock
    /// changes made since the last load are discarded.
    #[oai(path = "/catalog/refresh", method = "post", tag = "ApiTags::Catalog")]
    async fn refresh(&self) -> Json<CatalogSummaryResponse> {
        Json(self.refresh_use_case.execute().await.into())
    }
}
