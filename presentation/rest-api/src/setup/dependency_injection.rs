use std::sync::Arc;

use assets::{BundledAssetProvider, FileAssetProvider};
use logger::TracingLogger;

use business::application::catalog::filter::FilterProductsUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_categories::GetCategoriesUseCaseImpl;
use business::application::catalog::get_filter_options::GetFilterOptionsUseCaseImpl;
use business::application::catalog::get_products::GetProductsUseCaseImpl;
use business::application::catalog::refresh::RefreshCatalogUseCaseImpl;
use business::application::catalog::search::SearchProductsUseCaseImpl;
use business::application::catalog::set_favorite::SetFavoriteUseCaseImpl;
use business::application::catalog::set_stock::SetStockUseCaseImpl;
use business::domain::catalog::loader::CatalogLoader;
use business::domain::catalog::source::AssetProvider;
use business::domain::catalog::store::CatalogStore;
use business::domain::logger::Logger;

use crate::api::catalog::routes::CatalogApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::catalog_config::CatalogConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub catalog_api: CatalogApi,
}

impl DependencyContainer {
    pub fn new(config: &CatalogConfig) -> Self {
        let provider: Arc<dyn AssetProvider> = match &config.assets_dir {
            Some(dir) => {
                tracing::info!("Reading catalog assets from {}", dir.display());
                Arc::new(FileAssetProvider::new(dir.clone()))
            }
            None => {
                tracing::info!("Serving bundled catalog assets");
                Arc::new(BundledAssetProvider)
            }
        };
        Self::with_provider(provider, &config.source_name)
    }

    pub fn with_provider(provider: Arc<dyn AssetProvider>, source_name: &str) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Catalog state
        let store = Arc::new(CatalogStore::new(CatalogLoader::new(
            provider,
            source_name,
            logger.clone(),
        )));

        // Product use cases
        let get_products_use_case = Arc::new(GetProductsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let filter_use_case = Arc::new(FilterProductsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let set_favorite_use_case = Arc::new(SetFavoriteUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let set_stock_use_case = Arc::new(SetStockUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });

        // Catalog use cases
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let get_filter_options_use_case = Arc::new(GetFilterOptionsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let refresh_use_case = Arc::new(RefreshCatalogUseCaseImpl {
            store: store.clone(),
            logger,
        });

        let product_api = ProductApi::new(
            get_products_use_case,
            get_by_id_use_case,
            search_use_case,
            filter_use_case,
            set_favorite_use_case,
            set_stock_use_case,
        );

        let catalog_api = CatalogApi::new(
            get_categories_use_case,
            get_filter_options_use_case,
            refresh_use_case,
        );

        Self {
            health_api: HealthApi::new(store),
            product_api,
            catalog_api,
        }
    }
}

/// Client over a full route tree whose catalog source is missing, so every
/// request is served from the fallback catalog.
#[cfg(test)]
pub fn test_client() -> poem::test::TestClient<poem::Route> {
    use assets::InMemoryAssetProvider;
    use business::domain::catalog::loader::DEFAULT_SOURCE_NAME;

    let container =
        DependencyContainer::with_provider(Arc::new(InMemoryAssetProvider::new()), DEFAULT_SOURCE_NAME);
    poem::test::TestClient::new(crate::setup::server::routes(container, "http://localhost"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assets::InMemoryAssetProvider;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn should_serve_bundled_catalog_without_assets_dir() {
        let container = DependencyContainer::new(&CatalogConfig {
            assets_dir: None,
            source_name: "products_api.json".to_string(),
        });
        let client = poem::test::TestClient::new(crate::setup::server::routes(
            container,
            "http://localhost",
        ));

        let response = client.post("/catalog/refresh").send().await;

        response.assert_status_is_ok();
        let summary = response.0.into_body().into_json::<Value>().await.unwrap();
        assert_eq!(summary["origin"], json!("source"));
        assert_eq!(summary["product_count"], json!(18));
    }

    #[tokio::test]
    async fn should_read_configured_source_name() {
        let provider = InMemoryAssetProvider::new().with_asset(
            "spring.json",
            r#"{"status":"success","data":{"products":[{"id":7,"name":"Ramps","price":9.5,"category":"Vegetables"}]}}"#,
        );
        let container = DependencyContainer::with_provider(Arc::new(provider), "spring.json");
        let client = poem::test::TestClient::new(crate::setup::server::routes(
            container,
            "http://localhost",
        ));

        let response = client.get("/products/7").send().await;

        response.assert_status_is_ok();
        let product = response.0.into_body().into_json::<Value>().await.unwrap();
        assert_eq!(product["name"], json!("Ramps"));
        assert_eq!(product["image"], json!("ic_menu_gallery"));
    }
}
