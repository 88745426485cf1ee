use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::catalog::loader::{CatalogLoader, DEFAULT_SOURCE_NAME};
use crate::domain::catalog::model::{
    CatalogSnapshot, DEFAULT_IMAGE, DEFAULT_PRICE_UNIT, FilterOptions, NutritionInfo, Product,
};
use crate::domain::catalog::source::AssetProvider;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::value_objects::SnapshotOrigin;
use crate::domain::errors::SourceError;
use crate::domain::logger::Logger;

mock! {
    pub Assets {}

    #[async_trait]
    impl AssetProvider for Assets {
        async fn read(&self, name: &str) -> Result<String, SourceError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: "Test product".to_string(),
        price,
        price_unit: DEFAULT_PRICE_UNIT.to_string(),
        category: "Vegetables".to_string(),
        subcategory: None,
        image: DEFAULT_IMAGE.to_string(),
        rating: 0.0,
        review_count: 0,
        badge: None,
        in_stock: true,
        stock_quantity: 50,
        discount: 0,
        is_favorite: false,
        nutrition: NutritionInfo::default(),
        tags: Vec::new(),
    }
}

pub fn snapshot_of(products: Vec<Product>) -> CatalogSnapshot {
    CatalogSnapshot {
        products,
        categories: Vec::new(),
        filters: FilterOptions::default(),
        origin: SnapshotOrigin::Source,
        message: String::new(),
    }
}

/// A small well-formed catalog document with two categories.
pub fn sample_document() -> String {
    r#"{
        "status": "success",
        "message": "Products retrieved successfully",
        "data": {
            "products": [
                { "id": 101, "name": "Heirloom Tomatoes", "price": 4.5, "category": "Vegetables",
                  "rating": 4.7, "reviewCount": 12, "stockQuantity": 8, "tags": ["heirloom"] },
                { "id": 102, "name": "Wild Blueberries", "price": 6.25, "category": "Fruits",
                  "discount": 20, "isFavorite": true, "stockQuantity": 40, "tags": ["antioxidants"] },
                { "id": 103, "name": "Garlic Bulbs", "price": 0.99, "category": "Vegetables",
                  "inStock": false, "tags": ["tomato-sauce", "pungent"] }
            ],
            "categories": [
                { "id": 1, "name": "Vegetables", "count": 30 },
                { "id": 2, "name": "Fruits", "count": 30 }
            ],
            "filters": {
                "price_ranges": [
                    { "min": 0, "max": 5, "label": "Under $5" },
                    { "min": 5, "max": 999999, "label": "$5 and up" }
                ],
                "badges": ["Organic"],
                "ratings": [4.0]
            }
        }
    }"#
    .to_string()
}

/// Store over a source that always serves `sample_document()`.
pub fn sample_store() -> Arc<CatalogStore> {
    let mut assets = MockAssets::new();
    assets.expect_read().returning(|_| Ok(sample_document()));
    Arc::new(CatalogStore::new(CatalogLoader::new(
        Arc::new(assets),
        DEFAULT_SOURCE_NAME,
        mock_logger(),
    )))
}

/// Store over a missing source, so it serves the fallback catalog.
pub fn fallback_store() -> Arc<CatalogStore> {
    let mut assets = MockAssets::new();
    assets
        .expect_read()
        .returning(|_| Err(SourceError::NotFound));
    Arc::new(CatalogStore::new(CatalogLoader::new(
        Arc::new(assets),
        DEFAULT_SOURCE_NAME,
        mock_logger(),
    )))
}
