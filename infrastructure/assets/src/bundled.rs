use async_trait::async_trait;

use business::domain::catalog::loader::DEFAULT_SOURCE_NAME;
use business::domain::catalog::source::AssetProvider;
use business::domain::errors::SourceError;

const PRODUCTS_API: &str = include_str!("../data/products_api.json");

/// Serves the catalog document compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledAssetProvider;

#[async_trait]
impl AssetProvider for BundledAssetProvider {
    async fn read(&self, name: &str) -> Result<String, SourceError> {
        if name == DEFAULT_SOURCE_NAME {
            Ok(PRODUCTS_API.to_string())
        } else {
            Err(SourceError::NotFound)
        }
    }
}
