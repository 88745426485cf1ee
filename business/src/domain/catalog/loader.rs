use std::sync::Arc;

use super::document::CatalogDocument;
use super::fallback;
use super::model::CatalogSnapshot;
use super::source::AssetProvider;
use crate::domain::errors::CatalogError;
use crate::domain::logger::Logger;

pub const DEFAULT_SOURCE_NAME: &str = "products_api.json";

/// Turns one named asset into a snapshot, degrading to the fallback catalog.
pub struct CatalogLoader {
    pub provider: Arc<dyn AssetProvider>,
    pub source_name: String,
    pub logger: Arc<dyn Logger>,
}

impl CatalogLoader {
    pub fn new(
        provider: Arc<dyn AssetProvider>,
        source_name: impl Into<String>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            provider,
            source_name: source_name.into(),
            logger,
        }
    }

    /// Single attempt; any failure yields `fallback::snapshot()`.
    pub async fn load(&self) -> CatalogSnapshot {
        match self.try_load().await {
            Ok(snapshot) => {
                self.logger.info(&format!(
                    "Loaded {} products and {} categories from {}",
                    snapshot.products.len(),
                    snapshot.categories.len(),
                    self.source_name
                ));
                snapshot
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Serving fallback catalog, {} could not be used: {}",
                    self.source_name, err
                ));
                fallback::snapshot()
            }
        }
    }

    pub async fn try_load(&self) -> Result<CatalogSnapshot, CatalogError> {
        self.logger
            .debug(&format!("Reading catalog source {}", self.source_name));
        let text = self.provider.read(&self.source_name).await?;
        self.logger
            .debug(&format!("Catalog source length: {}", text.len()));
        CatalogDocument::parse(&text)?.into_snapshot()
    }
}
