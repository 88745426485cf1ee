use std::collections::HashMap;

use async_trait::async_trait;

use business::domain::catalog::source::AssetProvider;
use business::domain::errors::SourceError;

/// Name-to-text map of assets held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAssetProvider {
    assets: HashMap<String, String>,
}

impl InMemoryAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.assets.insert(name.into(), text.into());
        self
    }
}

#[async_trait]
impl AssetProvider for InMemoryAssetProvider {
    async fn read(&self, name: &str) -> Result<String, SourceError> {
        self.assets.get(name).cloned().ok_or(SourceError::NotFound)
    }
}
