use async_trait::async_trait;

use crate::domain::errors::SourceError;

/// Supplies the raw text of a named catalog asset.
#[async_trait]
pub trait AssetProvider: Send + Sync {
    async fn read(&self, name: &str) -> Result<String, SourceError>;
}
