use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use business::domain::catalog::source::AssetProvider;
use business::domain::errors::SourceError;

/// Serves assets from a directory on disk.
pub struct FileAssetProvider {
    root: PathBuf,
}

impl FileAssetProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Only plain file names resolve; anything that could leave the root does not.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Some(self.root.join(file)),
            _ => None,
        }
    }
}

#[async_trait]
impl AssetProvider for FileAssetProvider {
    async fn read(&self, name: &str) -> Result<String, SourceError> {
        let path = self.resolve(name).ok_or(SourceError::NotFound)?;
        tracing::debug!(path = %path.display(), "reading catalog asset");

        tokio::fs::read_to_string(&path).await.map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "catalog asset read failed");
            match err.kind() {
                ErrorKind::NotFound => SourceError::NotFound,
                _ => SourceError::Unreadable,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_read_asset_from_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("products_api.json"), "{}").unwrap();
        let provider = FileAssetProvider::new(dir.path());

        let text = provider.read("products_api.json").await;

        assert_eq!(text, Ok("{}".to_string()));
    }

    #[tokio::test]
    async fn should_report_missing_asset_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileAssetProvider::new(dir.path());

        let result = provider.read("products_api.json").await;

        assert_eq!(result, Err(SourceError::NotFound));
    }

    #[tokio::test]
    async fn should_report_directory_as_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("catalog")).unwrap();
        let provider = FileAssetProvider::new(dir.path());

        let result = provider.read("catalog").await;

        assert_eq!(result, Err(SourceError::Unreadable));
    }

    #[tokio::test]
    async fn should_refuse_names_outside_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("secret.json"), "{}").unwrap();
        let provider = FileAssetProvider::new(&nested);

        assert_eq!(
            provider.read("../secret.json").await,
            Err(SourceError::NotFound)
        );
        assert_eq!(
            provider.read("/etc/hostname").await,
            Err(SourceError::NotFound)
        );
        assert_eq!(provider.read("").await, Err(SourceError::NotFound));
    }
}
