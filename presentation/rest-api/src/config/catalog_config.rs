use std::env;
use std::path::PathBuf;

use business::domain::catalog::loader::DEFAULT_SOURCE_NAME;

/// Where the catalog document is read from
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Directory holding catalog assets; `None` serves the bundled document
    pub assets_dir: Option<PathBuf>,
    /// Logical name of the catalog document
    pub source_name: String,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_ASSETS_DIR: Directory to read assets from (default: bundled document)
    /// - CATALOG_SOURCE: Document name (default: "products_api.json")
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CATALOG_ASSETS_DIR").ok(),
            env::var("CATALOG_SOURCE").ok(),
        )
    }

    fn from_values(assets_dir: Option<String>, source_name: Option<String>) -> Self {
        Self {
            assets_dir: assets_dir
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            source_name: source_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_bundled_products_document() {
        let config = CatalogConfig::from_values(None, None);

        assert_eq!(config.assets_dir, None);
        assert_eq!(config.source_name, "products_api.json");
    }

    #[test]
    fn should_ignore_blank_values() {
        let config = CatalogConfig::from_values(Some("  ".to_string()), Some(String::new()));

        assert_eq!(config.assets_dir, None);
        assert_eq!(config.source_name, "products_api.json");
    }

    #[test]
    fn should_use_configured_directory_and_source() {
        let config = CatalogConfig::from_values(
            Some("/srv/agricore/assets".to_string()),
            Some("spring_catalog.json".to_string()),
        );

        assert_eq!(
            config.assets_dir,
            Some(PathBuf::from("/srv/agricore/assets"))
        );
        assert_eq!(config.source_name, "spring_catalog.json");
    }
}
