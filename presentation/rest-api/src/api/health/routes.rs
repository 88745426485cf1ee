use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::catalog::store::CatalogStore;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// A catalog snapshot is cached
    pub catalog_loaded: bool,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    store: Arc<CatalogStore>,
}

impl Api {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service. Never triggers a catalog
    /// load; `catalog_loaded` is false until the first catalog request.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_loaded: self.store.is_loaded().await,
        })
    }
}
