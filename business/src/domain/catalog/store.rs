use std::sync::Arc;

use tokio::sync::RwLock;

use super::loader::CatalogLoader;
use super::model::{Product, SharedSnapshot};

/// Owns the cached snapshot and serves it to the query façade.
///
/// Population is not single-flight: two concurrent first loads may both run
/// the loader, and the later write wins. Loading is idempotent for a given
/// source so the duplicate work is harmless.
pub struct CatalogStore {
    loader: CatalogLoader,
    cache: RwLock<Option<SharedSnapshot>>,
}

impl CatalogStore {
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            loader,
            cache: RwLock::new(None),
        }
    }

    /// Returns the cached snapshot, loading it first when forced or absent.
    pub async fn load(&self, force_reload: bool) -> SharedSnapshot {
        if !force_reload && let Some(cached) = self.cache.read().await.as_ref() {
            return Arc::clone(cached);
        }

        // The loader runs without holding the lock.
        let snapshot = Arc::new(self.loader.load().await);
        *self.cache.write().await = Some(Arc::clone(&snapshot));
        snapshot
    }

    pub async fn snapshot(&self) -> SharedSnapshot {
        self.load(false).await
    }

    /// Drops the cached snapshot; the next query reloads.
    pub async fn invalidate(&self) {
        self.loader.logger.debug("Invalidating cached catalog");
        *self.cache.write().await = None;
    }

    pub async fn is_loaded(&self) -> bool {
        self.cache.read().await.is_some()
    }

    /// Marks a product as favorite or not. Unknown ids are a no-op.
    pub async fn set_favorite(&self, id: i64, is_favorite: bool) -> bool {
        self.replace_product(id, |p| p.with_favorite(is_favorite))
            .await
    }

    /// Sets a product's stock quantity. Unknown ids are a no-op.
    pub async fn set_stock(&self, id: i64, stock_quantity: u32) -> bool {
        self.replace_product(id, |p| p.with_stock_quantity(stock_quantity))
            .await
    }

    /// Swaps the record at `id`'s index for a changed copy. Readers holding
    /// the previous `Arc` keep seeing the old snapshot.
    async fn replace_product<F>(&self, id: i64, change: F) -> bool
    where
        F: FnOnce(&Product) -> Product,
    {
        let current = self.load(false).await;
        let mut guard = self.cache.write().await;
        let mut snapshot = guard.take().unwrap_or(current);

        let replaced = match snapshot.position_of(id) {
            Some(index) => {
                let next = change(&snapshot.products[index]);
                Arc::make_mut(&mut snapshot).products[index] = next;
                true
            }
            None => false,
        };

        *guard = Some(snapshot);
        replaced
    }
}
