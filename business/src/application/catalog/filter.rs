use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::Product;
use crate::domain::catalog::query;
use crate::domain::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::filter::{
    FilterProductsParams, FilterProductsUseCase, ProductFilter,
};
use crate::domain::logger::Logger;

pub struct FilterProductsUseCaseImpl {
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FilterProductsUseCase for FilterProductsUseCaseImpl {
    async fn execute(&self, params: FilterProductsParams) -> Vec<Product> {
        self.logger
            .info(&format!("Filtering products by {:?}", params.filter));
        let snapshot = self.store.snapshot().await;
        let products = match params.filter {
            ProductFilter::PriceRange { min, max } => query::by_price_range(&*snapshot, min, max),
            ProductFilter::MinRating(threshold) => query::by_min_rating(&*snapshot, threshold),
            ProductFilter::Favorites => query::favorites(&*snapshot),
            ProductFilter::InStock => query::in_stock(&*snapshot),
            ProductFilter::Discounted => query::discounted(&*snapshot),
            ProductFilter::CategoryId(id) => query::by_category_id(&*snapshot, id),
        };
        self.logger
            .info(&format!("Filter matched {} products", products.len()));
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::value_objects::UNBOUNDED_PRICE;
    use crate::test_support::{fallback_store, mock_logger, sample_store};

    async fn filter_ids(store: Arc<CatalogStore>, filter: ProductFilter) -> Vec<i64> {
        let use_case = FilterProductsUseCaseImpl {
            store,
            logger: mock_logger(),
        };
        use_case
            .execute(FilterProductsParams { filter })
            .await
            .iter()
            .map(|p| p.id)
            .collect()
    }

    #[tokio::test]
    async fn should_filter_fallback_by_price_range() {
        let ids = filter_ids(
            fallback_store(),
            ProductFilter::PriceRange { min: 1.0, max: 2.0 },
        )
        .await;

        assert_eq!(ids, vec![2, 4, 6, 8, 11, 13]);
    }

    #[tokio::test]
    async fn should_treat_sentinel_max_as_unbounded() {
        let ids = filter_ids(
            sample_store(),
            ProductFilter::PriceRange {
                min: 5.0,
                max: UNBOUNDED_PRICE,
            },
        )
        .await;

        assert_eq!(ids, vec![102]);
    }

    #[tokio::test]
    async fn should_apply_flag_filters() {
        assert_eq!(filter_ids(sample_store(), ProductFilter::Favorites).await, vec![102]);
        assert_eq!(filter_ids(sample_store(), ProductFilter::Discounted).await, vec![102]);
        assert_eq!(
            filter_ids(sample_store(), ProductFilter::InStock).await,
            vec![101, 102]
        );
        assert_eq!(
            filter_ids(sample_store(), ProductFilter::MinRating(4.5)).await,
            vec![101]
        );
    }

    #[tokio::test]
    async fn should_filter_by_category_id() {
        assert_eq!(
            filter_ids(sample_store(), ProductFilter::CategoryId(1)).await,
            vec![101, 103]
        );
        assert!(
            filter_ids(sample_store(), ProductFilter::CategoryId(7))
                .await
                .is_empty()
        );
    }
}
