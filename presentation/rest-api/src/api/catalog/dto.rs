use poem_openapi::Object;

use business::domain::catalog::model::{CatalogSummary, Category, FilterOptions, PriceRange};

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    /// Products currently in this category
    pub count: u32,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            count: category.count,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PriceRangeResponse {
    pub min: f64,
    /// Upper bound as stored; ignore when `unbounded` is set
    pub max: f64,
    pub label: String,
    /// The range has no upper bound
    pub unbounded: bool,
}

impl From<PriceRange> for PriceRangeResponse {
    fn from(range: PriceRange) -> Self {
        Self {
            unbounded: range.is_unbounded(),
            min: range.min,
            max: range.max,
            label: range.label,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FilterOptionsResponse {
    pub price_ranges: Vec<PriceRangeResponse>,
    pub badges: Vec<String>,
    pub ratings: Vec<f64>,
    pub categories: Vec<CategoryResponse>,
}

impl From<FilterOptions> for FilterOptionsResponse {
    fn from(filters: FilterOptions) -> Self {
        Self {
            price_ranges: filters.price_ranges.into_iter().map(Into::into).collect(),
            badges: filters.badges,
            ratings: filters.ratings,
            categories: filters.categories.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogSummaryResponse {
    /// "source" or "fallback"
    pub origin: String,
    /// Message carried by the catalog document
    pub message: String,
    pub product_count: u64,
    pub category_count: u64,
}

impl From<CatalogSummary> for CatalogSummaryResponse {
    fn from(summary: CatalogSummary) -> Self {
        Self {
            origin: summary.origin.to_string(),
            message: summary.message,
            product_count: summary.product_count as u64,
            category_count: summary.category_count as u64,
        }
    }
}
