use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::Product;
use business::domain::catalog::value_objects::StockStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum StockStatusDto {
    #[oai(rename = "out_of_stock")]
    OutOfStock,
    #[oai(rename = "low_stock")]
    LowStock,
    #[oai(rename = "in_stock")]
    InStock,
}

impl From<StockStatus> for StockStatusDto {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::OutOfStock => StockStatusDto::OutOfStock,
            StockStatus::LowStock(_) => StockStatusDto::LowStock,
            StockStatus::InStock => StockStatusDto::InStock,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct NutritionFactResponse {
    /// Display label, e.g. "Vitamin C"
    pub label: String,
    /// Amount as written in the catalog
    pub value: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// List price
    pub price: f64,
    /// Price after discount (equal to `price` when not discounted)
    pub discounted_price: f64,
    /// Unit the price applies to, e.g. "per kg"
    pub price_unit: String,
    /// Formatted price for display
    pub display_price: String,
    /// Category name
    pub category: String,
    /// Subcategory name
    #[oai(skip_serializing_if_is_none)]
    pub subcategory: Option<String>,
    /// Logical image name
    pub image: String,
    /// Average rating from 0 to 5
    pub rating: f64,
    /// Number of reviews
    pub review_count: u32,
    /// Formatted rating for display
    pub display_rating: String,
    /// Badge label such as "Organic"
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    /// In-stock flag as set in the catalog
    pub in_stock: bool,
    /// Units left
    pub stock_quantity: u32,
    /// Derived stock availability
    pub stock_status: StockStatusDto,
    /// Stock availability for display, e.g. "Low stock (4 left)"
    pub stock_label: String,
    /// Discount percentage, 0 when none
    pub discount: u8,
    /// Whether the user marked this product as favorite
    pub is_favorite: bool,
    /// Fewer than five reviews so far
    pub is_new: bool,
    /// Nutrition facts present for this product
    pub nutrition: Vec<NutritionFactResponse>,
    /// Free-form tags
    pub tags: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let stock_status = product.stock_status();
        let nutrition = product
            .nutrition
            .available_facts()
            .into_iter()
            .map(|(label, value)| NutritionFactResponse {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect();

        Self {
            id: product.id,
            discounted_price: product.discounted_price(),
            display_price: product.display_price(),
            display_rating: product.display_rating(),
            stock_status: stock_status.into(),
            stock_label: stock_status.to_string(),
            is_new: product.is_new(),
            nutrition,
            name: product.name,
            description: product.description,
            price: product.price,
            price_unit: product.price_unit,
            category: product.category,
            subcategory: product.subcategory,
            image: product.image,
            rating: product.rating,
            review_count: product.review_count,
            badge: product.badge,
            in_stock: product.in_stock,
            stock_quantity: product.stock_quantity,
            discount: product.discount,
            is_favorite: product.is_favorite,
            tags: product.tags,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SetFavoriteRequest {
    /// New favorite state
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Object)]
pub struct SetStockRequest {
    /// New stock quantity
    pub stock_quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::fallback;

    #[test]
    fn should_carry_derived_fields() {
        let carrots = fallback::snapshot().products[1].clone();

        let response = ProductResponse::from(carrots);

        assert_eq!(response.name, "Sweet Carrots");
        assert!((response.discounted_price - 1.341).abs() < 1e-9);
        assert_eq!(response.display_price, "$1.34 (10% off)");
        assert_eq!(response.stock_label, "In stock");
        assert_eq!(response.nutrition.len(), 1);
        assert_eq!(response.nutrition[0].label, "Calories");
        assert!(!response.is_new);
    }
}
