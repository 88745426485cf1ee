use std::sync::Arc;

use super::value_objects::{LOW_STOCK_THRESHOLD, SnapshotOrigin, StockStatus, UNBOUNDED_PRICE};
use crate::domain::errors::CatalogError;

pub const DEFAULT_PRICE_UNIT: &str = "per kg";
pub const DEFAULT_IMAGE: &str = "ic_menu_gallery";
pub const DEFAULT_CALORIES: &str = "0 per 100g";

/// Products with fewer reviews than this are shown as new arrivals.
const NEW_PRODUCT_REVIEW_LIMIT: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_unit: String,
    pub category: String,
    pub subcategory: Option<String>,
    /// Logical image name, resolved by the presentation layer.
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    pub badge: Option<String>,
    pub in_stock: bool,
    pub stock_quantity: u32,
    /// Percentage off the list price, 0 means no discount.
    pub discount: u8,
    pub is_favorite: bool,
    pub nutrition: NutritionInfo,
    pub tags: Vec<String>,
}

pub struct NewProductProps {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub price_unit: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    pub badge: Option<String>,
    pub in_stock: bool,
    pub stock_quantity: u32,
    pub discount: u8,
    pub is_favorite: bool,
    pub nutrition: NutritionInfo,
    pub tags: Vec<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, CatalogError> {
        if !props.price.is_finite() || props.price < 0.0 {
            return Err(CatalogError::Invalid(format!(
                "product {} has price {}",
                props.id, props.price
            )));
        }

        if props.discount > 100 {
            return Err(CatalogError::Invalid(format!(
                "product {} has discount {}",
                props.id, props.discount
            )));
        }

        if !(0.0..=5.0).contains(&props.rating) {
            return Err(CatalogError::Invalid(format!(
                "product {} has rating {}",
                props.id, props.rating
            )));
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            description: props.description,
            price: props.price,
            price_unit: props.price_unit,
            category: props.category,
            subcategory: props.subcategory,
            image: props.image,
            rating: props.rating,
            review_count: props.review_count,
            badge: props.badge,
            in_stock: props.in_stock,
            stock_quantity: props.stock_quantity,
            discount: props.discount,
            is_favorite: props.is_favorite,
            nutrition: props.nutrition,
            tags: props.tags,
        })
    }

    pub fn discounted_price(&self) -> f64 {
        if self.discount > 0 {
            self.price * f64::from(100 - self.discount) / 100.0
        } else {
            self.price
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.in_stock && self.stock_quantity > 0 && self.stock_quantity <= LOW_STOCK_THRESHOLD
    }

    /// Available for purchase: flagged in stock with a positive quantity.
    pub fn is_available(&self) -> bool {
        self.in_stock && self.stock_quantity > 0
    }

    pub fn is_new(&self) -> bool {
        self.review_count < NEW_PRODUCT_REVIEW_LIMIT
    }

    pub fn stock_status(&self) -> StockStatus {
        if !self.is_available() {
            StockStatus::OutOfStock
        } else if self.is_low_stock() {
            StockStatus::LowStock(self.stock_quantity)
        } else {
            StockStatus::InStock
        }
    }

    pub fn display_price(&self) -> String {
        if self.discount > 0 {
            format!("${:.2} ({}% off)", self.discounted_price(), self.discount)
        } else {
            format!("${:.2} {}", self.price, self.price_unit)
        }
    }

    pub fn display_rating(&self) -> String {
        if self.rating > 0.0 {
            format!("{:.1} ★ ({})", self.rating, self.review_count)
        } else {
            "No rating".to_string()
        }
    }

    pub fn with_favorite(&self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self.clone()
        }
    }

    pub fn with_stock_quantity(&self, stock_quantity: u32) -> Self {
        Self {
            stock_quantity,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutritionInfo {
    pub calories: String,
    pub vitamin_c: Option<String>,
    pub fiber: Option<String>,
    pub vitamin_a: Option<String>,
    pub potassium: Option<String>,
    pub iron: Option<String>,
    pub vitamin_k: Option<String>,
    pub folate: Option<String>,
    pub water_content: Option<String>,
    pub quercetin: Option<String>,
    pub vitamin_b6: Option<String>,
    pub antioxidants: Option<String>,
    pub citric_acid: Option<String>,
}

impl Default for NutritionInfo {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES.to_string(),
            vitamin_c: None,
            fiber: None,
            vitamin_a: None,
            potassium: None,
            iron: None,
            vitamin_k: None,
            folate: None,
            water_content: None,
            quercetin: None,
            vitamin_b6: None,
            antioxidants: None,
            citric_acid: None,
        }
    }
}

impl NutritionInfo {
    /// Labelled facts that are present, in display order.
    pub fn available_facts(&self) -> Vec<(&'static str, &str)> {
        let optional = [
            ("Vitamin C", &self.vitamin_c),
            ("Fiber", &self.fiber),
            ("Vitamin A", &self.vitamin_a),
            ("Potassium", &self.potassium),
            ("Iron", &self.iron),
            ("Vitamin K", &self.vitamin_k),
            ("Folate", &self.folate),
            ("Water Content", &self.water_content),
            ("Quercetin", &self.quercetin),
            ("Vitamin B6", &self.vitamin_b6),
            ("Antioxidants", &self.antioxidants),
            ("Citric Acid", &self.citric_acid),
        ];

        std::iter::once(("Calories", self.calories.as_str()))
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(label, value)| value.as_deref().map(|v| (label, v))),
            )
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Advisory product count; see `query::categories_with_counts`.
    pub count: u32,
    pub is_selected: bool,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            count,
            is_selected: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub label: String,
}

impl PriceRange {
    pub fn new(min: f64, max: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        is_unbounded_max(self.max)
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && (self.is_unbounded() || price <= self.max)
    }
}

pub(crate) fn is_unbounded_max(max: f64) -> bool {
    !max.is_finite() || max >= UNBOUNDED_PRICE
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub price_ranges: Vec<PriceRange>,
    pub badges: Vec<String>,
    pub ratings: Vec<f64>,
    pub categories: Vec<Category>,
}

/// One loaded copy of the catalog. Replaced wholesale, never patched by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub filters: FilterOptions,
    pub origin: SnapshotOrigin,
    pub message: String,
}

impl CatalogSnapshot {
    pub fn is_fallback(&self) -> bool {
        self.origin == SnapshotOrigin::Fallback
    }

    pub(crate) fn position_of(&self, id: i64) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

pub type SharedSnapshot = Arc<CatalogSnapshot>;

/// Counts describing the snapshot currently served.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub origin: SnapshotOrigin,
    pub message: String,
    pub product_count: usize,
    pub category_count: usize,
}

impl From<&CatalogSnapshot> for CatalogSummary {
    fn from(snapshot: &CatalogSnapshot) -> Self {
        Self {
            origin: snapshot.origin,
            message: snapshot.message.clone(),
            product_count: snapshot.products.len(),
            category_count: snapshot.categories.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::product;

    #[test]
    fn should_apply_discount_to_price() {
        let mut carrots = product(2, "Sweet Carrots", 1.50);
        carrots.discount = 10;

        assert!((carrots.discounted_price() - 1.35).abs() < 1e-9);
        assert_eq!(carrots.display_price(), "$1.35 (10% off)");
    }

    #[test]
    fn should_keep_list_price_when_not_discounted() {
        let tomatoes = product(1, "Organic Tomatoes", 2.99);

        assert_eq!(tomatoes.discounted_price(), 2.99);
        assert_eq!(tomatoes.display_price(), "$2.99 per kg");
    }

    #[test]
    fn should_report_low_stock_between_one_and_ten() {
        let mut item = product(1, "Organic Tomatoes", 2.99);

        item.stock_quantity = 10;
        assert_eq!(item.stock_status(), StockStatus::LowStock(10));

        item.stock_quantity = 11;
        assert_eq!(item.stock_status(), StockStatus::InStock);

        item.stock_quantity = 0;
        assert_eq!(item.stock_status(), StockStatus::OutOfStock);

        item.stock_quantity = 5;
        item.in_stock = false;
        assert_eq!(item.stock_status(), StockStatus::OutOfStock);
        assert!(!item.is_low_stock());
    }

    #[test]
    fn should_display_rating_or_placeholder() {
        let mut item = product(1, "Organic Tomatoes", 2.99);
        item.rating = 4.8;
        item.review_count = 24;
        assert_eq!(item.display_rating(), "4.8 ★ (24)");

        item.rating = 0.0;
        assert_eq!(item.display_rating(), "No rating");
    }

    #[test]
    fn should_copy_with_changed_favorite_and_stock() {
        let original = product(1, "Organic Tomatoes", 2.99);

        let favorite = original.with_favorite(true);
        let restocked = original.with_stock_quantity(3);

        assert!(favorite.is_favorite);
        assert!(!original.is_favorite);
        assert_eq!(restocked.stock_quantity, 3);
        assert_eq!(restocked.name, original.name);
    }

    #[test]
    fn should_reject_product_when_invariants_are_broken() {
        let props = |price: f64, discount: u8, rating: f64| NewProductProps {
            id: 7,
            name: "Bell Peppers Mix".to_string(),
            description: String::new(),
            price,
            price_unit: DEFAULT_PRICE_UNIT.to_string(),
            category: "Vegetables".to_string(),
            subcategory: None,
            image: DEFAULT_IMAGE.to_string(),
            rating,
            review_count: 0,
            badge: None,
            in_stock: true,
            stock_quantity: 0,
            discount,
            is_favorite: false,
            nutrition: NutritionInfo::default(),
            tags: Vec::new(),
        };

        assert!(Product::new(props(3.49, 15, 4.6)).is_ok());
        assert!(matches!(
            Product::new(props(-1.0, 0, 4.6)),
            Err(CatalogError::Invalid(_))
        ));
        assert!(matches!(
            Product::new(props(3.49, 101, 4.6)),
            Err(CatalogError::Invalid(_))
        ));
        assert!(matches!(
            Product::new(props(3.49, 0, 5.5)),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn should_list_only_present_nutrition_facts_in_order() {
        let nutrition = NutritionInfo {
            calories: "18 per 100g".to_string(),
            iron: Some("0.3mg".to_string()),
            vitamin_c: Some("14mg".to_string()),
            ..NutritionInfo::default()
        };

        assert_eq!(
            nutrition.available_facts(),
            vec![
                ("Calories", "18 per 100g"),
                ("Vitamin C", "14mg"),
                ("Iron", "0.3mg"),
            ]
        );
    }

    #[test]
    fn should_treat_sentinel_maximum_as_unbounded() {
        let over_four = PriceRange::new(4.0, UNBOUNDED_PRICE, "Over $4");
        let two_to_four = PriceRange::new(2.0, 4.0, "$2 - $4");

        assert!(over_four.contains(1_000_000.0));
        assert!(!over_four.contains(3.99));
        assert!(two_to_four.contains(2.0));
        assert!(two_to_four.contains(4.0));
        assert!(!two_to_four.contains(4.01));
    }
}
