use std::collections::HashSet;

use serde::{Deserialize, Deserializer};

use super::model::{
    CatalogSnapshot, Category, DEFAULT_CALORIES, DEFAULT_IMAGE, DEFAULT_PRICE_UNIT, FilterOptions,
    NewProductProps, NutritionInfo, PriceRange, Product,
};
use super::value_objects::SnapshotOrigin;
use crate::domain::errors::CatalogError;

pub const SUCCESS_STATUS: &str = "success";

/// Keyword to image name, checked in order against the lowercased product name.
const IMAGE_KEYWORDS: &[(&str, &str)] = &[
    ("tomato", "ic_tomatoes"),
    ("carrot", "ic_carrot"),
    ("apple", "ic_apple"),
    ("banana", "ic_banana"),
    ("potato", "ic_potato"),
    ("spinach", "ic_spinach"),
    ("lettuce", "ic_lettuce"),
    ("pepper", "ic_bell_pepper"),
    ("cucumber", "ic_cucumber"),
    ("broccoli", "ic_broccoli"),
    ("corn", "ic_corn"),
    ("onion", "ic_onion"),
    ("strawberry", "ic_strawberry"),
    ("lemon", "ic_lemon"),
    ("green_beans", "ic_green_beans"),
];

/// Top-level shape of the bundled catalog document.
///
/// Optional fields accept both absence and an explicit `null`, and either one
/// yields the field's default.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    pub data: CatalogData,
}

#[derive(Debug, Deserialize)]
pub struct CatalogData {
    pub products: Vec<ProductRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<CategoryRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: FilterRecord,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub price_unit: Option<String>,
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategory: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_res: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub review_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub badge: String,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_quantity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_favorite: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrition_info: NutritionRecord,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NutritionRecord {
    #[serde(default)]
    pub calories: Option<String>,
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_selected: bool,
}

#[derive(Debug, Deserialize)]
pub struct PriceRangeRecord {
    pub min: f64,
    pub max: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_ranges: Vec<PriceRangeRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub badges: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ratings: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<CategoryRecord>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Picks the logical image for a product: an explicit name without its
/// extension, or a keyword match on the product name.
pub fn resolve_image(image_res: &str, product_name: &str) -> String {
    let explicit = image_res.trim();
    if !explicit.is_empty() && explicit != DEFAULT_IMAGE {
        let stem = match explicit.rfind('.') {
            Some(dot) if dot > 0 => &explicit[..dot],
            _ => explicit,
        };
        return stem.to_string();
    }

    let lower_name = product_name.to_lowercase();
    IMAGE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower_name.contains(keyword))
        .map(|(_, image)| image.to_string())
        .unwrap_or_else(|| DEFAULT_IMAGE.to_string())
}

impl CatalogDocument {
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validates the document and converts it into a source snapshot.
    pub fn into_snapshot(self) -> Result<CatalogSnapshot, CatalogError> {
        if self.status != SUCCESS_STATUS {
            return Err(CatalogError::Status(self.status));
        }

        if self.data.products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut products = Vec::with_capacity(self.data.products.len());
        for record in self.data.products {
            if !seen.insert(record.id) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate product id {}",
                    record.id
                )));
            }
            products.push(record.into_domain()?);
        }

        Ok(CatalogSnapshot {
            products,
            categories: self
                .data
                .categories
                .into_iter()
                .map(CategoryRecord::into_domain)
                .collect(),
            filters: self.data.filters.into_domain(),
            origin: SnapshotOrigin::Source,
            message: self.message,
        })
    }
}

impl ProductRecord {
    pub fn into_domain(self) -> Result<Product, CatalogError> {
        let image = resolve_image(&self.image_res, &self.name);
        Product::new(NewProductProps {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            price_unit: self
                .price_unit
                .unwrap_or_else(|| DEFAULT_PRICE_UNIT.to_string()),
            category: self.category,
            subcategory: non_empty(self.subcategory),
            image,
            rating: self.rating,
            review_count: self.review_count,
            badge: non_empty(self.badge),
            in_stock: self.in_stock.unwrap_or(true),
            stock_quantity: self.stock_quantity,
            discount: self.discount,
            is_favorite: self.is_favorite,
            nutrition: self.nutrition_info.into_domain(),
            tags: self.tags,
        })
    }
}

impl NutritionRecord {
    pub fn into_domain(self) -> NutritionInfo {
        NutritionInfo {
            calories: self
                .calories
                .unwrap_or_else(|| DEFAULT_CALORIES.to_string()),
            vitamin_c: self.vitamin_c,
            fiber: self.fiber,
            vitamin_a: self.vitamin_a,
            potassium: self.potassium,
            iron: self.iron,
            vitamin_k: self.vitamin_k,
            folate: self.folate,
            water_content: self.water_content,
            quercetin: self.quercetin,
            vitamin_b6: self.vitamin_b6,
            antioxidants: self.antioxidants,
            citric_acid: self.citric_acid,
        }
    }
}

impl CategoryRecord {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            count: self.count,
            is_selected: self.is_selected,
        }
    }
}

impl FilterRecord {
    pub fn into_domain(self) -> FilterOptions {
        FilterOptions {
            price_ranges: self
                .price_ranges
                .into_iter()
                .map(|r| PriceRange::new(r.min, r.max, r.label))
                .collect(),
            badges: self.badges,
            ratings: self.ratings,
            categories: self
                .categories
                .into_iter()
                .map(CategoryRecord::into_domain)
                .collect(),
        }
    }
}
