use super::model::{
    CatalogSnapshot, Category, FilterOptions, NutritionInfo, PriceRange, Product,
};
use super::value_objects::{SnapshotOrigin, UNBOUNDED_PRICE};

pub const FALLBACK_MESSAGE: &str = "Using fallback data";

/// The fixed catalog served whenever the real source cannot be used.
///
/// Content is identical on every call.
pub fn snapshot() -> CatalogSnapshot {
    let categories = categories();
    CatalogSnapshot {
        products: products(),
        filters: FilterOptions {
            price_ranges: vec![
                PriceRange::new(0.0, 2.0, "Under $2"),
                PriceRange::new(2.0, 4.0, "$2 - $4"),
                PriceRange::new(4.0, UNBOUNDED_PRICE, "Over $4"),
            ],
            badges: vec![
                "Organic".to_string(),
                "Fresh".to_string(),
                "Premium".to_string(),
            ],
            ratings: vec![4.5, 4.0, 3.5],
            categories: categories.clone(),
        },
        categories,
        origin: SnapshotOrigin::Fallback,
        message: FALLBACK_MESSAGE.to_string(),
    }
}

fn categories() -> Vec<Category> {
    vec![
        Category::new(1, "Vegetables", 15),
        Category::new(2, "Fruits", 12),
        Category::new(3, "Dairy", 8),
        Category::new(4, "Meat", 6),
    ]
}

struct Row {
    id: i64,
    name: &'static str,
    description: &'static str,
    price: f64,
    price_unit: &'static str,
    category: &'static str,
    subcategory: &'static str,
    image: &'static str,
    rating: f64,
    review_count: u32,
    badge: &'static str,
    stock_quantity: u32,
    discount: u8,
    is_favorite: bool,
    tags: [&'static str; 4],
}

impl From<Row> for Product {
    fn from(row: Row) -> Self {
        Product {
            id: row.id,
            name: row.name.to_string(),
            description: row.description.to_string(),
            price: row.price,
            price_unit: row.price_unit.to_string(),
            category: row.category.to_string(),
            subcategory: Some(row.subcategory.to_string()),
            image: row.image.to_string(),
            rating: row.rating,
            review_count: row.review_count,
            badge: Some(row.badge.to_string()),
            in_stock: true,
            stock_quantity: row.stock_quantity,
            discount: row.discount,
            is_favorite: row.is_favorite,
            nutrition: NutritionInfo::default(),
            tags: row.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

fn products() -> Vec<Product> {
    [
        Row {
            id: 1,
            name: "Organic Tomatoes",
            description: "Fresh organic produce from local farms. Rich in vitamins and perfect for cooking.",
            price: 2.99,
            price_unit: "per kg",
            category: "Vegetables",
            subcategory: "Organic",
            image: "ic_tomatoes",
            rating: 4.8,
            review_count: 24,
            badge: "Organic",
            stock_quantity: 150,
            discount: 0,
            is_favorite: false,
            tags: ["organic", "fresh", "local", "vitamin-rich"],
        },
        Row {
            id: 2,
            name: "Sweet Carrots",
            description: "Sweet farm-fresh carrots, perfect for snacking and cooking. High in beta-carotene.",
            price: 1.49,
            price_unit: "per kg",
            category: "Vegetables",
            subcategory: "Root Vegetables",
            image: "ic_carrot",
            rating: 4.6,
            review_count: 18,
            badge: "Fresh",
            stock_quantity: 200,
            discount: 10,
            is_favorite: false,
            tags: ["sweet", "fresh", "beta-carotene", "crunchy"],
        },
        Row {
            id: 3,
            name: "Red Apples",
            description: "Juicy red apples, perfect for snacking. Crisp texture with natural sweetness.",
            price: 3.99,
            price_unit: "per kg",
            category: "Fruits",
            subcategory: "Tree Fruits",
            image: "ic_apple",
            rating: 4.9,
            review_count: 45,
            badge: "Premium",
            stock_quantity: 120,
            discount: 0,
            is_favorite: true,
            tags: ["juicy", "sweet", "crisp", "premium"],
        },
        Row {
            id: 4,
            name: "Russet Potatoes",
            description: "Organic russet potatoes, great for cooking, baking, and making fries.",
            price: 1.29,
            price_unit: "per kg",
            category: "Vegetables",
            subcategory: "Root Vegetables",
            image: "ic_potato",
            rating: 4.5,
            review_count: 32,
            badge: "Organic",
            stock_quantity: 300,
            discount: 5,
            is_favorite: false,
            tags: ["organic", "versatile", "cooking", "baking"],
        },
        Row {
            id: 5,
            name: "Baby Spinach",
            description: "Fresh baby spinach leaves, perfect for salads and smoothies. Packed with iron.",
            price: 2.49,
            price_unit: "per bundle",
            category: "Vegetables",
            subcategory: "Leafy Greens",
            image: "ic_spinach",
            rating: 4.7,
            review_count: 28,
            badge: "Fresh",
            stock_quantity: 80,
            discount: 0,
            is_favorite: false,
            tags: ["baby", "fresh", "iron-rich", "salad"],
        },
        Row {
            id: 6,
            name: "Organic Lettuce",
            description: "Crisp fresh lettuce leaves, perfect for salads and sandwiches.",
            price: 1.99,
            price_unit: "per head",
            category: "Vegetables",
            subcategory: "Leafy Greens",
            image: "ic_lettuce",
            rating: 4.4,
            review_count: 15,
            badge: "Organic",
            stock_quantity: 60,
            discount: 0,
            is_favorite: false,
            tags: ["organic", "crisp", "fresh", "salad"],
        },
        Row {
            id: 7,
            name: "Bell Peppers Mix",
            description: "Colorful bell peppers mix - red, yellow, and green. Perfect for cooking and salads.",
            price: 3.49,
            price_unit: "per pack",
            category: "Vegetables",
            subcategory: "Peppers",
            image: "ic_bell_pepper",
            rating: 4.6,
            review_count: 21,
            badge: "Premium",
            stock_quantity: 90,
            discount: 15,
            is_favorite: true,
            tags: ["colorful", "mix", "vitamin-c", "premium"],
        },
        Row {
            id: 8,
            name: "Green Cucumbers",
            description: "Fresh green cucumbers, perfect for salads, sandwiches, and healthy snacking.",
            price: 1.79,
            price_unit: "per kg",
            category: "Vegetables",
            subcategory: "Vine Vegetables",
            image: "ic_cucumber",
            rating: 4.3,
            review_count: 19,
            badge: "Fresh",
            stock_quantity: 140,
            discount: 0,
            is_favorite: false,
            tags: ["fresh", "hydrating", "low-calorie", "crunchy"],
        },
        Row {
            id: 9,
            name: "Fresh Broccoli",
            description: "Fresh green broccoli crowns, packed with nutrients and perfect for steaming or stir-frying.",
            price: 2.29,
            price_unit: "per head",
            category: "Vegetables",
            subcategory: "Cruciferous",
            image: "ic_broccoli",
            rating: 4.5,
            review_count: 26,
            badge: "Fresh",
            stock_quantity: 75,
            discount: 0,
            is_favorite: false,
            tags: ["fresh", "nutritious", "vitamin-rich", "superfood"],
        },
        Row {
            id: 10,
            name: "Sweet Corn",
            description: "Fresh sweet corn on the cob, perfect for grilling, boiling, or roasting.",
            price: 0.79,
            price_unit: "per ear",
            category: "Vegetables",
            subcategory: "Grain Vegetables",
            image: "ic_corn",
            rating: 4.7,
            review_count: 33,
            badge: "Fresh",
            stock_quantity: 180,
            discount: 0,
            is_favorite: false,
            tags: ["sweet", "fresh", "grilling", "summer"],
        },
        Row {
            id: 11,
            name: "Red Onions",
            description: "Fresh red onions with mild flavor, perfect for salads, cooking, and caramelizing.",
            price: 1.19,
            price_unit: "per kg",
            category: "Vegetables",
            subcategory: "Bulb Vegetables",
            image: "ic_onion",
            rating: 4.2,
            review_count: 14,
            badge: "Fresh",
            stock_quantity: 220,
            discount: 0,
            is_favorite: false,
            tags: ["red", "mild", "cooking", "versatile"],
        },
        Row {
            id: 12,
            name: "Green Beans",
            description: "Tender green beans, perfect for steaming, sautéing, or adding to casseroles.",
            price: 2.99,
            price_unit: "per kg",
            category: "Vegetables",
            subcategory: "Pod Vegetables",
            image: "ic_green_beans",
            rating: 4.4,
            review_count: 22,
            badge: "Fresh",
            stock_quantity: 110,
            discount: 0,
            is_favorite: false,
            tags: ["tender", "green", "fresh", "versatile"],
        },
        Row {
            id: 13,
            name: "Golden Bananas",
            description: "Ripe golden bananas, perfect for snacking, smoothies, and baking.",
            price: 1.89,
            price_unit: "per bunch",
            category: "Fruits",
            subcategory: "Tropical Fruits",
            image: "ic_banana",
            rating: 4.8,
            review_count: 67,
            badge: "Fresh",
            stock_quantity: 95,
            discount: 0,
            is_favorite: true,
            tags: ["golden", "ripe", "potassium", "energy"],
        },
        Row {
            id: 14,
            name: "Organic Strawberries",
            description: "Sweet organic strawberries, perfect for desserts, smoothies, and snacking.",
            price: 4.99,
            price_unit: "per basket",
            category: "Fruits",
            subcategory: "Berries",
            image: "ic_strawberry",
            rating: 4.9,
            review_count: 89,
            badge: "Organic",
            stock_quantity: 45,
            discount: 20,
            is_favorite: true,
            tags: ["organic", "sweet", "antioxidants", "premium"],
        },
        Row {
            id: 15,
            name: "Fresh Lemons",
            description: "Juicy fresh lemons, perfect for cooking, drinks, and adding zest to dishes.",
            price: 2.49,
            price_unit: "per kg",
            category: "Fruits",
            subcategory: "Citrus Fruits",
            image: "ic_lemon",
            rating: 4.6,
            review_count: 31,
            badge: "Fresh",
            stock_quantity: 160,
            discount: 0,
            is_favorite: false,
            tags: ["juicy", "citrus", "vitamin-c", "zesty"],
        },
    ]
    .into_iter()
    .map(Product::from)
    .collect()
}
