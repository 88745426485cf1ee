//! Read-only views over a snapshot.
//!
//! Every function returns owned copies and degrades to an empty result when
//! nothing matches.

use super::model::{CatalogSnapshot, Category, Product, is_unbounded_max};
use super::value_objects::ALL_CATEGORIES;

/// How a product matched a search query. Lower tiers rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    ExactName,
    Text,
    Tag,
}

pub fn all(snapshot: &CatalogSnapshot) -> Vec<Product> {
    snapshot.products.clone()
}

pub fn by_id(snapshot: &CatalogSnapshot, id: i64) -> Option<Product> {
    snapshot.products.iter().find(|p| p.id == id).cloned()
}

/// Case-insensitive exact match on category; `"All"` disables the filter.
pub fn by_category(snapshot: &CatalogSnapshot, name: &str) -> Vec<Product> {
    if name.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return all(snapshot);
    }
    select(snapshot, |p| same_category(&p.category, name))
}

/// Products of the category with this id; empty when the id is unknown.
pub fn by_category_id(snapshot: &CatalogSnapshot, category_id: i64) -> Vec<Product> {
    snapshot
        .categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| by_category(snapshot, &c.name))
        .unwrap_or_default()
}

/// Inclusive on both ends. A sentinel or non-finite `max` means no upper bound.
pub fn by_price_range(snapshot: &CatalogSnapshot, min: f64, max: f64) -> Vec<Product> {
    let unbounded = is_unbounded_max(max);
    select(snapshot, |p| p.price >= min && (unbounded || p.price <= max))
}

pub fn by_min_rating(snapshot: &CatalogSnapshot, threshold: f64) -> Vec<Product> {
    select(snapshot, |p| p.rating >= threshold)
}

pub fn favorites(snapshot: &CatalogSnapshot) -> Vec<Product> {
    select(snapshot, |p| p.is_favorite)
}

pub fn in_stock(snapshot: &CatalogSnapshot) -> Vec<Product> {
    select(snapshot, Product::is_available)
}

pub fn discounted(snapshot: &CatalogSnapshot) -> Vec<Product> {
    select(snapshot, |p| p.discount > 0)
}

/// Ranked, case-insensitive substring search.
///
/// Exact name matches come first, then name/description/category matches,
/// then tag matches. Each product appears once at its best tier, and catalog
/// order is kept within a tier. A blank query returns the whole catalog.
pub fn search(snapshot: &CatalogSnapshot, query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return all(snapshot);
    }

    let mut ranked: Vec<(MatchTier, &Product)> = snapshot
        .products
        .iter()
        .filter_map(|p| match_tier(p, &needle).map(|tier| (tier, p)))
        .collect();
    // Stable sort keeps catalog order inside each tier.
    ranked.sort_by_key(|(tier, _)| *tier);
    ranked.into_iter().map(|(_, p)| p.clone()).collect()
}

/// Best tier at which `product` matches an already lowercased, trimmed needle.
pub fn match_tier(product: &Product, needle: &str) -> Option<MatchTier> {
    let name = product.name.to_lowercase();
    if name.trim() == needle {
        return Some(MatchTier::ExactName);
    }
    if name.contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
    {
        return Some(MatchTier::Text);
    }
    if product
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(needle))
    {
        return Some(MatchTier::Tag);
    }
    None
}

/// Categories with `count` recomputed from the snapshot's products.
pub fn categories_with_counts(snapshot: &CatalogSnapshot) -> Vec<Category> {
    snapshot
        .categories
        .iter()
        .map(|category| {
            let count = snapshot
                .products
                .iter()
                .filter(|p| same_category(&p.category, &category.name))
                .count();
            Category {
                count: u32::try_from(count).unwrap_or(u32::MAX),
                ..category.clone()
            }
        })
        .collect()
}

/// Category names compare by full Unicode lowercase form.
fn same_category(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn select<F>(snapshot: &CatalogSnapshot, predicate: F) -> Vec<Product>
where
    F: Fn(&Product) -> bool,
{
    snapshot
        .products
        .iter()
        .filter(|p| predicate(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fallback;
    use crate::domain::catalog::value_objects::UNBOUNDED_PRICE;
    use crate::test_support::{product, snapshot_of};
    use proptest::prelude::*;

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn should_find_product_by_id_or_nothing() {
        let snapshot = fallback::snapshot();

        assert_eq!(by_id(&snapshot, 3).unwrap().name, "Red Apples");
        assert!(by_id(&snapshot, 999).is_none());
    }

    #[test]
    fn should_match_category_ignoring_case() {
        let snapshot = fallback::snapshot();

        assert_eq!(ids(&by_category(&snapshot, "fruits")), vec![3, 13, 14, 15]);
        assert_eq!(by_category(&snapshot, "all").len(), 15);
        assert_eq!(by_category(&snapshot, "All").len(), 15);
        assert!(by_category(&snapshot, "Fruit").is_empty());
        assert!(by_category(&snapshot, "Dairy").is_empty());
    }

    #[test]
    fn should_resolve_category_by_id() {
        let snapshot = fallback::snapshot();

        assert_eq!(ids(&by_category_id(&snapshot, 2)), vec![3, 13, 14, 15]);
        assert!(by_category_id(&snapshot, 42).is_empty());
    }

    #[test]
    fn should_filter_inclusive_price_range() {
        let snapshot = fallback::snapshot();

        let cheap = by_price_range(&snapshot, 1.0, 2.0);

        assert_eq!(ids(&cheap), vec![2, 4, 6, 8, 11, 13]);
        assert!(cheap.iter().all(|p| (1.0..=2.0).contains(&p.price)));
    }

    #[test]
    fn should_treat_sentinel_maximum_as_no_upper_bound() {
        let mut snapshot = fallback::snapshot();
        snapshot.products.push(product(99, "Truffle Basket", 120.0));

        assert_eq!(ids(&by_price_range(&snapshot, 5.0, UNBOUNDED_PRICE)), vec![99]);
        assert_eq!(ids(&by_price_range(&snapshot, 4.5, f64::INFINITY)), vec![14, 99]);
        assert!(by_price_range(&fallback::snapshot(), 5.0, UNBOUNDED_PRICE).is_empty());
    }

    #[test]
    fn should_filter_by_minimum_rating() {
        let snapshot = fallback::snapshot();

        assert_eq!(ids(&by_min_rating(&snapshot, 4.8)), vec![1, 3, 13, 14]);
        assert!(by_min_rating(&snapshot, 5.0).is_empty());
    }

    #[test]
    fn should_select_favorites_stock_and_discounts() {
        let mut snapshot = fallback::snapshot();
        snapshot.products[0].stock_quantity = 0;
        snapshot.products[1].in_stock = false;

        assert_eq!(ids(&favorites(&snapshot)), vec![3, 7, 13, 14]);
        assert_eq!(ids(&discounted(&snapshot)), vec![2, 4, 7, 14]);
        let stocked = ids(&in_stock(&snapshot));
        assert_eq!(stocked.len(), 13);
        assert!(!stocked.contains(&1));
        assert!(!stocked.contains(&2));
    }

    #[test]
    fn should_return_whole_catalog_for_blank_query() {
        let snapshot = fallback::snapshot();

        assert_eq!(search(&snapshot, ""), snapshot.products);
        assert_eq!(search(&snapshot, "   "), snapshot.products);
    }

    #[test]
    fn should_rank_name_match_before_tag_match() {
        let mut snapshot = fallback::snapshot();
        let mut sauce = product(50, "Pasta Sauce", 3.0);
        sauce.tags = vec!["tomato-based".to_string()];
        snapshot.products.insert(0, sauce);

        let results = search(&snapshot, "tomato");

        assert_eq!(ids(&results), vec![1, 50]);
    }

    #[test]
    fn should_rank_exact_name_first_then_text_then_tags() {
        let mut corn_salsa = product(1, "Corn Salsa", 2.0);
        corn_salsa.tags = vec!["sweet".to_string()];
        let mut sweet_corn = product(2, "Sweet Corn", 0.79);
        sweet_corn.tags = vec!["summer".to_string()];
        let mut kettle = product(3, "Kettle Chips", 1.5);
        kettle.tags = vec!["Sweet Corn flavour".to_string()];
        let mut syrup = product(4, "Maple Syrup", 6.0);
        syrup.description = "Pairs with sweet corn bread".to_string();
        let snapshot = snapshot_of(vec![corn_salsa, sweet_corn, kettle, syrup]);

        let results = search(&snapshot, "  SWEET CORN ");

        assert_eq!(ids(&results), vec![2, 4, 3]);
    }

    #[test]
    fn should_list_each_product_once_at_its_best_tier() {
        let mut lemons = product(15, "Fresh Lemons", 2.49);
        lemons.tags = vec!["lemon".to_string(), "lemon".to_string()];
        let snapshot = snapshot_of(vec![lemons]);

        let results = search(&snapshot, "lemon");

        assert_eq!(ids(&results), vec![15]);
        assert_eq!(match_tier(&results[0], "lemon"), Some(MatchTier::Text));
    }

    #[test]
    fn should_recompute_category_counts() {
        let snapshot = fallback::snapshot();

        let counts: Vec<(String, u32)> = categories_with_counts(&snapshot)
            .into_iter()
            .map(|c| (c.name, c.count))
            .collect();

        assert_eq!(
            counts,
            vec![
                ("Vegetables".to_string(), 11),
                ("Fruits".to_string(), 4),
                ("Dairy".to_string(), 0),
                ("Meat".to_string(), 0),
            ]
        );
    }

    #[test]
    fn should_count_and_filter_categories_alike_beyond_ascii() {
        let mut legumes = product(1, "Poireaux", 2.0);
        legumes.category = "LÉGUMES".to_string();
        let mut snapshot = snapshot_of(vec![legumes]);
        snapshot.categories = vec![Category::new(7, "Légumes", 0)];

        let filtered = by_category(&snapshot, "Légumes");
        let counted = categories_with_counts(&snapshot);

        assert_eq!(ids(&filtered), vec![1]);
        assert_eq!(counted[0].count, 1);
        assert_eq!(ids(&by_category_id(&snapshot, 7)), vec![1]);
    }

    proptest! {
        #[test]
        fn search_results_are_a_duplicate_free_subset(query in "[a-zA-Z -]{0,12}") {
            let snapshot = fallback::snapshot();

            let results = search(&snapshot, &query);

            let mut seen = ids(&results);
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
            prop_assert!(results.iter().all(|p| snapshot.products.contains(p)));
        }

        #[test]
        fn price_range_results_lie_within_bounds(min in 0.0f64..6.0, width in 0.0f64..6.0) {
            let snapshot = fallback::snapshot();
            let max = min + width;

            let results = by_price_range(&snapshot, min, max);

            prop_assert!(results.iter().all(|p| p.price >= min && p.price <= max));
            let expected = snapshot
                .products
                .iter()
                .filter(|p| p.price >= min && p.price <= max)
                .count();
            prop_assert_eq!(results.len(), expected);
        }
    }
}
