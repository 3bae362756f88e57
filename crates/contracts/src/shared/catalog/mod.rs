//! In-memory product catalog: raw collections, joined views and filtering.

pub mod filter;
pub mod join;
pub mod source;

pub use filter::{filter_products, matches_owner, matches_query, ProductFilter};
pub use join::{build_category_views, build_product_views, resolve_category, resolve_owner};
pub use source::{CatalogSource, DanglingReport};

use crate::domain::a001_user::User;
use crate::domain::a002_category::{Category, CategoryWithOwner};
use crate::domain::a003_product::ProductWithCategory;

/// Composition root for the catalog: the raw collections plus the views
/// derived from them. Built once; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    source: CatalogSource,
    category_views: Vec<CategoryWithOwner>,
    product_views: Vec<ProductWithCategory>,
}

impl Catalog {
    pub fn build(source: CatalogSource) -> Self {
        let category_views = build_category_views(&source.categories, &source.users);
        let product_views = build_product_views(&source.products, &category_views);

        Self {
            source,
            category_views,
            product_views,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.source.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.source.categories
    }

    pub fn category_views(&self) -> &[CategoryWithOwner] {
        &self.category_views
    }

    /// Every joined product, in source order.
    pub fn products(&self) -> &[ProductWithCategory] {
        &self.product_views
    }

    pub fn visible_products(&self, filter: &ProductFilter) -> Vec<ProductWithCategory> {
        filter.apply(&self.product_views)
    }

    pub fn dangling_references(&self) -> DanglingReport {
        self.source.dangling_references()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::{Sex, UserId};
    use crate::domain::a003_product::Product;

    fn catalog() -> Catalog {
        Catalog::build(CatalogSource::new(
            vec![User::new(1, "Max", Sex::Male), User::new(2, "Anna", Sex::Female)],
            vec![
                Category::new(10, "Fruits", "🍎", 1),
                Category::new(11, "Drinks", "🍺", 2),
            ],
            vec![
                Product::new(100, "Apple", 10),
                Product::new(101, "Banana", 10),
                Product::new(102, "Milk", 11),
                Product::new(103, "Ghost", 77),
            ],
        ))
    }

    #[test]
    fn test_build_joins_everything_once() {
        let catalog = catalog();
        assert_eq!(catalog.users().len(), 2);
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.category_views().len(), 2);
        assert_eq!(catalog.products().len(), 4);
        assert_eq!(catalog.products()[2].owner_name(), "Anna");
        assert!(catalog.products()[3].category.is_none());
    }

    #[test]
    fn test_visible_products() {
        let catalog = catalog();
        let names = |filter: ProductFilter| -> Vec<String> {
            catalog
                .visible_products(&filter)
                .iter()
                .map(|p| p.name().to_string())
                .collect()
        };

        assert_eq!(names(ProductFilter::default()), vec!["Apple", "Banana", "Milk", "Ghost"]);
        assert_eq!(names(ProductFilter::new(UserId(2), "")), vec!["Milk"]);
        assert_eq!(names(ProductFilter::new(UserId(1), "AN")), vec!["Banana"]);
        assert!(names(ProductFilter::new(UserId(3), "")).is_empty());
    }

    #[test]
    fn test_dangling_references() {
        let report = catalog().dangling_references();
        assert!(report.categories_without_owner.is_empty());
        assert_eq!(report.products_without_category.len(), 1);
    }
}
