//! Join stage: turns the three normalized collections into display-ready
//! records. Lookups are linear scans on exact id match; a dangling reference
//! resolves to `None` and is never an error.

use crate::domain::a001_user::{User, UserId};
use crate::domain::a002_category::{Category, CategoryId, CategoryWithOwner};
use crate::domain::a003_product::{Product, ProductWithCategory};

/// First user whose id equals `owner_id`.
pub fn resolve_owner(users: &[User], owner_id: UserId) -> Option<&User> {
    users.iter().find(|user| user.id == owner_id)
}

/// First category view whose id equals `category_id`.
pub fn resolve_category(
    category_views: &[CategoryWithOwner],
    category_id: CategoryId,
) -> Option<&CategoryWithOwner> {
    category_views.iter().find(|view| view.id() == category_id)
}

pub fn build_category_views(categories: &[Category], users: &[User]) -> Vec<CategoryWithOwner> {
    categories
        .iter()
        .map(|category| CategoryWithOwner {
            category: category.clone(),
            owner: resolve_owner(users, category.owner_id).cloned(),
        })
        .collect()
}

pub fn build_product_views(
    products: &[Product],
    category_views: &[CategoryWithOwner],
) -> Vec<ProductWithCategory> {
    products
        .iter()
        .map(|product| ProductWithCategory {
            product: product.clone(),
            category: resolve_category(category_views, product.category_id).cloned(),
        })
        .collect()
}
