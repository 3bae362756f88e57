//! Filter stage: a stable, order-preserving selection over the joined
//! product views. Products are only removed, never reordered.

use crate::domain::a001_user::UserId;
use crate::domain::a003_product::ProductWithCategory;

/// Current selection: owner (`UserId::ALL` for no owner filter) and search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub owner_id: UserId,
    pub query: String,
}

impl ProductFilter {
    pub fn new(owner_id: UserId, query: impl Into<String>) -> Self {
        Self {
            owner_id,
            query: query.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of active filters, 0..=2
    pub fn active_count(&self) -> usize {
        usize::from(!self.owner_id.is_all()) + usize::from(!self.query.is_empty())
    }

    pub fn apply(&self, products: &[ProductWithCategory]) -> Vec<ProductWithCategory> {
        filter_products(products, self.owner_id, &self.query)
    }
}

/// Passes when `owner_id` is the sentinel, or equals the owner resolved
/// through the product's category. Unresolved references never pass a
/// specific owner.
pub fn matches_owner(product: &ProductWithCategory, owner_id: UserId) -> bool {
    owner_id.is_all() || product.owner_id() == Some(owner_id)
}

/// Case-insensitive substring match on the product name. An empty query
/// matches everything; the query is not trimmed.
pub fn matches_query(product: &ProductWithCategory, query: &str) -> bool {
    query.is_empty() || product.name().to_lowercase().contains(&query.to_lowercase())
}

pub fn filter_products(
    products: &[ProductWithCategory],
    owner_id: UserId,
    query: &str,
) -> Vec<ProductWithCategory> {
    products
        .iter()
        .filter(|product| matches_owner(product, owner_id))
        .filter(|product| matches_query(product, query))
        .cloned()
        .collect()
}
