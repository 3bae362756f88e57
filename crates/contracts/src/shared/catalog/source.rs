//! Data source: the three raw collections as delivered by the host, decoded
//! from JSON arrays. Referential integrity is not checked here; dangling ids
//! are legal and only reported.

use crate::domain::a001_user::User;
use crate::domain::a002_category::{Category, CategoryId};
use crate::domain::a003_product::{Product, ProductId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSource {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// References that will resolve to nothing after the join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DanglingReport {
    /// Categories whose `ownerId` matches no user
    pub categories_without_owner: Vec<CategoryId>,
    /// Products whose `categoryId` matches no category
    pub products_without_category: Vec<ProductId>,
}

impl DanglingReport {
    pub fn is_empty(&self) -> bool {
        self.categories_without_owner.is_empty() && self.products_without_category.is_empty()
    }
}

impl CatalogSource {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    pub fn from_json(users: &str, categories: &str, products: &str) -> Result<Self> {
        let users: Vec<User> = serde_json::from_str(users).context("failed to decode users")?;
        let categories: Vec<Category> =
            serde_json::from_str(categories).context("failed to decode categories")?;
        let products: Vec<Product> =
            serde_json::from_str(products).context("failed to decode products")?;

        Ok(Self::new(users, categories, products))
    }

    pub fn dangling_references(&self) -> DanglingReport {
        let categories_without_owner = self
            .categories
            .iter()
            .filter(|c| !self.users.iter().any(|u| u.id == c.owner_id))
            .map(|c| c.id)
            .collect();
        let products_without_category = self
            .products
            .iter()
            .filter(|p| !self.categories.iter().any(|c| c.id == p.category_id))
            .map(|p| p.id)
            .collect();

        DanglingReport {
            categories_without_owner,
            products_without_category,
        }
    }
}
