use crate::domain::a001_user::{Sex, UserId};
use crate::domain::a002_category::{CategoryId, CategoryWithOwner};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// May point at a category that does not exist
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category_id: CategoryId(category_id),
        }
    }
}

// ============================================================================
// Denormalized view
// ============================================================================
/// A product joined with its category and the category's owner.
///
/// Display accessors never fail: an unresolved reference yields an empty
/// string (or `None`) so a row can always be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductWithCategory {
    pub product: Product,
    pub category: Option<CategoryWithOwner>,
}

impl ProductWithCategory {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Owner id through both joins; `None` if either reference dangles.
    pub fn owner_id(&self) -> Option<UserId> {
        self.category.as_ref().and_then(|c| c.resolved_owner_id())
    }

    pub fn owner_name(&self) -> &str {
        self.category
            .as_ref()
            .and_then(|c| c.owner.as_ref())
            .map(|u| u.name.as_str())
            .unwrap_or("")
    }

    pub fn owner_sex(&self) -> Option<Sex> {
        self.category
            .as_ref()
            .and_then(|c| c.owner.as_ref())
            .map(|u| u.sex)
    }

    pub fn category_label(&self) -> String {
        self.category
            .as_ref()
            .map(|c| c.category.label())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::User;
    use crate::domain::a002_category::Category;

    #[test]
    fn test_product_from_json() {
        let product: Product =
            serde_json::from_str(r#"{"id":100,"name":"Apple","categoryId":10}"#).unwrap();
        assert_eq!(product, Product::new(100, "Apple", 10));
    }

    #[test]
    fn test_resolved_accessors() {
        let view = ProductWithCategory {
            product: Product::new(100, "Apple", 10),
            category: Some(CategoryWithOwner {
                category: Category::new(10, "Fruits", "🍎", 1),
                owner: Some(User::new(1, "Max", Sex::Male)),
            }),
        };
        assert_eq!(view.id(), ProductId(100));
        assert_eq!(view.name(), "Apple");
        assert_eq!(view.owner_id(), Some(UserId(1)));
        assert_eq!(view.owner_name(), "Max");
        assert_eq!(view.owner_sex(), Some(Sex::Male));
        assert_eq!(view.category_label(), "🍎 - Fruits");
    }

    #[test]
    fn test_absent_category_renders_blank() {
        let view = ProductWithCategory {
            product: Product::new(7, "Orphan", 999),
            category: None,
        };
        assert_eq!(view.owner_id(), None);
        assert_eq!(view.owner_name(), "");
        assert_eq!(view.owner_sex(), None);
        assert_eq!(view.category_label(), "");
    }

    #[test]
    fn test_absent_owner_keeps_category_label() {
        let view = ProductWithCategory {
            product: Product::new(7, "Kiwi", 10),
            category: Some(CategoryWithOwner {
                category: Category::new(10, "Fruits", "🍎", 42),
                owner: None,
            }),
        };
        assert_eq!(view.owner_id(), None);
        assert_eq!(view.owner_name(), "");
        assert_eq!(view.category_label(), "🍎 - Fruits");
    }
}
