use crate::domain::a001_user::{User, UserId};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// Glyph shown verbatim in front of the title
    pub icon: String,
    /// May point at a user that does not exist
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

impl Category {
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>, owner_id: u32) -> Self {
        Self {
            id: CategoryId(id),
            title: title.into(),
            icon: icon.into(),
            owner_id: UserId(owner_id),
        }
    }

    /// "{icon} - {title}", the label used in the product table
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

// ============================================================================
// Denormalized view
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryWithOwner {
    pub category: Category,
    pub owner: Option<User>,
}

impl CategoryWithOwner {
    pub fn id(&self) -> CategoryId {
        self.category.id
    }

    /// Id of the resolved owner; `None` when the owner reference dangles.
    pub fn resolved_owner_id(&self) -> Option<UserId> {
        self.owner.as_ref().map(|u| u.id)
    }
}
