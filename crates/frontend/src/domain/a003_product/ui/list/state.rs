use contracts::domain::a001_user::UserId;
use contracts::domain::a003_product::ProductWithCategory;
use contracts::shared::catalog::{Catalog, ProductFilter};
use leptos::prelude::*;
use std::sync::Arc;

/// Selection state of the product list. Starts (and resets) at
/// "all owners, empty search".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductListState {
    pub owner_id: UserId,
    pub search_query: String,
}

impl ProductListState {
    pub fn select_owner(&mut self, owner_id: UserId) {
        self.owner_id = owner_id;
    }

    pub fn set_query(&mut self, query: String) {
        self.search_query = query;
    }

    pub fn clear_query(&mut self) {
        self.search_query.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter::new(self.owner_id, self.search_query.clone())
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

/// Products passing the current selection, recomputed from the full joined
/// set on every state change.
pub fn create_visible_products(
    catalog: Arc<Catalog>,
    state: RwSignal<ProductListState>,
) -> Memo<Vec<ProductWithCategory>> {
    Memo::new(move |_| state.with(|s| catalog.visible_products(&s.filter())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::load_catalog;

    #[test]
    fn test_initial_state() {
        let state = ProductListState::default();
        assert!(state.owner_id.is_all());
        assert!(state.search_query.is_empty());
        assert!(!state.filter().is_active());
    }

    #[test]
    fn test_transitions() {
        let mut state = ProductListState::default();
        state.select_owner(UserId(2));
        state.set_query("br".to_string());
        assert_eq!(state.filter(), ProductFilter::new(UserId(2), "br"));

        state.clear_query();
        assert_eq!(state.owner_id, UserId(2));
        assert!(state.search_query.is_empty());

        state.select_owner(UserId::ALL);
        assert_eq!(state, ProductListState::default());
    }

    #[test]
    fn test_reset_restores_full_set() {
        let catalog = load_catalog().unwrap();
        let mut state = ProductListState::default();
        state.select_owner(UserId(1));
        state.set_query("zzz".to_string());
        assert!(catalog.visible_products(&state.filter()).is_empty());

        state.reset();
        assert_eq!(state.owner_id, UserId::ALL);
        assert_eq!(state.search_query, "");
        assert_eq!(catalog.visible_products(&state.filter()), catalog.products());
    }

    #[test]
    fn test_visible_products_follow_state() {
        let owner = Owner::new();
        owner.set();

        let catalog = Arc::new(load_catalog().unwrap());
        let state = create_state();
        let visible = create_visible_products(Arc::clone(&catalog), state);
        assert_eq!(visible.get_untracked().len(), catalog.products().len());

        state.update(|s| s.select_owner(UserId(3)));
        let names: Vec<String> = visible
            .get_untracked()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Jacket"]);

        state.update(|s| s.set_query("zzz".to_string()));
        assert!(visible.with_untracked(|products| products.is_empty()));

        state.update(|s| s.reset());
        assert_eq!(visible.get_untracked(), catalog.products());
    }
}
