use crate::domain::a003_product::ui::list::ProductList;
use crate::shared::data::load_catalog;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    // The catalog is joined exactly once here and shared read-only.
    match load_catalog() {
        Ok(catalog) => {
            log::info!(
                "Catalog loaded: {} users, {} categories, {} products",
                catalog.users().len(),
                catalog.categories().len(),
                catalog.products().len()
            );
            view! { <ProductList catalog=Arc::new(catalog) /> }.into_any()
        }
        Err(e) => {
            log::error!("Failed to load catalog: {:#}", e);
            view! {
                <div class="section">
                    <div class="notification is-danger">
                        {format!("Failed to load catalog: {:#}", e)}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
