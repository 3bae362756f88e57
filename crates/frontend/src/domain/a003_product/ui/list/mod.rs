pub mod filters;
pub mod state;
pub mod table;

use self::filters::{CategoryButtons, OwnerTabs};
use self::state::{create_state, create_visible_products};
use self::table::ProductTable;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_user::UserId;
use contracts::shared::catalog::Catalog;
use leptos::prelude::*;
use std::sync::Arc;

pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Product table with owner tabs and name search.
///
/// Every state change re-runs the filter over the full joined set.
#[component]
pub fn ProductList(catalog: Arc<Catalog>) -> impl IntoView {
    let state = create_state();
    let users = catalog.users().to_vec();
    let categories = catalog.category_views().to_vec();

    let visible = create_visible_products(catalog, state);

    let active_filters_count = Signal::derive(move || state.with(|s| s.filter().active_count()));
    let selected_owner = Signal::derive(move || state.with(|s| s.owner_id));
    let search_query = Signal::derive(move || state.with(|s| s.search_query.clone()));

    let select_owner = Callback::new(move |owner_id: UserId| {
        log::debug!("Owner filter: {}", owner_id);
        state.update(|s| s.select_owner(owner_id));
    });

    let set_query = Callback::new(move |query: String| {
        log::debug!("Search query: {:?}", query);
        state.update(|s| {
            if query.is_empty() {
                s.clear_query();
            } else {
                s.set_query(query);
            }
        });
    });

    let reset_all = move |_| {
        log::debug!("Reset all filters");
        state.update(|s| s.reset());
    };

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">"Product Categories"</h1>

                <div class="block">
                    <FilterPanel active_filters_count=active_filters_count>
                        <OwnerTabs
                            users=users
                            selected=selected_owner
                            on_select=select_owner
                        />

                        <div class="panel-block">
                            <SearchInput value=search_query on_change=set_query />
                        </div>

                        <CategoryButtons categories=categories />

                        <div class="panel-block">
                            <a
                                data-cy="ResetAllButton"
                                href="#/"
                                class="button is-link is-outlined is-fullwidth"
                                on:click=reset_all
                            >
                                "Reset all filters"
                            </a>
                        </div>
                    </FilterPanel>
                </div>

                <div class="box table-container">
                    <Show
                        when=move || visible.with(|products| !products.is_empty())
                        fallback=|| view! { <p data-cy="NoMatchingMessage">{NO_MATCHING_MESSAGE}</p> }
                    >
                        <ProductTable products=visible query=search_query />
                    </Show>
                </div>
            </div>
        </div>
    }
}
