use contracts::domain::a001_user::{User, UserId};
use contracts::domain::a002_category::CategoryWithOwner;
use leptos::prelude::*;

fn tab_class(active: bool) -> &'static str {
    if active {
        "is-active"
    } else {
        ""
    }
}

/// "All" plus one tab per user; the selected one is highlighted.
#[component]
pub fn OwnerTabs(
    users: Vec<User>,
    #[prop(into)] selected: Signal<UserId>,
    on_select: Callback<UserId>,
) -> impl IntoView {
    view! {
        <p class="panel-tabs has-text-weight-bold">
            <a
                data-cy="FilterAllUsers"
                href="#/"
                class=move || tab_class(selected.get().is_all())
                on:click=move |_| on_select.run(UserId::ALL)
            >
                "All"
            </a>

            {users
                .into_iter()
                .map(|user| {
                    let id = user.id;
                    view! {
                        <a
                            data-cy="FilterUser"
                            href="#/"
                            class=move || tab_class(selected.get() == id)
                            on:click=move |_| on_select.run(id)
                        >
                            {user.name}
                        </a>
                    }
                })
                .collect_view()}
        </p>
    }
}

/// Tooltip of a category button: owner name, blank when unresolved.
fn category_tooltip(category: &CategoryWithOwner) -> String {
    category
        .owner
        .as_ref()
        .map(|owner| format!("Owner: {}", owner.name))
        .unwrap_or_default()
}

/// Category buttons. Display only: category filtering is not implemented.
#[component]
pub fn CategoryButtons(categories: Vec<CategoryWithOwner>) -> impl IntoView {
    view! {
        <div class="panel-block is-flex-wrap-wrap">
            <a href="#/" data-cy="AllCategories" class="button is-success mr-6 is-outlined">
                "All"
            </a>

            {categories
                .into_iter()
                .map(|category| {
                    let title = category_tooltip(&category);
                    view! {
                        <a data-cy="Category" class="button mr-2 my-1" href="#/" title=title>
                            {category.category.title}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
