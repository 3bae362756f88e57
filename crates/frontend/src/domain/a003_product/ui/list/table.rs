use crate::shared::components::table::{SortDirection, SortHeaderCell};
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_user::Sex;
use contracts::domain::a003_product::ProductWithCategory;
use leptos::prelude::*;

/// Text colour of the owner cell; blank when the owner is unresolved.
pub fn owner_text_class(sex: Option<Sex>) -> &'static str {
    match sex {
        Some(Sex::Male) => "has-text-link",
        Some(Sex::Female) => "has-text-danger",
        None => "",
    }
}

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<ProductWithCategory>>,
    /// Current search text, used for highlighting
    #[prop(into)]
    query: Signal<String>,
) -> impl IntoView {
    view! {
        <table data-cy="ProductTable" class="table is-striped is-narrow is-fullwidth">
            <thead>
                <tr>
                    <SortHeaderCell label="ID" direction=SortDirection::Unsorted />
                    <SortHeaderCell label="Product" direction=SortDirection::Descending />
                    <SortHeaderCell label="Category" direction=SortDirection::Ascending />
                    <SortHeaderCell label="User" direction=SortDirection::Unsorted />
                </tr>
            </thead>

            <tbody>
                <For
                    each=move || products.get()
                    key=|product| product.id()
                    children=move |product| view! { <ProductRow product=product query=query /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn ProductRow(product: ProductWithCategory, query: Signal<String>) -> impl IntoView {
    let name = product.name().to_string();
    let owner_class = owner_text_class(product.owner_sex());

    view! {
        <tr data-cy="Product">
            <td class="has-text-weight-bold" data-cy="ProductId">
                {product.id().value()}
            </td>
            <td data-cy="ProductName">{move || highlight_matches(&name, &query.get())}</td>
            <td data-cy="ProductCategory">{product.category_label()}</td>
            <td data-cy="ProductUser" class=owner_class>
                {product.owner_name().to_string()}
            </td>
        </tr>
    }
}
