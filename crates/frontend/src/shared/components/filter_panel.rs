use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - Bulma `panel` holding the filter controls
///
/// The heading shows how many filters are currently active.
#[component]
pub fn FilterPanel(
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter content (tabs, inputs, buttons)
    children: Children,
) -> impl IntoView {
    view! {
        <nav class="panel">
            <p class="panel-heading">
                {icon("filter")}
                " Filters"
                {move || {
                    let count = active_filters_count.get();
                    if count > 0 {
                        view! {
                            <Badge variant="primary".to_string() class="ml-2".to_string()>{count}</Badge>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}
            </p>
            {children()}
        </nav>
    }
}
