use leptos::prelude::*;

/// Badge (Bulma `tag`) with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let tag_class = move || variant_class(variant.get().as_deref());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("tag {} {}", tag_class(), additional_class())>
            {children()}
        </span>
    }
}

pub fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("neutral") {
        "primary" => "is-primary",
        "success" => "is-success",
        "warning" => "is-warning",
        "error" => "is-danger",
        _ => "is-light",
    }
}
