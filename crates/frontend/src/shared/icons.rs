use leptos::prelude::*;

/// Font Awesome glyph by short name. Unknown names render nothing.
pub fn icon(name: &str) -> AnyView {
    match icon_class(name) {
        Some(class) => view! { <i class=class aria-hidden="true"></i> }.into_any(),
        None => view! { <></> }.into_any(),
    }
}

pub fn icon_class(name: &str) -> Option<&'static str> {
    match name {
        "search" => Some("fas fa-search"),
        "filter" => Some("fas fa-filter"),
        "sort" => Some("fas fa-sort"),
        "sort-up" => Some("fas fa-sort-up"),
        "sort-down" => Some("fas fa-sort-down"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_class() {
        assert_eq!(icon_class("search"), Some("fas fa-search"));
        assert_eq!(icon_class("sort-down"), Some("fas fa-sort-down"));
        assert_eq!(icon_class("unknown"), None);
    }
}
