//! Shared list helpers: search input and match highlighting.
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::ops::Range;

/// Byte ranges of `text` matching `filter` case-insensitively.
///
/// Returns nothing when lowercasing would shift byte offsets (some
/// non-ASCII letters change length), so callers can always slice `text`.
pub fn match_ranges(text: &str, filter: &str) -> Vec<Range<usize>> {
    if filter.is_empty() {
        return Vec::new();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Vec::new();
        }
        ranges.push(start..end);
        last_pos = end;
    }

    ranges
}

/// Renders `text` with case-insensitive matches of `filter` highlighted
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for range in ranges {
        if range.start > last_pos {
            parts.push(view! { <span>{text[last_pos..range.start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! {
                <span class="has-background-warning-light has-text-weight-semibold">
                    {text[range.clone()].to_string()}
                </span>
            }
            .into_any(),
        );
        last_pos = range.end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with a clear button.
///
/// Every keystroke is forwarded immediately; the clear button exists only
/// while the value is non-empty.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value on every edit, and with "" on clear
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    view! {
        <p class="control has-icons-left has-icons-right">
            <input
                data-cy="SearchField"
                type="text"
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />

            <span class="icon is-left">{icon("search")}</span>

            {move || {
                (!value.get().is_empty())
                    .then(|| {
                        view! {
                            <span class="icon is-right">
                                <button
                                    data-cy="ClearButton"
                                    type="button"
                                    class="delete"
                                    title="Clear"
                                    on:click=move |_| on_change.run(String::new())
                                ></button>
                            </span>
                        }
                    })
            }}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Banana", "an"), vec![1..3, 3..5]);
        assert_eq!(match_ranges("Ice cream", "CREAM"), vec![4..9]);
        assert_eq!(match_ranges("Milk", "tea"), Vec::<Range<usize>>::new());
    }

    #[test]
    fn test_match_ranges_empty_filter() {
        assert!(match_ranges("Milk", "").is_empty());
    }

    #[test]
    fn test_match_ranges_non_overlapping() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![0..2, 2..4]);
    }

    #[test]
    fn test_match_ranges_multibyte() {
        assert_eq!(match_ranges("Café au lait", "é"), vec![3..5]);
        // 'İ' lowercases to two chars, offsets would drift
        assert!(match_ranges("İstanbul", "stan").is_empty());
    }
}
