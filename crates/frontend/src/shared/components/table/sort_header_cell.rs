//! Table header cell with a sort glyph.
//!
//! Sorting is not wired up: the glyph is a static affordance and clicking it
//! only follows the `#/` anchor.
//!
//! ```no_run
//! use frontend::shared::components::table::{SortDirection, SortHeaderCell};
//! use leptos::prelude::*;
//!
//! let _header = view! { <SortHeaderCell label="Product" direction=SortDirection::Descending /> };
//! ```

use crate::shared::icons::icon_class;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn icon_name(&self) -> &'static str {
        match self {
            SortDirection::Unsorted => "sort",
            SortDirection::Ascending => "sort-up",
            SortDirection::Descending => "sort-down",
        }
    }

    /// Font Awesome class of the glyph, e.g. "fas fa-sort-up"
    pub fn glyph_class(&self) -> &'static str {
        icon_class(self.icon_name()).unwrap_or_default()
    }
}

#[component]
pub fn SortHeaderCell(
    /// Column title
    #[prop(into)]
    label: String,
    direction: SortDirection,
) -> impl IntoView {
    view! {
        <th>
            <span class="is-flex is-flex-wrap-nowrap">
                {label}
                <a href="#/">
                    <span class="icon">
                        <i data-cy="SortIcon" class=direction.glyph_class()></i>
                    </span>
                </a>
            </span>
        </th>
    }
}
