pub mod sort_header_cell;

pub use sort_header_cell::{SortDirection, SortHeaderCell};
