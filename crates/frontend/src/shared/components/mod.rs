pub mod filter_panel;
pub mod table;
pub mod ui;
