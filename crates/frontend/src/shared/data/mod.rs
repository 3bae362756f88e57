//! Reference data compiled into the bundle. Loaded once at startup.

use contracts::shared::catalog::{Catalog, CatalogSource};

const USERS_JSON: &str = include_str!("users.json");
const CATEGORIES_JSON: &str = include_str!("categories.json");
const PRODUCTS_JSON: &str = include_str!("products.json");

pub fn load_catalog() -> anyhow::Result<Catalog> {
    let source = CatalogSource::from_json(USERS_JSON, CATEGORIES_JSON, PRODUCTS_JSON)?;

    let report = source.dangling_references();
    if !report.is_empty() {
        log::warn!(
            "Unresolved references: categories without owner {:?}, products without category {:?}",
            report.categories_without_owner,
            report.products_without_category
        );
    }

    Ok(Catalog::build(source))
}
