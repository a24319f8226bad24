//! UnitéPro - bilingual imperial → metric unit conversion
//!
//! The core behind the converter widget: three fixed categories
//! (length, area, volume), four imperial source units and four metric
//! target units each, and a static table of exact multiplicative
//! factors between them.
//!
//! Exactly three entry points face the host:
//! - [`list_categories`]: the fixed categories, in display order
//! - [`units_for`]: the ordered (imperial, metric) unit lists
//! - [`convert`]: computes via the factor table and returns a
//!   [`ConversionOutcome`], never panics
//!
//! History lives in [`Session`], outside the pure engine, so hosts and
//! tests can drive conversions without state.

mod engine;
mod history;

pub use engine::{convert, swap_units};
pub use history::{History, Session, HISTORY_CAPACITY};
pub use unitepro_core::{
    format_value, messages, CatalogError, Category, Conversion, ConversionOutcome,
    ConversionRecord, System, UnitMetadata,
};
pub use unitepro_units::{CategoryListing, UnitEntry, CATALOG};

/// All categories, in display order
pub fn list_categories() -> &'static [Category] {
    &Category::ALL
}

/// Ordered unit lists for a category: (imperial sources, metric targets)
pub fn units_for(category: Category) -> (&'static [&'static str], &'static [&'static str]) {
    CATALOG.units_for(category)
}

/// String-keyed variant of [`units_for`] for hosts holding a raw
/// category name; fails with `UnknownCategory` outside the fixed set.
pub fn units_for_name(
    category: &str,
) -> Result<(&'static [&'static str], &'static [&'static str]), CatalogError> {
    let category: Category = category.parse()?;
    Ok(units_for(category))
}
