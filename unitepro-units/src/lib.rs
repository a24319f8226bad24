//! UnitéPro Units - static catalog and conversion table
//!
//! Process-wide read-only data behind `LazyLock`:
//! - [`CATALOG`]: categories, their imperial/metric unit lists, display
//!   metadata and aliases
//! - [`FACTORS`]: the imperial → metric multiplier table

mod catalog;
mod factors;

pub use catalog::{CategoryListing, UnitCatalog, UnitEntry, CATALOG};
pub use factors::{FactorTable, FACTORS};
