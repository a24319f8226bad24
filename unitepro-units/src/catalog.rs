//! Unit catalog - the fixed bilingual unit lists and display metadata
//!
//! Each category lists four imperial units and four metric units, with
//! French display names and short symbols. The two lists are disjoint
//! by construction.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;
use unitepro_core::{Category, System, UnitMetadata};

/// Global unit catalog, initialized once and never mutated
pub static CATALOG: LazyLock<UnitCatalog> = LazyLock::new(UnitCatalog::new);

/// Definition of one registered unit
#[derive(Debug, Clone)]
struct UnitDef {
    name: &'static str,
    symbol: &'static str,
    category: Category,
    system: System,
}

/// Ordered unit listings for one category
#[derive(Debug, Default)]
struct CategoryUnits {
    imperial: Vec<&'static str>,
    metric: Vec<&'static str>,
}

/// One unit of a listing, with its display metadata
#[derive(Debug, Clone, Serialize)]
pub struct UnitEntry {
    pub id: &'static str,
    #[serde(flatten)]
    pub metadata: UnitMetadata,
}

/// Serializable listing of one category's units, for host display
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub id: &'static str,
    pub label: &'static str,
    pub source_units: Vec<UnitEntry>,
    pub target_units: Vec<UnitEntry>,
}

/// Registry of the fixed categories and their units
pub struct UnitCatalog {
    units: HashMap<&'static str, UnitDef>,
    aliases: HashMap<&'static str, &'static str>,
    length: CategoryUnits,
    area: CategoryUnits,
    volume: CategoryUnits,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut catalog = UnitCatalog {
            units: HashMap::new(),
            aliases: HashMap::new(),
            length: CategoryUnits::default(),
            area: CategoryUnits::default(),
            volume: CategoryUnits::default(),
        };
        catalog.register_length_units();
        catalog.register_area_units();
        catalog.register_volume_units();
        catalog
    }

    /// Ordered unit lists for a category: (imperial sources, metric targets)
    pub fn units_for(&self, category: Category) -> (&[&'static str], &[&'static str]) {
        let listing = self.listing(category);
        (&listing.imperial, &listing.metric)
    }

    /// Display metadata for a unit, by canonical id or alias.
    ///
    /// An unregistered identifier yields a fallback record carrying the
    /// raw id as both name and symbol, so display never fails.
    pub fn metadata_of(&self, unit: &str) -> UnitMetadata {
        match self.resolve(unit) {
            Some(def) => UnitMetadata::new(def.name, def.symbol),
            None => UnitMetadata::fallback(unit),
        }
    }

    /// Canonical id for an identifier or alias; unknown ids pass through
    /// unchanged so the caller's lookup fails where it decides to.
    pub fn canonical<'a>(&'a self, unit: &'a str) -> &'a str {
        if self.units.contains_key(unit) {
            return unit;
        }
        self.aliases.get(unit).copied().unwrap_or(unit)
    }

    /// Full listing of a category with display metadata, for hosts that
    /// render selection widgets
    pub fn listing_of(&self, category: Category) -> CategoryListing {
        let (imperial, metric) = self.units_for(category);
        let entry = |id: &&'static str| UnitEntry {
            id: *id,
            metadata: self.metadata_of(id),
        };
        CategoryListing {
            id: category.id(),
            label: category.label(),
            source_units: imperial.iter().map(entry).collect(),
            target_units: metric.iter().map(entry).collect(),
        }
    }

    /// Which system a unit belongs to, if registered
    pub fn system_of(&self, unit: &str) -> Option<System> {
        self.resolve(unit).map(|def| def.system)
    }

    /// Which category a unit belongs to, if registered
    pub fn category_of(&self, unit: &str) -> Option<Category> {
        self.resolve(unit).map(|def| def.category)
    }

    fn listing(&self, category: Category) -> &CategoryUnits {
        match category {
            Category::Length => &self.length,
            Category::Area => &self.area,
            Category::Volume => &self.volume,
        }
    }

    fn resolve(&self, unit: &str) -> Option<&UnitDef> {
        if let Some(def) = self.units.get(unit) {
            return Some(def);
        }
        self.aliases
            .get(unit)
            .and_then(|canonical| self.units.get(canonical))
    }

    fn register(
        &mut self,
        category: Category,
        system: System,
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
    ) {
        let listing = match category {
            Category::Length => &mut self.length,
            Category::Area => &mut self.area,
            Category::Volume => &mut self.volume,
        };
        match system {
            System::Imperial => listing.imperial.push(id),
            System::Metric => listing.metric.push(id),
        }
        self.units.insert(
            id,
            UnitDef {
                name,
                symbol,
                category,
                system,
            },
        );
    }

    fn alias(&mut self, alias: &'static str, id: &'static str) {
        self.aliases.insert(alias, id);
    }

    fn register_length_units(&mut self) {
        use Category::Length;
        use System::{Imperial, Metric};

        self.register(Length, Imperial, "inch", "Pouce", "in");
        self.register(Length, Imperial, "foot", "Pied", "ft");
        self.register(Length, Imperial, "yard", "Yard", "yd");
        self.register(Length, Imperial, "mile", "Mile", "mi");

        self.register(Length, Metric, "millimetre", "Millimètre", "mm");
        self.register(Length, Metric, "centimetre", "Centimètre", "cm");
        self.register(Length, Metric, "metre", "Mètre", "m");
        self.register(Length, Metric, "kilometre", "Kilomètre", "km");

        // Symbol shorthand
        self.alias("in", "inch");
        self.alias("ft", "foot");
        self.alias("yd", "yard");
        self.alias("mi", "mile");
        self.alias("mm", "millimetre");
        self.alias("cm", "centimetre");
        self.alias("m", "metre");
        self.alias("km", "kilometre");

        // French spellings
        self.alias("pouce", "inch");
        self.alias("pied", "foot");
    }

    fn register_area_units(&mut self) {
        use Category::Area;
        use System::{Imperial, Metric};

        self.register(Area, Imperial, "sq-inch", "Pouce carré", "in²");
        self.register(Area, Imperial, "sq-foot", "Pied carré", "ft²");
        self.register(Area, Imperial, "sq-yard", "Yard carré", "yd²");
        self.register(Area, Imperial, "sq-mile", "Mile carré", "mi²");

        self.register(Area, Metric, "mm²", "Millimètre carré", "mm²");
        self.register(Area, Metric, "cm²", "Centimètre carré", "cm²");
        self.register(Area, Metric, "m²", "Mètre carré", "m²");
        self.register(Area, Metric, "km²", "Kilomètre carré", "km²");

        // ASCII shorthand
        self.alias("mm2", "mm²");
        self.alias("cm2", "cm²");
        self.alias("m2", "m²");
        self.alias("km2", "km²");

        // French spellings
        self.alias("pouce²", "sq-inch");
        self.alias("pied²", "sq-foot");
        self.alias("yard²", "sq-yard");
        self.alias("mile²", "sq-mile");
    }

    fn register_volume_units(&mut self) {
        use Category::Volume;
        use System::{Imperial, Metric};

        self.register(Volume, Imperial, "cu-inch", "Pouce cube", "in³");
        self.register(Volume, Imperial, "cu-foot", "Pied cube", "ft³");
        self.register(Volume, Imperial, "cu-yard", "Yard cube", "yd³");
        self.register(Volume, Imperial, "gallon-US", "Gallon US", "gal");

        self.register(Volume, Metric, "mm³", "Millimètre cube", "mm³");
        self.register(Volume, Metric, "cm³", "Centimètre cube", "cm³");
        self.register(Volume, Metric, "m³", "Mètre cube", "m³");
        self.register(Volume, Metric, "L", "Litre", "L");

        // ASCII shorthand
        self.alias("mm3", "mm³");
        self.alias("cm3", "cm³");
        self.alias("m3", "m³");
        self.alias("litre", "L");
        self.alias("l", "L");

        // French spellings
        self.alias("pouce³", "cu-inch");
        self.alias("pied³", "cu-foot");
        self.alias("yard³", "cu-yard");
        self.alias("gallon", "gallon-US");
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_by_four_per_category() {
        for category in Category::ALL {
            let (imperial, metric) = CATALOG.units_for(category);
            assert_eq!(imperial.len(), 4, "{} imperial", category);
            assert_eq!(metric.len(), 4, "{} metric", category);
        }
    }

    #[test]
    fn test_systems_disjoint() {
        for category in Category::ALL {
            let (imperial, metric) = CATALOG.units_for(category);
            for unit in imperial {
                assert!(!metric.contains(unit), "{} in both systems", unit);
            }
        }
    }

    #[test]
    fn test_listing_order() {
        let (imperial, metric) = CATALOG.units_for(Category::Length);
        assert_eq!(imperial, ["inch", "foot", "yard", "mile"]);
        assert_eq!(metric, ["millimetre", "centimetre", "metre", "kilometre"]);
    }

    #[test]
    fn test_metadata() {
        let meta = CATALOG.metadata_of("inch");
        assert_eq!(meta.name, "Pouce");
        assert_eq!(meta.symbol, "in");

        let meta = CATALOG.metadata_of("gallon-US");
        assert_eq!(meta.name, "Gallon US");
        assert_eq!(meta.symbol, "gal");
    }

    #[test]
    fn test_metadata_via_alias() {
        let meta = CATALOG.metadata_of("mm");
        assert_eq!(meta.name, "Millimètre");
        assert_eq!(meta.symbol, "mm");

        let meta = CATALOG.metadata_of("pouce³");
        assert_eq!(meta.name, "Pouce cube");
    }

    #[test]
    fn test_metadata_fallback() {
        let meta = CATALOG.metadata_of("furlong");
        assert_eq!(meta, UnitMetadata::fallback("furlong"));
        assert_eq!(meta.name, "furlong");
        assert_eq!(meta.symbol, "furlong");
    }

    #[test]
    fn test_canonical() {
        assert_eq!(CATALOG.canonical("mm"), "millimetre");
        assert_eq!(CATALOG.canonical("metre"), "metre");
        assert_eq!(CATALOG.canonical("gallon"), "gallon-US");
        assert_eq!(CATALOG.canonical("furlong"), "furlong");
    }

    #[test]
    fn test_listing_of() {
        let listing = CATALOG.listing_of(Category::Volume);
        assert_eq!(listing.id, "volume");
        assert_eq!(listing.label, "Volume");
        assert_eq!(listing.source_units.len(), 4);
        assert_eq!(listing.target_units[3].id, "L");
        assert_eq!(listing.target_units[3].metadata.name, "Litre");
    }

    #[test]
    fn test_system_and_category_of() {
        assert_eq!(CATALOG.system_of("inch"), Some(System::Imperial));
        assert_eq!(CATALOG.system_of("km"), Some(System::Metric));
        assert_eq!(CATALOG.category_of("sq-mile"), Some(Category::Area));
        assert_eq!(CATALOG.system_of("furlong"), None);
    }
}
