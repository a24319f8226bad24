//! Conversion factor table - imperial → metric multipliers
//!
//! Exact unit-definition constants, not approximations. Only the
//! imperial → metric direction is populated; reverse and same-system
//! pairs resolve to absent.

use std::collections::HashMap;
use std::sync::LazyLock;

use unitepro_core::Category;

use crate::catalog::CATALOG;

/// Global factor table, initialized once and never mutated
pub static FACTORS: LazyLock<FactorTable> = LazyLock::new(FactorTable::new);

/// Three-level mapping: category → source unit → target unit → factor
pub struct FactorTable {
    factors: HashMap<Category, HashMap<&'static str, HashMap<&'static str, f64>>>,
}

impl FactorTable {
    pub fn new() -> Self {
        let mut table = FactorTable {
            factors: HashMap::new(),
        };
        table.register_length_factors();
        table.register_area_factors();
        table.register_volume_factors();
        table
    }

    /// Multiplier for (category, source, target), if registered.
    ///
    /// Aliases resolve to their canonical ids first; absence at any
    /// level is `None`, never an error. The caller decides how to
    /// surface an absent factor.
    pub fn factor_for(&self, category: Category, source: &str, target: &str) -> Option<f64> {
        let source = CATALOG.canonical(source);
        let target = CATALOG.canonical(target);
        self.factors.get(&category)?.get(source)?.get(target).copied()
    }

    /// Iterate every registered (category, source, target, factor)
    pub fn entries(&self) -> impl Iterator<Item = (Category, &'static str, &'static str, f64)> + '_ {
        self.factors.iter().flat_map(|(category, sources)| {
            sources.iter().flat_map(move |(source, targets)| {
                targets
                    .iter()
                    .map(move |(target, factor)| (*category, *source, *target, *factor))
            })
        })
    }

    fn insert(
        &mut self,
        category: Category,
        source: &'static str,
        target: &'static str,
        factor: f64,
    ) {
        debug_assert!(factor > 0.0);
        self.factors
            .entry(category)
            .or_default()
            .entry(source)
            .or_default()
            .insert(target, factor);
    }

    fn register_length_factors(&mut self) {
        use Category::Length;

        self.insert(Length, "inch", "millimetre", 25.4);
        self.insert(Length, "inch", "centimetre", 2.54);
        self.insert(Length, "inch", "metre", 0.0254);
        self.insert(Length, "inch", "kilometre", 0.0000254);

        self.insert(Length, "foot", "millimetre", 304.8);
        self.insert(Length, "foot", "centimetre", 30.48);
        self.insert(Length, "foot", "metre", 0.3048);
        self.insert(Length, "foot", "kilometre", 0.0003048);

        self.insert(Length, "yard", "millimetre", 914.4);
        self.insert(Length, "yard", "centimetre", 91.44);
        self.insert(Length, "yard", "metre", 0.9144);
        self.insert(Length, "yard", "kilometre", 0.0009144);

        self.insert(Length, "mile", "millimetre", 1_609_344.0);
        self.insert(Length, "mile", "centimetre", 160_934.4);
        self.insert(Length, "mile", "metre", 1_609.344);
        self.insert(Length, "mile", "kilometre", 1.609344);
    }

    fn register_area_factors(&mut self) {
        use Category::Area;

        self.insert(Area, "sq-inch", "mm²", 645.16);
        self.insert(Area, "sq-inch", "cm²", 6.4516);
        self.insert(Area, "sq-inch", "m²", 0.00064516);
        self.insert(Area, "sq-inch", "km²", 6.4516e-10);

        self.insert(Area, "sq-foot", "mm²", 92_903.04);
        self.insert(Area, "sq-foot", "cm²", 929.0304);
        self.insert(Area, "sq-foot", "m²", 0.09290304);
        self.insert(Area, "sq-foot", "km²", 9.290304e-8);

        self.insert(Area, "sq-yard", "mm²", 836_127.36);
        self.insert(Area, "sq-yard", "cm²", 8_361.2736);
        self.insert(Area, "sq-yard", "m²", 0.83612736);
        self.insert(Area, "sq-yard", "km²", 8.3612736e-7);

        self.insert(Area, "sq-mile", "mm²", 2.58999e12);
        self.insert(Area, "sq-mile", "cm²", 2.58999e10);
        self.insert(Area, "sq-mile", "m²", 2_589_990.0);
        self.insert(Area, "sq-mile", "km²", 2.58999);
    }

    fn register_volume_factors(&mut self) {
        use Category::Volume;

        self.insert(Volume, "cu-inch", "mm³", 16_387.064);
        self.insert(Volume, "cu-inch", "cm³", 16.387064);
        self.insert(Volume, "cu-inch", "m³", 0.000016387064);
        self.insert(Volume, "cu-inch", "L", 0.016387064);

        self.insert(Volume, "cu-foot", "mm³", 28_316_846.592);
        self.insert(Volume, "cu-foot", "cm³", 28_316.846592);
        self.insert(Volume, "cu-foot", "m³", 0.028316846592);
        self.insert(Volume, "cu-foot", "L", 28.316846592);

        self.insert(Volume, "cu-yard", "mm³", 764_554_857.984);
        self.insert(Volume, "cu-yard", "cm³", 764_554.857984);
        self.insert(Volume, "cu-yard", "m³", 0.764554857984);
        self.insert(Volume, "cu-yard", "L", 764.554857984);

        self.insert(Volume, "gallon-US", "mm³", 3_785_411.784);
        self.insert(Volume, "gallon-US", "cm³", 3_785.411784);
        self.insert(Volume, "gallon-US", "m³", 0.003785411784);
        self.insert(Volume, "gallon-US", "L", 3.785411784);
    }
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn test_exact_lookups() {
        assert_eq!(
            FACTORS.factor_for(Category::Length, "inch", "millimetre"),
            Some(25.4)
        );
        assert_eq!(
            FACTORS.factor_for(Category::Area, "sq-mile", "km²"),
            Some(2.58999)
        );
        assert_eq!(
            FACTORS.factor_for(Category::Volume, "gallon-US", "L"),
            Some(3.785411784)
        );
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(
            FACTORS.factor_for(Category::Length, "inch", "mm"),
            Some(25.4)
        );
        assert_eq!(
            FACTORS.factor_for(Category::Volume, "gallon", "litre"),
            Some(3.785411784)
        );
        assert_eq!(
            FACTORS.factor_for(Category::Area, "pouce²", "mm2"),
            Some(645.16)
        );
    }

    #[test]
    fn test_reverse_direction_absent() {
        assert_eq!(FACTORS.factor_for(Category::Length, "metre", "inch"), None);
        assert_eq!(FACTORS.factor_for(Category::Volume, "L", "gallon-US"), None);
    }

    #[test]
    fn test_same_system_absent() {
        assert_eq!(FACTORS.factor_for(Category::Length, "inch", "foot"), None);
        assert_eq!(
            FACTORS.factor_for(Category::Length, "metre", "kilometre"),
            None
        );
    }

    #[test]
    fn test_wrong_category_absent() {
        assert_eq!(FACTORS.factor_for(Category::Area, "inch", "millimetre"), None);
    }

    #[test]
    fn test_complete_bipartite() {
        // Every imperial unit maps to every metric unit of its category.
        for category in Category::ALL {
            let (imperial, metric) = CATALOG.units_for(category);
            for source in imperial {
                for target in metric {
                    assert!(
                        FACTORS.factor_for(category, source, target).is_some(),
                        "missing {} {} -> {}",
                        category,
                        source,
                        target
                    );
                }
            }
        }
        assert_eq!(FACTORS.entries().count(), 48);
    }

    #[test]
    fn test_factors_positive() {
        for (category, source, target, factor) in FACTORS.entries() {
            assert!(
                factor > 0.0,
                "{} {} -> {} has non-positive factor",
                category,
                source,
                target
            );
        }
    }
}
