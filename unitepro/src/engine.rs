//! The conversion engine
//!
//! Parses the raw value and multiplies by the registered factor.
//! History mutation and rendering stay with the caller, which keeps
//! the engine trivially testable.

use unitepro_core::{Category, Conversion, ConversionOutcome, ConversionRecord};
use unitepro_units::{CATALOG, FACTORS};

/// Convert `raw_input` from `from_unit` to `to_unit` within `category`.
///
/// Every failure is an outcome value, never a panic: unparseable input
/// yields `InvalidInput`, a missing factor (reverse direction,
/// same-system pair, unknown unit) yields `UnsupportedConversion`.
pub fn convert(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    raw_input: &str,
) -> ConversionOutcome {
    let value = match parse_value(raw_input) {
        Some(v) => v,
        None => return ConversionOutcome::invalid_input(),
    };

    let factor = match FACTORS.factor_for(category, from_unit, to_unit) {
        Some(f) => f,
        None => return ConversionOutcome::unsupported(),
    };

    // Plain f64 multiply; rounding is display-only.
    let result = value * factor;

    let record = ConversionRecord::new(
        category,
        value,
        CATALOG.canonical(from_unit),
        result,
        CATALOG.canonical(to_unit),
    );

    ConversionOutcome::Success(Conversion {
        category,
        value,
        from: CATALOG.metadata_of(from_unit),
        result,
        to: CATALOG.metadata_of(to_unit),
        record,
    })
}

/// Exchange source and target units.
///
/// A pure tuple swap with no validation: the two systems' unit lists
/// are disjoint, so a swapped pair may legitimately stop being
/// convertible and surfaces as `UnsupportedConversion` on the next
/// convert.
pub fn swap_units<'a>(from_unit: &'a str, to_unit: &'a str) -> (&'a str, &'a str) {
    (to_unit, from_unit)
}

fn parse_value(raw: &str) -> Option<f64> {
    // "NaN" and "inf" parse as f64 but are not finite values.
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitepro_core::messages;

    #[test]
    fn test_inch_to_mm() {
        let outcome = convert(Category::Length, "inch", "mm", "2");
        let conversion = outcome.as_success().expect("should convert");
        assert_eq!(conversion.result, 50.8);
        assert_eq!(conversion.from.symbol, "in");
        assert_eq!(conversion.to.symbol, "mm");
        assert_eq!(conversion.record.from_unit, "inch");
        assert_eq!(conversion.record.to_unit, "millimetre");
    }

    #[test]
    fn test_sq_mile_to_km2() {
        let outcome = convert(Category::Area, "sq-mile", "km²", "1");
        assert_eq!(outcome.as_success().expect("should convert").result, 2.58999);
    }

    #[test]
    fn test_gallon_to_litre() {
        let outcome = convert(Category::Volume, "gallon-US", "L", "10");
        assert_eq!(
            outcome.as_success().expect("should convert").result,
            37.85411784
        );
    }

    #[test]
    fn test_invalid_input() {
        for raw in ["abc", "", "  ", "NaN", "inf", "12,5"] {
            let outcome = convert(Category::Length, "inch", "mm", raw);
            assert_eq!(
                outcome.failure_message(),
                Some(messages::INVALID_INPUT),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_reverse_direction_unsupported() {
        let outcome = convert(Category::Length, "metre", "inch", "1");
        assert_eq!(
            outcome.failure_message(),
            Some(messages::UNSUPPORTED_CONVERSION)
        );
    }

    #[test]
    fn test_same_system_unsupported() {
        let outcome = convert(Category::Length, "inch", "foot", "1");
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_unknown_unit_unsupported() {
        let outcome = convert(Category::Length, "furlong", "mm", "1");
        assert_eq!(
            outcome.failure_message(),
            Some(messages::UNSUPPORTED_CONVERSION)
        );
    }

    #[test]
    fn test_swap_then_convert() {
        let (from, to) = swap_units("inch", "metre");
        assert_eq!((from, to), ("metre", "inch"));
        // Swapped pair runs against the empty reverse direction.
        let outcome = convert(Category::Length, from, to, "1");
        assert_eq!(
            outcome.failure_message(),
            Some(messages::UNSUPPORTED_CONVERSION)
        );
    }

    #[test]
    fn test_result_is_exact_product() {
        // Every registered factor, checked bit-for-bit under f64.
        for (category, source, target, factor) in FACTORS.entries() {
            let value = 3.5_f64;
            let outcome = convert(category, source, target, "3.5");
            let conversion = outcome.as_success().expect("registered factor");
            assert_eq!(
                conversion.result,
                value * factor,
                "{} {} -> {}",
                category,
                source,
                target
            );
        }
    }

    #[test]
    fn test_negative_and_scientific_input() {
        let outcome = convert(Category::Length, "inch", "cm", "-2");
        assert_eq!(outcome.as_success().expect("negative ok").result, -5.08);

        let outcome = convert(Category::Length, "inch", "cm", "1e2");
        assert_eq!(outcome.as_success().expect("scientific ok").result, 254.0);
    }

    #[test]
    fn test_bilingual_labeling() {
        // The source always carries its English-family metadata, the
        // target its French-family metadata.
        let outcome = convert(Category::Volume, "gallon-US", "L", "1");
        let conversion = outcome.as_success().expect("should convert");
        assert_eq!(conversion.from.name, "Gallon US");
        assert_eq!(conversion.to.name, "Litre");
        assert_eq!(conversion.summary(), "1 gal = 3.785412 L");
    }
}
