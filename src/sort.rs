//! Sort keys for price book records.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::PricebookError;
use crate::record::Record;

/// The field records are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Type,
    Proof,
    Volume,
    Price,
    PricePerVolume,
    PricePerAlcohol,
}

impl SortField {
    /// Selector names, in the order they are listed in help output.
    pub const NAMES: [&'static str; 7] = [
        "name",
        "type",
        "proof",
        "volume",
        "price",
        "price-per-volume",
        "price-per-alcohol",
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Type => "type",
            SortField::Proof => "proof",
            SortField::Volume => "volume",
            SortField::Price => "price",
            SortField::PricePerVolume => "price-per-volume",
            SortField::PricePerAlcohol => "price-per-alcohol",
        }
    }

    /// Parse a selector name.
    pub fn from_name(name: &str) -> Result<SortField, PricebookError> {
        match name {
            "name" => Ok(SortField::Name),
            "type" => Ok(SortField::Type),
            "proof" => Ok(SortField::Proof),
            "volume" => Ok(SortField::Volume),
            "price" => Ok(SortField::Price),
            "price-per-volume" => Ok(SortField::PricePerVolume),
            "price-per-alcohol" => Ok(SortField::PricePerAlcohol),
            other => Err(PricebookError::InvalidSortField(other.to_string())),
        }
    }

    /// Compare two records on this field.
    ///
    /// Text fields compare byte-wise on the raw column text, so the order
    /// is case-sensitive: uppercase sorts before lowercase.
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortField::Name => a.brand_name().cmp(b.brand_name()),
            SortField::Type => a.liquor_type().cmp(b.liquor_type()),
            SortField::Proof => a.proof().total_cmp(&b.proof()),
            SortField::Volume => a.bottle_size_ml().total_cmp(&b.bottle_size_ml()),
            SortField::Price => a.shelf_price().total_cmp(&b.shelf_price()),
            SortField::PricePerVolume => a.price_per_volume().total_cmp(&b.price_per_volume()),
            SortField::PricePerAlcohol => {
                a.price_per_ml_alcohol().total_cmp(&b.price_per_ml_alcohol())
            }
        }
    }
}

impl FromStr for SortField {
    type Err = PricebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::from_name(s)
    }
}

/// Sort records in place, ascending and stable.
pub fn sort_records(records: &mut [Record], field: SortField) {
    records.sort_by(|a, b| field.compare(a, b));
}

/// Borrowed view of `records` in sorted order. The input is not reordered.
pub fn sorted(records: &[Record], field: SortField) -> Vec<&Record> {
    let mut view: Vec<&Record> = records.iter().collect();
    view.sort_by(|a, b| field.compare(a, b));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Field;
    use crate::record::tests::sample_line;

    fn rec(brand: &str, kind: &str, price: &str) -> Record {
        Record::parse(&sample_line(brand, kind, "  80", "  750", price)).unwrap()
    }

    fn code(r: &Record) -> &str {
        r.text(Field::LiquorCode)
    }

    #[test]
    fn test_from_name_round_trips_every_selector() {
        for name in SortField::NAMES {
            assert_eq!(SortField::from_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        let err = SortField::from_name("color").unwrap_err();
        assert!(matches!(err, PricebookError::InvalidSortField(ref s) if s == "color"));
        assert!("shlf_price".parse::<SortField>().is_err());
    }

    #[test]
    fn test_default_is_name() {
        assert_eq!(SortField::default(), SortField::Name);
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let mut records = vec![
            rec("A", "RUM", "  12.50"),
            rec("B", "RUM", "   3.00"),
            rec("C", "RUM", "   9.99"),
        ];
        sort_records(&mut records, SortField::Price);
        let prices: Vec<f64> = records.iter().map(|r| r.shelf_price()).collect();
        assert_eq!(prices, vec![3.0, 9.99, 12.5]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut records = vec![
            rec("FIRST", "RUM", "   5.00"),
            rec("SECOND", "GIN", "   1.00"),
            rec("THIRD", "RUM", "   5.00"),
            rec("FOURTH", "RUM", "   5.00"),
        ];
        sort_records(&mut records, SortField::Price);
        let names: Vec<&str> = records.iter().map(|r| r.brand_name().trim()).collect();
        assert_eq!(names, vec!["SECOND", "FIRST", "THIRD", "FOURTH"]);

        sort_records(&mut records, SortField::Type);
        let names: Vec<&str> = records.iter().map(|r| r.brand_name().trim()).collect();
        assert_eq!(names, vec!["SECOND", "FIRST", "THIRD", "FOURTH"]);
    }

    #[test]
    fn test_sort_by_name_is_case_sensitive() {
        let records = vec![
            rec("Vodka Z", "VODKA", "   1.00"),
            rec("Apple X", "BRANDY", "   1.00"),
            rec("vodka a", "VODKA", "   1.00"),
        ];
        let view = sorted(&records, SortField::Name);
        let names: Vec<&str> = view.iter().map(|r| r.brand_name().trim()).collect();
        assert_eq!(names, vec!["Apple X", "Vodka Z", "vodka a"]);
    }

    #[test]
    fn test_sorted_leaves_input_untouched() {
        let records = vec![rec("B", "RUM", "   2.00"), rec("A", "RUM", "   1.00")];
        let view = sorted(&records, SortField::Name);
        assert_eq!(view[0].brand_name().trim(), "A");
        assert_eq!(records[0].brand_name().trim(), "B");
        assert_eq!(code(view[0]), "00123");
    }

    #[test]
    fn test_sort_by_derived_ratios() {
        let cheap_strong =
            Record::parse(&sample_line("S", "RUM", " 151", " 1750", "  30.00")).unwrap();
        let pricey_weak =
            Record::parse(&sample_line("W", "LIQUEUR", "  30", "  375", "  20.00")).unwrap();
        let records = vec![pricey_weak, cheap_strong];

        let view = sorted(&records, SortField::PricePerAlcohol);
        assert_eq!(view[0].brand_name().trim(), "S");

        let view = sorted(&records, SortField::PricePerVolume);
        assert_eq!(view[0].brand_name().trim(), "S");

        let view = sorted(&records, SortField::Proof);
        assert_eq!(view[0].brand_name().trim(), "W");

        let view = sorted(&records, SortField::Volume);
        assert_eq!(view[0].brand_name().trim(), "W");
    }
}
