//! Column layout of the MLCC price book.
//!
//! Every line of the price book is a fixed-width record. The table below
//! maps each field to the half-open byte range it occupies:
//!
//! ```text
//! Columns   Item                 Columns   Item
//! 0-4       Liquor code          122-123   Pack size
//! 5-35      Brand name           125-131   On premise price
//! 37-38     ADA number           133-139   Off premise price
//! 40-63     ADA name             141-147   Shelf price
//! 65-88     Vendor name          149-161   Global trade item 1
//! 90-108    Liquor type          163-175   Global trade item 2
//! 110-113   Proof                177-183   Effective date MMDDCCYY
//! 115-119   Bottle size (mL, unit characters excluded)
//! ```

use std::ops::Range;

/// Width of a price book record. Anything past this column is ignored.
pub const RECORD_WIDTH: usize = 184;

/// A named field of a price book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LiquorCode,
    BrandName,
    AdaNumber,
    AdaName,
    VendorName,
    LiquorType,
    Proof,
    BottleSize,
    PackSize,
    OnPremisePrice,
    OffPremisePrice,
    ShelfPrice,
    TradeItem1,
    TradeItem2,
    EffectiveDate,
}

/// The record layout, in column order.
pub const LAYOUT: [(Field, Range<usize>); 15] = [
    (Field::LiquorCode, 0..5),
    (Field::BrandName, 5..36),
    (Field::AdaNumber, 37..39),
    (Field::AdaName, 40..64),
    (Field::VendorName, 65..89),
    (Field::LiquorType, 90..109),
    (Field::Proof, 110..114),
    // The published field is 115-122; the last two columns hold "ML".
    (Field::BottleSize, 115..120),
    (Field::PackSize, 122..124),
    (Field::OnPremisePrice, 125..132),
    (Field::OffPremisePrice, 133..140),
    (Field::ShelfPrice, 141..148),
    (Field::TradeItem1, 149..162),
    (Field::TradeItem2, 163..176),
    (Field::EffectiveDate, 177..184),
];

impl Field {
    /// All fields in layout order.
    pub const ALL: [Field; 15] = [
        Field::LiquorCode,
        Field::BrandName,
        Field::AdaNumber,
        Field::AdaName,
        Field::VendorName,
        Field::LiquorType,
        Field::Proof,
        Field::BottleSize,
        Field::PackSize,
        Field::OnPremisePrice,
        Field::OffPremisePrice,
        Field::ShelfPrice,
        Field::TradeItem1,
        Field::TradeItem2,
        Field::EffectiveDate,
    ];

    /// Byte range of this field within a line.
    pub fn range(self) -> Range<usize> {
        LAYOUT[self as usize].1.clone()
    }

    /// Identifier used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Field::LiquorCode => "liq_code",
            Field::BrandName => "br_name",
            Field::AdaNumber => "ada_num",
            Field::AdaName => "ada_name",
            Field::VendorName => "vend_name",
            Field::LiquorType => "liq_type",
            Field::Proof => "proof",
            Field::BottleSize => "bt_size",
            Field::PackSize => "pck_size",
            Field::OnPremisePrice => "on_prem_price",
            Field::OffPremisePrice => "off_prem_price",
            Field::ShelfPrice => "shlf_price",
            Field::TradeItem1 => "glbl_trd_num1",
            Field::TradeItem2 => "glbl_trd_num2",
            Field::EffectiveDate => "eff_date",
        }
    }

    /// Look up a field by its identifier.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_order_matches_enum() {
        for (i, (field, _)) in LAYOUT.iter().enumerate() {
            assert_eq!(*field as usize, i);
            assert_eq!(Field::ALL[i], *field);
        }
    }

    #[test]
    fn test_ranges_are_ascending_and_disjoint() {
        let mut prev_end = 0;
        for (field, range) in LAYOUT.iter() {
            assert!(range.start < range.end, "{} is empty", field.name());
            assert!(range.start >= prev_end, "{} overlaps", field.name());
            prev_end = range.end;
        }
        assert_eq!(prev_end, RECORD_WIDTH);
    }

    #[test]
    fn test_bottle_size_excludes_units() {
        assert_eq!(Field::BottleSize.range(), 115..120);
        assert_eq!(Field::PackSize.range().start, 122);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Field::from_name("shlf_price"), Some(Field::ShelfPrice));
        assert_eq!(Field::from_name("br_name"), Some(Field::BrandName));
        assert_eq!(Field::from_name("price"), None);
    }
}
