//! Price book record parsing.
//!
//! A [`Record`] holds the raw text of every field in [`LAYOUT`] together
//! with the numeric values needed for the two derived price ratios.

use std::fmt;

use crate::error::PricebookError;
use crate::layout::{Field, LAYOUT};

/// One parsed line of the price book.
///
/// Text fields are stored exactly as they appear in the line, padding
/// included. Records are immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    liquor_code: String,
    brand_name: String,
    ada_number: String,
    ada_name: String,
    vendor_name: String,
    liquor_type: String,
    proof_text: String,
    bottle_size_text: String,
    pack_size: String,
    on_premise_price: String,
    off_premise_price: String,
    shelf_price_text: String,
    trade_item_1: String,
    trade_item_2: String,
    effective_date: String,

    proof: f64,
    bottle_size_ml: f64,
    shelf_price: f64,
    price_per_volume: f64,
    price_per_ml_alcohol: f64,
}

/// Round to three decimal places, half away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Extract `range` from `line`, clamped to the line length.
///
/// Columns are byte positions; a range that splits a multi-byte character
/// is decoded lossily rather than rejected.
fn slice_columns(line: &str, start: usize, end: usize) -> String {
    let bytes = line.as_bytes();
    let end = end.min(bytes.len());
    let start = start.min(end);
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}

fn parse_number(field: Field, text: &str) -> Result<f64, PricebookError> {
    let trimmed = text.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        PricebookError::malformed(format!("{} is not a number: '{trimmed}'", field.name()))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(PricebookError::malformed(format!(
            "{} must be a non-negative number: '{trimmed}'",
            field.name()
        )));
    }
    Ok(value)
}

impl Record {
    /// Parse one fixed-width line.
    ///
    /// Fails with [`PricebookError::MalformedRecord`] when proof, bottle
    /// size or shelf price is not a number, or when proof or bottle size is
    /// zero.
    pub fn parse(line: &str) -> Result<Record, PricebookError> {
        let mut record = Record {
            liquor_code: String::new(),
            brand_name: String::new(),
            ada_number: String::new(),
            ada_name: String::new(),
            vendor_name: String::new(),
            liquor_type: String::new(),
            proof_text: String::new(),
            bottle_size_text: String::new(),
            pack_size: String::new(),
            on_premise_price: String::new(),
            off_premise_price: String::new(),
            shelf_price_text: String::new(),
            trade_item_1: String::new(),
            trade_item_2: String::new(),
            effective_date: String::new(),
            proof: 0.0,
            bottle_size_ml: 0.0,
            shelf_price: 0.0,
            price_per_volume: 0.0,
            price_per_ml_alcohol: 0.0,
        };

        for (field, range) in LAYOUT.iter() {
            *record.slot_mut(*field) = slice_columns(line, range.start, range.end);
        }

        record.shelf_price = parse_number(Field::ShelfPrice, &record.shelf_price_text)?;
        record.proof = parse_number(Field::Proof, &record.proof_text)?;
        record.bottle_size_ml = parse_number(Field::BottleSize, &record.bottle_size_text)?;

        if record.bottle_size_ml == 0.0 {
            return Err(PricebookError::malformed("bottle size is zero"));
        }
        if record.proof == 0.0 {
            return Err(PricebookError::malformed("proof is zero"));
        }

        let alcohol_ml = (record.proof / 2.0 / 100.0) * record.bottle_size_ml;
        record.price_per_volume = round3(record.shelf_price / record.bottle_size_ml);
        record.price_per_ml_alcohol = round3(record.shelf_price / alcohol_ml);

        Ok(record)
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::LiquorCode => &mut self.liquor_code,
            Field::BrandName => &mut self.brand_name,
            Field::AdaNumber => &mut self.ada_number,
            Field::AdaName => &mut self.ada_name,
            Field::VendorName => &mut self.vendor_name,
            Field::LiquorType => &mut self.liquor_type,
            Field::Proof => &mut self.proof_text,
            Field::BottleSize => &mut self.bottle_size_text,
            Field::PackSize => &mut self.pack_size,
            Field::OnPremisePrice => &mut self.on_premise_price,
            Field::OffPremisePrice => &mut self.off_premise_price,
            Field::ShelfPrice => &mut self.shelf_price_text,
            Field::TradeItem1 => &mut self.trade_item_1,
            Field::TradeItem2 => &mut self.trade_item_2,
            Field::EffectiveDate => &mut self.effective_date,
        }
    }

    /// Raw text of any layout field.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::LiquorCode => &self.liquor_code,
            Field::BrandName => &self.brand_name,
            Field::AdaNumber => &self.ada_number,
            Field::AdaName => &self.ada_name,
            Field::VendorName => &self.vendor_name,
            Field::LiquorType => &self.liquor_type,
            Field::Proof => &self.proof_text,
            Field::BottleSize => &self.bottle_size_text,
            Field::PackSize => &self.pack_size,
            Field::OnPremisePrice => &self.on_premise_price,
            Field::OffPremisePrice => &self.off_premise_price,
            Field::ShelfPrice => &self.shelf_price_text,
            Field::TradeItem1 => &self.trade_item_1,
            Field::TradeItem2 => &self.trade_item_2,
            Field::EffectiveDate => &self.effective_date,
        }
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn liquor_type(&self) -> &str {
        &self.liquor_type
    }

    pub fn proof(&self) -> f64 {
        self.proof
    }

    pub fn bottle_size_ml(&self) -> f64 {
        self.bottle_size_ml
    }

    pub fn shelf_price(&self) -> f64 {
        self.shelf_price
    }

    /// Shelf price per milliliter of product.
    pub fn price_per_volume(&self) -> f64 {
        self.price_per_volume
    }

    /// Shelf price per milliliter of pure alcohol.
    pub fn price_per_ml_alcohol(&self) -> f64 {
        self.price_per_ml_alcohol
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t\t{}\t{:.1}\t{} mL\t${:.2}/btl\t\t${:.3}/mL\t${:.3}/mL of Alc.",
            self.brand_name,
            self.liquor_type,
            self.proof,
            self.bottle_size_ml.trunc() as u64,
            self.shelf_price,
            self.price_per_volume,
            self.price_per_ml_alcohol,
        )
    }
}
