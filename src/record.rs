//! Query result types.

use serde::Serialize;
use std::fmt;

use crate::carrier::CardType;

/// Decoded record-region fields, before a phone number and carrier are
/// attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordFields {
    pub province: String,
    pub city: String,
    pub zip_code: String,
    pub area_zone: String,
}

impl RecordFields {
    pub(crate) fn into_record(self, phone: &str, card_type: CardType) -> PhoneRecord {
        PhoneRecord {
            phone_number: phone.to_string(),
            province: self.province,
            city: self.city,
            zip_code: self.zip_code,
            area_zone: self.area_zone,
            card_type,
        }
    }
}

/// Result of a successful phone number lookup.
///
/// All strings are copied out of the dataset buffer; the record has no
/// lifetime tie to the parser that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneRecord {
    /// The phone number exactly as passed to `find`.
    pub phone_number: String,
    /// Province name.
    pub province: String,
    /// City name.
    pub city: String,
    /// Postal code.
    pub zip_code: String,
    /// Long-distance area code.
    pub area_zone: String,
    /// Carrier that owns the prefix block.
    pub card_type: CardType,
}

impl fmt::Display for PhoneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "手机号: {}", self.phone_number)?;
        writeln!(f, "区号: {}", self.area_zone)?;
        writeln!(f, "运营商: {}", self.card_type)?;
        writeln!(f, "城市: {}", self.city)?;
        writeln!(f, "邮编: {}", self.zip_code)?;
        writeln!(f, "省份: {}", self.province)
    }
}
