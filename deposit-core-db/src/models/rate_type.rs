use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identifiable::Identifiable;

/// Maximum length of a rate type name in characters, matching `VARCHAR(255)`.
pub const RATE_TYPE_NAME_MAX_LEN: usize = 255;

/// Byte capacity of the name buffer: every allowed name fits, whatever its UTF-8 width.
pub const RATE_TYPE_NAME_CAPACITY: usize = RATE_TYPE_NAME_MAX_LEN * 4;

/// # Documentation
/// - Named interest-rate tier that deposit accounts are opened against
/// - `rate` is a yearly simple-interest rate in (0, 1], stored as NUMERIC(5,4)
/// - Deleting a rate type cascades to every deposit account referencing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTypeModel {
    pub id: i64,
    pub name: HeaplessString<RATE_TYPE_NAME_CAPACITY>,
    pub rate: Decimal,
}

/// A rate type that has not been persisted yet; the identity is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRateTypeModel {
    pub name: HeaplessString<RATE_TYPE_NAME_CAPACITY>,
    pub rate: Decimal,
}

impl RateTypeModel {
    pub fn from_new(id: i64, new: NewRateTypeModel) -> Self {
        Self {
            id,
            name: new.name,
            rate: new.rate,
        }
    }
}

impl Identifiable for RateTypeModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
