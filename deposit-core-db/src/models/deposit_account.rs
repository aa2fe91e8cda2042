use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identifiable::Identifiable;
use super::rate_type::RateTypeModel;

/// # Documentation
/// - Term deposit opened against a rate type for an external owner
/// - `owner_id` references a user of the external user directory, not a local table
/// - `withdrawn_at` is set if and only if `withdrawn` is true, and is never before `matures_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct DepositAccountModel {
    pub id: i64,
    pub rate_type_id: i64,
    pub owner_id: i64,
    pub opened_at: NaiveDateTime,
    pub matures_at: NaiveDateTime,
    pub principal: Decimal,
    pub withdrawn: bool,
    pub withdrawn_at: Option<NaiveDateTime>,
}

/// A deposit account that has not been persisted yet.
///
/// New accounts are always open: the withdrawal columns are not part of the insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDepositAccountModel {
    pub rate_type_id: i64,
    pub owner_id: i64,
    pub opened_at: NaiveDateTime,
    pub matures_at: NaiveDateTime,
    pub principal: Decimal,
}

/// A deposit account joined with the rate type it was opened against.
///
/// Interest is computed from this record, so the rate is always at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAccountDetailsModel {
    pub account: DepositAccountModel,
    pub rate_type: RateTypeModel,
}

impl DepositAccountModel {
    pub fn from_new(id: i64, new: NewDepositAccountModel) -> Self {
        Self {
            id,
            rate_type_id: new.rate_type_id,
            owner_id: new.owner_id,
            opened_at: new.opened_at,
            matures_at: new.matures_at,
            principal: new.principal,
            withdrawn: false,
            withdrawn_at: None,
        }
    }

    /// Marks the account as withdrawn at `withdrawn_at`.
    pub fn mark_withdrawn(&mut self, withdrawn_at: NaiveDateTime) {
        self.withdrawn = true;
        self.withdrawn_at = Some(withdrawn_at);
    }
}

impl Identifiable for DepositAccountModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for DepositAccountDetailsModel {
    fn get_id(&self) -> i64 {
        self.account.id
    }
}
