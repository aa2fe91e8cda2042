use deposit_core_db::models::deposit_account::{DepositAccountDetailsModel, DepositAccountModel};
use deposit_core_db::models::rate_type::RateTypeModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;

/// Account columns joined with the owning rate type. Reads append their own
/// `WHERE` and `ORDER BY`.
pub(super) const SELECT_DETAILS: &str = r#"
    SELECT a.id, a.rate_type_id, a.owner_id, a.opened_at, a.matures_at,
           a.principal, a.withdrawn, a.withdrawn_at,
           t.name AS rate_type_name, t.rate AS rate_type_rate
    FROM deposit_account a
    JOIN rate_type t ON t.id = a.rate_type_id
"#;

pub struct DepositAccountRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl DepositAccountRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for DepositAccountDetailsModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let rate_type_id: i64 = row.try_get("rate_type_id")?;
        Ok(DepositAccountDetailsModel {
            account: DepositAccountModel {
                id: row.try_get("id")?,
                rate_type_id,
                owner_id: row.try_get("owner_id")?,
                opened_at: row.try_get("opened_at")?,
                matures_at: row.try_get("matures_at")?,
                principal: row.try_get("principal")?,
                withdrawn: row.try_get("withdrawn")?,
                withdrawn_at: row.try_get("withdrawn_at")?,
            },
            rate_type: RateTypeModel {
                id: rate_type_id,
                name: get_heapless_string(row, "rate_type_name")?,
                rate: row.try_get("rate_type_rate")?,
            },
        })
    }
}
