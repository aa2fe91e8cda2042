use chrono::{NaiveDate, NaiveDateTime};
use deposit_core_db::models::deposit_account::NewDepositAccountModel;
use rust_decimal_macros::dec;

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// One-year deposit of 10 000 opened on 2024-01-01.
pub fn create_test_deposit_account(rate_type_id: i64, owner_id: i64) -> NewDepositAccountModel {
    create_test_deposit_account_opened_at(rate_type_id, owner_id, at(2024, 1, 1))
}

pub fn create_test_deposit_account_opened_at(
    rate_type_id: i64,
    owner_id: i64,
    opened_at: NaiveDateTime,
) -> NewDepositAccountModel {
    NewDepositAccountModel {
        rate_type_id,
        owner_id,
        opened_at,
        matures_at: opened_at + chrono::Duration::days(366),
        principal: dec!(10000),
    }
}
