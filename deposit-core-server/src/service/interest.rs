//! Simple-interest and maturity rules for term deposits.
//!
//! Interest is earned over the whole contractual term, from `opened_at` to
//! `matures_at`, whatever the date it is looked at:
//!
//! ```text
//! interest = principal * rate * days / 365.25
//! ```
//!
//! `days` is fractional (millisecond precision) and the result is rounded to
//! cents with banker's rounding.

use chrono::NaiveDateTime;
use deposit_core_db::models::deposit_account::{DepositAccountDetailsModel, DepositAccountModel};
use rust_decimal::Decimal;

/// Average year length, leap years included.
pub const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36_525, 0, 0, false, 2);

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Length of the account's term in fractional days.
pub fn term_in_days(account: &DepositAccountModel) -> Decimal {
    let millis = (account.matures_at - account.opened_at).num_milliseconds();
    Decimal::from(millis) / Decimal::from(MILLIS_PER_DAY)
}

/// Interest earned by the account over its full term.
///
/// `_as_of` is accepted so callers can pass the date the figure is shown for;
/// it does not change the result.
pub fn calculate_interest(
    details: &DepositAccountDetailsModel,
    _as_of: Option<NaiveDateTime>,
) -> Decimal {
    let account = &details.account;
    let gross = account.principal * details.rate_type.rate * term_in_days(account);
    (gross / DAYS_PER_YEAR).round_dp(2)
}

/// Whether the account may be withdrawn at `as_of`.
pub fn can_withdraw(account: &DepositAccountModel, as_of: NaiveDateTime) -> bool {
    !account.withdrawn && as_of >= account.matures_at
}
