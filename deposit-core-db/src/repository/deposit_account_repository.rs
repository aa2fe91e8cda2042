use sqlx::Database;

use crate::models::deposit_account::{
    DepositAccountDetailsModel, DepositAccountModel, NewDepositAccountModel,
};
use crate::repository::{Create, FindAll, FindById, FindByOwnerId, MarkWithdrawn};

/// Every operation the deposit account ledger needs from its store.
///
/// Reads return accounts joined with their rate type. `find_all` and
/// `find_by_owner_id` are ordered by `opened_at` descending, then `id` descending.
/// Accounts are never updated or deleted other than through `mark_withdrawn`
/// and the rate type cascade.
pub trait DepositAccountRepository<DB: Database>:
    FindById<DB, DepositAccountDetailsModel>
    + FindAll<DB, DepositAccountDetailsModel>
    + FindByOwnerId<DB, DepositAccountDetailsModel>
    + Create<DB, NewDepositAccountModel, DepositAccountModel>
    + MarkWithdrawn<DB, DepositAccountModel>
{
}

impl<DB, R> DepositAccountRepository<DB> for R
where
    DB: Database,
    R: FindById<DB, DepositAccountDetailsModel>
        + FindAll<DB, DepositAccountDetailsModel>
        + FindByOwnerId<DB, DepositAccountDetailsModel>
        + Create<DB, NewDepositAccountModel, DepositAccountModel>
        + MarkWithdrawn<DB, DepositAccountModel>,
{
}
