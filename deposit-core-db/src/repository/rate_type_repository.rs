use sqlx::Database;

use crate::models::rate_type::{NewRateTypeModel, RateTypeModel};
use crate::repository::{Create, Delete, FindAll, FindById, Update};

/// Every operation the rate type registry needs from its store.
///
/// `find_all` is ordered by id ascending.
pub trait RateTypeRepository<DB: Database>:
    FindById<DB, RateTypeModel>
    + FindAll<DB, RateTypeModel>
    + Create<DB, NewRateTypeModel, RateTypeModel>
    + Update<DB, RateTypeModel>
    + Delete<DB>
{
}

impl<DB, R> RateTypeRepository<DB> for R
where
    DB: Database,
    R: FindById<DB, RateTypeModel>
        + FindAll<DB, RateTypeModel>
        + Create<DB, NewRateTypeModel, RateTypeModel>
        + Update<DB, RateTypeModel>
        + Delete<DB>,
{
}
