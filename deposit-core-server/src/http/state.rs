use std::sync::Arc;

use deposit_core_api::service::user_directory::UserDirectory;
use deposit_core_db::repository::deposit_account_repository::DepositAccountRepository;
use deposit_core_db::repository::rate_type_repository::RateTypeRepository;
use sqlx::Postgres;

use crate::clock::Clock;
use crate::service::{DepositAccountService, RateTypeService};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub rate_types: Arc<RateTypeService>,
    pub deposit_accounts: Arc<DepositAccountService>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        rate_type_repository: Arc<dyn RateTypeRepository<Postgres>>,
        deposit_account_repository: Arc<dyn DepositAccountRepository<Postgres>>,
        users: Arc<dyn UserDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rate_types: Arc::new(RateTypeService::new(rate_type_repository.clone())),
            deposit_accounts: Arc::new(DepositAccountService::new(
                deposit_account_repository,
                rate_type_repository,
                users,
            )),
            clock,
        }
    }
}
