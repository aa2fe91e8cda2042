use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::deposit_account_repository::DepositAccountRepositoryImpl;
use crate::repository::rate_type_repository::RateTypeRepositoryImpl;

/// Builds repositories that share one connection pool.
///
/// Every statement is a single-row write or a read, so repositories borrow
/// connections from the pool per call instead of holding a transaction.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn create_all_repositories(&self) -> DepositRepositories {
        DepositRepositories {
            rate_type_repository: Arc::new(RateTypeRepositoryImpl::new(self.pool.clone())),
            deposit_account_repository: Arc::new(DepositAccountRepositoryImpl::new(
                self.pool.clone(),
            )),
        }
    }
}

pub struct DepositRepositories {
    pub rate_type_repository: Arc<RateTypeRepositoryImpl>,
    pub deposit_account_repository: Arc<DepositAccountRepositoryImpl>,
}
