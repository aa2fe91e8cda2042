pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::{DepositRepositories, PostgresRepositories};
pub use repository::deposit_account_repository::DepositAccountRepositoryImpl;
pub use repository::rate_type_repository::RateTypeRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
