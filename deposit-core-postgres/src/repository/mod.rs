pub mod db_init;
pub mod deposit_account_repository;
pub mod rate_type_repository;
