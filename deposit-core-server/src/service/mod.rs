pub mod deposit_account_service;
pub mod interest;
pub mod rate_type_service;

pub use deposit_account_service::DepositAccountService;
pub use rate_type_service::RateTypeService;
