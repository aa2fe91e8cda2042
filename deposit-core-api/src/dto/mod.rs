pub mod datetime;
pub mod deposit_account;
pub mod error_body;
pub mod rate_type;

pub use datetime::*;
pub use deposit_account::*;
pub use error_body::*;
pub use rate_type::*;
