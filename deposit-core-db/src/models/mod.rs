pub mod deposit_account;
pub mod identifiable;
pub mod rate_type;

// Re-exports
pub use deposit_account::*;
pub use identifiable::*;
pub use rate_type::*;
