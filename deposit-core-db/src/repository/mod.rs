pub mod create;
pub mod delete;
pub mod deposit_account_repository;
pub mod find_all;
pub mod find_by_id;
pub mod find_by_owner_id;
pub mod mark_withdrawn;
pub mod rate_type_repository;
pub mod update;

// Re-exports
pub use create::*;
pub use delete::*;
pub use deposit_account_repository::*;
pub use find_all::*;
pub use find_by_id::*;
pub use find_by_owner_id::*;
pub use mark_withdrawn::*;
pub use rate_type_repository::*;
pub use update::*;
