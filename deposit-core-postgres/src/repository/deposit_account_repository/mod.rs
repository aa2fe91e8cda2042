pub mod repo_impl;
pub mod create;
pub mod find_all;
pub mod find_by_id;
pub mod find_by_owner_id;
pub mod mark_withdrawn;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::DepositAccountRepositoryImpl;
