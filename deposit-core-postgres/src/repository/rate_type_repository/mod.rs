pub mod repo_impl;
pub mod create;
pub mod delete;
pub mod find_all;
pub mod find_by_id;
pub mod update;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::RateTypeRepositoryImpl;
