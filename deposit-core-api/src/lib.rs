pub mod dto;
pub mod error;
pub mod service;

pub use dto::*;
pub use error::*;
pub use service::*;
