//! Term deposit REST service.
//!
//! Rate types are named interest tiers; deposit accounts are opened against
//! one for an owner known to the external user directory, earn simple
//! interest over their term and can be withdrawn once, at or after maturity.

pub mod clock;
pub mod config;
pub mod http;
pub mod service;
pub mod user_directory;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use http::{router, AppState};
pub use user_directory::HttpUserDirectory;
