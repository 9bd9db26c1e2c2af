pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod seed;
pub mod store;

pub use error::StoreError;
pub use model::{Trade, TradeDetails, TradeFilter};
pub use store::TradeStore;
