pub mod filter;
pub mod trade;

pub use filter::TradeFilter;
pub use trade::{Trade, TradeDetails};
