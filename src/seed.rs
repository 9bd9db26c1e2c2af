use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{Trade, TradeDetails};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .unwrap_or_default()
}

/// The built-in dataset served when no data file is configured.
pub fn seed_trades() -> Vec<Trade> {
    vec![
        Trade {
            trade_id: Some("1".to_string()),
            asset_class: Some("Equity".to_string()),
            counterparty: Some("XYZ Bank".to_string()),
            instrument_id: "AAPL".to_string(),
            instrument_name: "Apple Inc".to_string(),
            trade_date_time: at(2023, 6, 1, 10, 30),
            trade_details: TradeDetails {
                buy_sell_indicator: "BUY".to_string(),
                price: 150.0,
                quantity: 100,
            },
            trader: "John Doe".to_string(),
        },
        Trade {
            trade_id: Some("2".to_string()),
            asset_class: Some("Share".to_string()),
            counterparty: Some("Z Bank".to_string()),
            instrument_id: "BBPL".to_string(),
            instrument_name: "Meta Inc".to_string(),
            trade_date_time: at(2023, 7, 2, 11, 31),
            trade_details: TradeDetails {
                buy_sell_indicator: "SELL".to_string(),
                price: 150.0,
                quantity: 100,
            },
            trader: "Mohan Deepak".to_string(),
        },
    ]
}
