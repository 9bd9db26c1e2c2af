use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDetails {
    /// `BUY` or `SELL`. Not validated, any string is carried through.
    pub buy_sell_indicator: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub counterparty: Option<String>,
    pub instrument_id: String,
    pub instrument_name: String,
    pub trade_date_time: NaiveDateTime,
    pub trade_details: TradeDetails,
    #[serde(default)]
    pub trade_id: Option<String>,
    pub trader: String,
}

impl Trade {
    /// Text fields considered by free-text search, in the order they are checked.
    pub fn searchable_fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("counterparty", self.counterparty.as_deref()),
            ("instrumentId", Some(self.instrument_id.as_str())),
            ("instrumentName", Some(self.instrument_name.as_str())),
            ("trader", Some(self.trader.as_str())),
        ]
    }

    pub fn price(&self) -> f64 {
        self.trade_details.price
    }
}

impl fmt::Debug for Trade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let t = self
            .trade_date_time
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        f.debug_struct("Trade")
            .field("trade_id", &self.trade_id)
            .field("instrument_id", &self.instrument_id)
            .field("trade_date_time", &t)
            .field("side", &self.trade_details.buy_sell_indicator)
            .field("price", &self.trade_details.price)
            .field("quantity", &self.trade_details.quantity)
            .field("trader", &self.trader)
            .finish()
    }
}
