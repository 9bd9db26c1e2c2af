use chrono::NaiveDateTime;

use super::trade::Trade;

/// Criteria for narrowing the trade list. Every field left as `None`
/// imposes no constraint; the rest are combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeFilter {
    pub asset_class: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub trade_type: Option<String>,
}

impl TradeFilter {
    pub fn is_empty(&self) -> bool {
        *self == TradeFilter::default()
    }

    pub fn asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn trade_type(mut self, trade_type: impl Into<String>) -> Self {
        self.trade_type = Some(trade_type.into());
        self
    }

    /// Predicates for the criteria that are set, in application order:
    /// asset class, start, end, min price, max price, trade type.
    pub(crate) fn predicates(&self) -> Vec<Box<dyn Fn(&Trade) -> bool + '_>> {
        let mut predicates: Vec<Box<dyn Fn(&Trade) -> bool + '_>> = Vec::new();

        if let Some(asset_class) = &self.asset_class {
            // unset asset class never equals a given value
            predicates.push(Box::new(move |t: &Trade| {
                t.asset_class.as_deref() == Some(asset_class.as_str())
            }));
        }
        if let Some(start) = self.start {
            predicates.push(Box::new(move |t: &Trade| t.trade_date_time >= start));
        }
        if let Some(end) = self.end {
            predicates.push(Box::new(move |t: &Trade| t.trade_date_time <= end));
        }
        if let Some(min_price) = self.min_price {
            predicates.push(Box::new(move |t: &Trade| t.price() >= min_price));
        }
        if let Some(max_price) = self.max_price {
            predicates.push(Box::new(move |t: &Trade| t.price() <= max_price));
        }
        if let Some(trade_type) = &self.trade_type {
            predicates.push(Box::new(move |t: &Trade| {
                t.trade_details.buy_sell_indicator == *trade_type
            }));
        }

        predicates
    }
}
