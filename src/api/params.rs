use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use super::error::ApiError;
use crate::model::TradeFilter;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> Result<&str, ApiError> {
        match self.search.as_deref() {
            Some(q) if !q.is_empty() => Ok(q),
            _ => Err(ApiError::Validation(
                "query parameter `search` is required".to_string(),
            )),
        }
    }
}

/// Raw filter query. Parameter names are snake_case, unlike the camelCase
/// fields of the trades they filter.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub asset_class: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub trade_type: Option<String>,
}

impl TryFrom<FilterParams> for TradeFilter {
    type Error = ApiError;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        Ok(TradeFilter {
            asset_class: non_empty(params.asset_class),
            start: non_empty(params.start)
                .map(|s| parse_timestamp("start", &s))
                .transpose()?,
            end: non_empty(params.end)
                .map(|s| parse_timestamp("end", &s))
                .transpose()?,
            min_price: non_empty(params.min_price)
                .map(|s| parse_price("min_price", &s))
                .transpose()?,
            max_price: non_empty(params.max_price)
                .map(|s| parse_price("max_price", &s))
                .transpose()?,
            trade_type: non_empty(params.trade_type),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Accepts ISO-8601 date-times with or without seconds, a bare date
/// (midnight), or RFC 3339 with an offset (converted to UTC).
pub fn parse_timestamp(name: &str, raw: &str) -> Result<NaiveDateTime, ApiError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
    {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }

    Err(ApiError::Validation(format!(
        "`{}` is not a valid date-time: {:?}",
        name, raw
    )))
}

pub fn parse_price(name: &str, raw: &str) -> Result<f64, ApiError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ApiError::Validation(format!(
            "`{}` is not a valid number: {:?}",
            name, raw
        ))),
    }
}
