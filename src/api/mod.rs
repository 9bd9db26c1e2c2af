use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::Method,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use crate::model::{Trade, TradeFilter};
use crate::store::TradeStore;

pub mod error;
pub mod params;

use error::ApiError;
use params::{FilterParams, SearchParams};

pub type SharedStore = Arc<TradeStore>;

pub fn router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // static segments win over `:trade_id`
    Router::new()
        .route("/", get(root))
        .route("/trades", get(list_trades))
        .route("/trades/search", get(search_trades))
        .route("/trades/filter", get(filter_trades))
        .route("/trades/:trade_id", get(get_trade))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}

async fn root() -> Json<Value> {
    Json(json!({ "msg": "Welcome to the trade store" }))
}

/// GET /trades
async fn list_trades(State(store): State<SharedStore>) -> Json<Vec<Trade>> {
    Json(store.list_all().to_vec())
}

/// GET /trades/:trade_id
async fn get_trade(
    State(store): State<SharedStore>,
    Path(trade_id): Path<String>,
) -> Result<Json<Trade>, ApiError> {
    debug!(%trade_id, "get trade");
    let trade = store.get_by_id(&trade_id)?;
    Ok(Json(trade.clone()))
}

/// GET /trades/search?search=..
async fn search_trades(
    State(store): State<SharedStore>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
    let query = params.query()?;

    let found = store.search(query)?;
    debug!(query, matched = found.len(), "search trades");
    Ok(Json(found.into_iter().cloned().collect()))
}

/// GET /trades/filter?asset_class=..&start=..&end=..&min_price=..&max_price=..&trade_type=..
async fn filter_trades(
    State(store): State<SharedStore>,
    params: Result<Query<FilterParams>, QueryRejection>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
    let filter = TradeFilter::try_from(params)?;

    let found = store.filter(&filter);
    debug!(?filter, matched = found.len(), "filter trades");
    Ok(Json(found.into_iter().cloned().collect()))
}
