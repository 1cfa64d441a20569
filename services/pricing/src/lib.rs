//! Stand-in for the external pricing service. Quotes are a pure function of
//! the vehicle identifier, so repeated lookups for the same vehicle always
//! agree.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Quote payload, shaped the way the inventory service's client expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub currency: String,
    pub price: f64,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: u64,
}

#[derive(Debug, Deserialize)]
struct PriceQuery {
    #[serde(rename = "vehicleId")]
    vehicle_id: u64,
}

/// Deterministic quote for a vehicle identifier. Identifier 0 has no quote
/// and the endpoint answers 404 for it.
pub fn quote_for(vehicle_id: u64) -> Price {
    let dollars = 5_000 + vehicle_id.wrapping_mul(7_919) % 45_000;
    let cents = vehicle_id.wrapping_mul(53) % 100;
    Price {
        currency: "USD".to_string(),
        price: dollars as f64 + cents as f64 / 100.0,
        vehicle_id,
    }
}

pub fn router() -> Router {
    Router::new().route("/services/price", get(price_handler))
}

async fn price_handler(Query(query): Query<PriceQuery>) -> Response {
    if query.vehicle_id == 0 {
        let body = Json(json!({ "error": "no price known for vehicle 0" }));
        return (StatusCode::NOT_FOUND, body).into_response();
    }

    Json(quote_for(query.vehicle_id)).into_response()
}
