use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::clients::{MapsGateway, PriceGateway};
use super::domain::{Condition, Details, Location, Vehicle, VehicleId};
use super::repository::{RepositoryError, VehicleRepository};
use super::service::{VehicleService, VehicleServiceError};

/// Inbound representation of a vehicle. The identifier, price, and resolved
/// address never come from the caller, so the draft cannot carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDraft {
    pub condition: Condition,
    pub details: Details,
    pub location: Coordinates,
}

/// Bare coordinate pair accepted on the write path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl VehicleDraft {
    fn into_vehicle(self, id: Option<VehicleId>) -> Vehicle {
        Vehicle {
            id,
            condition: self.condition,
            details: self.details,
            location: Location::coordinate(self.location.lat, self.location.lon),
            price: None,
            created_at: None,
            modified_at: None,
        }
    }
}

/// Router builder for the vehicle CRUD endpoints.
pub fn vehicle_router<R, P, M>(service: Arc<VehicleService<R, P, M>>) -> Router
where
    R: VehicleRepository + 'static,
    P: PriceGateway + 'static,
    M: MapsGateway + 'static,
{
    Router::new()
        .route(
            "/api/v1/vehicles",
            get(list_handler::<R, P, M>).post(create_handler::<R, P, M>),
        )
        .route(
            "/api/v1/vehicles/:vehicle_id",
            get(fetch_handler::<R, P, M>)
                .put(update_handler::<R, P, M>)
                .delete(delete_handler::<R, P, M>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<R, P, M>(
    State(service): State<Arc<VehicleService<R, P, M>>>,
) -> Response
where
    R: VehicleRepository + 'static,
    P: PriceGateway + 'static,
    M: MapsGateway + 'static,
{
    match service.list() {
        Ok(vehicles) => (StatusCode::OK, Json(vehicles)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn fetch_handler<R, P, M>(
    State(service): State<Arc<VehicleService<R, P, M>>>,
    Path(vehicle_id): Path<u64>,
) -> Response
where
    R: VehicleRepository + 'static,
    P: PriceGateway + 'static,
    M: MapsGateway + 'static,
{
    match service.find_by_id(VehicleId(vehicle_id)).await {
        Ok(vehicle) => (StatusCode::OK, Json(vehicle)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<R, P, M>(
    State(service): State<Arc<VehicleService<R, P, M>>>,
    Json(draft): Json<VehicleDraft>,
) -> Response
where
    R: VehicleRepository + 'static,
    P: PriceGateway + 'static,
    M: MapsGateway + 'static,
{
    match service.save(draft.into_vehicle(None)).await {
        Ok(vehicle) => (StatusCode::CREATED, Json(vehicle)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn update_handler<R, P, M>(
    State(service): State<Arc<VehicleService<R, P, M>>>,
    Path(vehicle_id): Path<u64>,
    Json(draft): Json<VehicleDraft>,
) -> Response
where
    R: VehicleRepository + 'static,
    P: PriceGateway + 'static,
    M: MapsGateway + 'static,
{
    match service
        .save(draft.into_vehicle(Some(VehicleId(vehicle_id))))
        .await
    {
        Ok(vehicle) => (StatusCode::OK, Json(vehicle)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<R, P, M>(
    State(service): State<Arc<VehicleService<R, P, M>>>,
    Path(vehicle_id): Path<u64>,
) -> Response
where
    R: VehicleRepository + 'static,
    P: PriceGateway + 'static,
    M: MapsGateway + 'static,
{
    match service.delete(VehicleId(vehicle_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

/// Map service failures onto wire responses: a missing record is the
/// caller's problem, a failed lookup is an upstream one.
fn error_response(err: VehicleServiceError) -> Response {
    let status = match &err {
        VehicleServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        VehicleServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        VehicleServiceError::Pricing(_) | VehicleServiceError::Maps(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
