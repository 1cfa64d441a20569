use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::vehicles::clients::{MapsError, MapsGateway, PriceGateway, PricingError};
use crate::vehicles::domain::{
    Condition, Details, Location, Manufacturer, Vehicle, VehicleId,
};
use crate::vehicles::router::vehicle_router;
use crate::vehicles::service::VehicleService;
use crate::vehicles::store::InMemoryVehicleRepository;

pub(super) fn camry() -> Vehicle {
    Vehicle {
        id: None,
        condition: Condition::Used,
        details: Details {
            body: "sedan".to_string(),
            model: "Camry".to_string(),
            manufacturer: Manufacturer {
                code: 105,
                name: "Toyota".to_string(),
            },
            number_of_doors: 4,
            fuel_type: "Gasoline".to_string(),
            engine: "2.5L I4".to_string(),
            mileage: 42_500,
            model_year: 2021,
            production_year: 2020,
            external_color: "white".to_string(),
        },
        location: Location::coordinate(38.0, -104.0),
        price: None,
        created_at: None,
        modified_at: None,
    }
}

pub(super) fn impala() -> Vehicle {
    let mut vehicle = camry();
    vehicle.details.model = "Impala".to_string();
    vehicle.details.manufacturer = Manufacturer {
        code: 101,
        name: "Chevrolet".to_string(),
    };
    vehicle.details.external_color = "black".to_string();
    vehicle.location = Location::coordinate(40.73, -73.93);
    vehicle
}

#[derive(Clone)]
pub(super) struct StubPriceGateway {
    quote: String,
    fail: bool,
    calls: Arc<Mutex<Vec<VehicleId>>>,
}

impl StubPriceGateway {
    pub(super) fn quoting(quote: &str) -> Self {
        Self {
            quote: quote.to_string(),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn failing() -> Self {
        Self {
            quote: String::new(),
            fail: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn calls(&self) -> Vec<VehicleId> {
        self.calls.lock().expect("call log mutex poisoned").clone()
    }
}

#[async_trait]
impl PriceGateway for StubPriceGateway {
    async fn price(&self, id: VehicleId) -> Result<String, PricingError> {
        self.calls.lock().expect("call log mutex poisoned").push(id);
        if self.fail {
            return Err(PricingError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            });
        }
        Ok(self.quote.clone())
    }
}

#[derive(Clone)]
pub(super) struct StubMapsGateway {
    city: String,
    state: String,
    fail: bool,
    calls: Arc<Mutex<Vec<(f64, f64)>>>,
}

impl StubMapsGateway {
    pub(super) fn resolving(city: &str, state: &str) -> Self {
        Self {
            city: city.to_string(),
            state: state.to_string(),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn failing() -> Self {
        Self {
            city: String::new(),
            state: String::new(),
            fail: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn calls(&self) -> Vec<(f64, f64)> {
        self.calls.lock().expect("call log mutex poisoned").clone()
    }
}

#[async_trait]
impl MapsGateway for StubMapsGateway {
    async fn resolve(&self, location: &Location) -> Result<Location, MapsError> {
        self.calls
            .lock()
            .expect("call log mutex poisoned")
            .push((location.lat, location.lon));
        if self.fail {
            return Err(MapsError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            });
        }
        Ok(Location {
            lat: location.lat,
            lon: location.lon,
            address: Some(format!("{} {}", location.lat, location.lon)),
            city: Some(self.city.clone()),
            state: Some(self.state.clone()),
            zip: Some("80903".to_string()),
        })
    }
}

pub(super) type StubbedService =
    VehicleService<InMemoryVehicleRepository, StubPriceGateway, StubMapsGateway>;

pub(super) fn build_service(
    pricing: StubPriceGateway,
    maps: StubMapsGateway,
) -> (Arc<StubbedService>, Arc<InMemoryVehicleRepository>) {
    let repository = Arc::new(InMemoryVehicleRepository::default());
    let service = Arc::new(VehicleService::new(
        repository.clone(),
        Arc::new(pricing),
        Arc::new(maps),
    ));
    (service, repository)
}

pub(super) fn enriched_service() -> (Arc<StubbedService>, Arc<InMemoryVehicleRepository>) {
    build_service(
        StubPriceGateway::quoting("USD 20000.00"),
        StubMapsGateway::resolving("Colorado Springs", "CO"),
    )
}

pub(super) fn vehicle_router_with_service(service: Arc<StubbedService>) -> axum::Router {
    vehicle_router(service)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
