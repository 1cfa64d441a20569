//! Vehicle inventory: domain model, storage, enrichment clients, service,
//! and HTTP routing.
//!
//! The service is the composition point. It persists records through the
//! [`repository::VehicleRepository`] contract and, on every single read and
//! save, recomputes the derived price and address through the two gateways
//! in [`clients`]. Listing skips enrichment and returns stored records as
//! they are.

pub mod clients;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use clients::{
    Address, MapsClient, MapsError, MapsGateway, PriceGateway, PriceQuote, PricingClient,
    PricingError,
};
pub use domain::{Condition, Details, Location, Manufacturer, Vehicle, VehicleId};
pub use repository::{RepositoryError, VehicleRepository};
pub use router::{vehicle_router, Coordinates, VehicleDraft};
pub use service::{VehicleService, VehicleServiceError};
pub use store::InMemoryVehicleRepository;
