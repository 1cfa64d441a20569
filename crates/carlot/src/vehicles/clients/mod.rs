//! Outbound HTTP clients for the two enrichment collaborators.

pub mod maps;
pub mod pricing;

pub use maps::{Address, MapsClient, MapsError, MapsGateway};
pub use pricing::{PriceGateway, PriceQuote, PricingClient, PricingError};
