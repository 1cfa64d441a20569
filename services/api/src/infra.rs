use carlot::vehicles::{InMemoryVehicleRepository, MapsClient, PricingClient, VehicleService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ApiVehicleService =
    VehicleService<InMemoryVehicleRepository, PricingClient, MapsClient>;

/// Wire the in-memory store to the two HTTP collaborators.
pub(crate) fn build_vehicle_service(pricing_url: &str, maps_url: &str) -> Arc<ApiVehicleService> {
    let repository = Arc::new(InMemoryVehicleRepository::default());
    let pricing = Arc::new(PricingClient::new(pricing_url));
    let maps = Arc::new(MapsClient::new(maps_url));
    Arc::new(VehicleService::new(repository, pricing, maps))
}
