use std::sync::Arc;

use super::clients::{MapsGateway, PriceGateway};
use super::domain::{Vehicle, VehicleId};
use super::repository::{RepositoryError, VehicleRepository};

/// Service composing the vehicle store with the pricing and maps lookups.
///
/// Single reads and saves hand back records carrying a freshly computed
/// price and resolved address; the stored form never includes either.
pub struct VehicleService<R, P, M> {
    repository: Arc<R>,
    pricing: Arc<P>,
    maps: Arc<M>,
}

impl<R, P, M> VehicleService<R, P, M>
where
    R: VehicleRepository + 'static,
    P: PriceGateway + 'static,
    M: MapsGateway + 'static,
{
    pub fn new(repository: Arc<R>, pricing: Arc<P>, maps: Arc<M>) -> Self {
        Self {
            repository,
            pricing,
            maps,
        }
    }

    /// Every stored record in stored form, without enrichment.
    pub fn list(&self) -> Result<Vec<Vehicle>, VehicleServiceError> {
        Ok(self.repository.find_all()?)
    }

    /// Fetch one record and attach its current price and resolved address.
    pub async fn find_by_id(&self, id: VehicleId) -> Result<Vehicle, VehicleServiceError> {
        let vehicle = self
            .repository
            .find_by_id(id)?
            .ok_or(RepositoryError::NotFound)?;
        self.enrich(vehicle).await
    }

    /// Create or update a record, then return it enriched.
    ///
    /// A record without an identifier is persisted as new. With an
    /// identifier, the identifier must belong to an existing record and
    /// only details and location are taken from the input. The store write
    /// happens before enrichment, so a failed lookup surfaces as an error
    /// even though the record was persisted.
    pub async fn save(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleServiceError> {
        let stored = match vehicle.id {
            Some(id) => {
                let mut existing = self
                    .repository
                    .find_by_id(id)?
                    .ok_or(RepositoryError::NotFound)?;
                existing.details = vehicle.details;
                existing.location = vehicle.location;
                self.repository.save(existing)?
            }
            None => self.repository.save(vehicle)?,
        };
        self.enrich(stored).await
    }

    /// Remove the record with the given identifier.
    pub fn delete(&self, id: VehicleId) -> Result<(), VehicleServiceError> {
        self.repository
            .find_by_id(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(self.repository.delete(id)?)
    }

    /// Attach the current price and resolved address. Both lookups must
    /// succeed; either failure aborts the call with no partial record.
    async fn enrich(&self, mut vehicle: Vehicle) -> Result<Vehicle, VehicleServiceError> {
        let id = vehicle.id.ok_or(RepositoryError::NotFound)?;
        vehicle.price = Some(self.pricing.price(id).await?);
        vehicle.location = self.maps.resolve(&vehicle.location).await?;
        Ok(vehicle)
    }
}

/// Error raised by the vehicle service.
#[derive(Debug, thiserror::Error)]
pub enum VehicleServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Pricing(#[from] super::clients::PricingError),
    #[error(transparent)]
    Maps(#[from] super::clients::MapsError),
}
