use super::domain::{Vehicle, VehicleId};

/// Storage contract for vehicle records, kept synchronous so any backing
/// store can implement it without an async runtime.
pub trait VehicleRepository: Send + Sync {
    /// Every stored record, ordered by identifier.
    fn find_all(&self) -> Result<Vec<Vehicle>, RepositoryError>;

    /// The record with the given identifier, if one exists.
    fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, RepositoryError>;

    /// Persist the record, assigning an identifier when it has none, and
    /// return the stored form.
    fn save(&self, vehicle: Vehicle) -> Result<Vehicle, RepositoryError>;

    /// Remove the record with the given identifier.
    fn delete(&self, id: VehicleId) -> Result<(), RepositoryError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("vehicle not found")]
    NotFound,
    #[error("vehicle store unavailable: {0}")]
    Unavailable(String),
}
