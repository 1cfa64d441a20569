use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::Utc;

use super::domain::{Location, Vehicle, VehicleId};
use super::repository::{RepositoryError, VehicleRepository};

/// Mutex-guarded map standing in for an embedded database. Identifiers
/// come from a sequence starting at 1.
pub struct InMemoryVehicleRepository {
    records: Mutex<HashMap<VehicleId, Vehicle>>,
    sequence: AtomicU64,
}

impl Default for InMemoryVehicleRepository {
    fn default() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            sequence: AtomicU64::new(1),
        }
    }
}

/// Derived fields never reach the stored form; whatever the caller put in
/// `price` or the address fields is dropped here.
fn stored_form(mut vehicle: Vehicle) -> Vehicle {
    vehicle.price = None;
    vehicle.location = Location::coordinate(vehicle.location.lat, vehicle.location.lon);
    vehicle
}

impl VehicleRepository for InMemoryVehicleRepository {
    fn find_all(&self) -> Result<Vec<Vehicle>, RepositoryError> {
        let records = self.records.lock().expect("vehicle store mutex poisoned");
        let mut vehicles: Vec<Vehicle> = records.values().cloned().collect();
        vehicles.sort_by_key(|vehicle| vehicle.id);
        Ok(vehicles)
    }

    fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, RepositoryError> {
        let records = self.records.lock().expect("vehicle store mutex poisoned");
        Ok(records.get(&id).cloned())
    }

    fn save(&self, vehicle: Vehicle) -> Result<Vehicle, RepositoryError> {
        let mut records = self.records.lock().expect("vehicle store mutex poisoned");
        let now = Utc::now();
        let mut stored = stored_form(vehicle);

        match stored.id {
            Some(id) => {
                let existing = records.get(&id).ok_or(RepositoryError::NotFound)?;
                stored.created_at = existing.created_at;
                stored.modified_at = Some(now);
                records.insert(id, stored.clone());
            }
            None => {
                let id = VehicleId(self.sequence.fetch_add(1, Ordering::Relaxed));
                stored.id = Some(id);
                stored.created_at = Some(now);
                stored.modified_at = Some(now);
                records.insert(id, stored.clone());
            }
        }

        Ok(stored)
    }

    fn delete(&self, id: VehicleId) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("vehicle store mutex poisoned");
        records
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
