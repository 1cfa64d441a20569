//! Core data model for the vehicle inventory.
//!
//! A stored record holds only source-of-truth fields. The asking price and
//! the descriptive address inside [`Location`] are derived: every read and
//! save recomputes them from the collaborator services, and the store never
//! keeps them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a vehicle is first persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VehicleId(pub u64);

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the vehicle is sold as used or new. Fixed at creation; updates
/// never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    Used,
    New,
}

/// Manufacturer as carried by the pricing domain, a numeric code plus the
/// display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub code: u32,
    pub name: String,
}

/// Descriptive attributes of a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub body: String,
    pub model: String,
    pub manufacturer: Manufacturer,
    pub number_of_doors: u8,
    pub fuel_type: String,
    pub engine: String,
    pub mileage: u32,
    pub model_year: i32,
    pub production_year: i32,
    pub external_color: String,
}

/// Where the vehicle sits. The coordinate pair is the stored truth; the
/// address fields are resolved from it on each read and save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

impl Location {
    /// Bare coordinate with no resolved address.
    pub fn coordinate(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            address: None,
            city: None,
            state: None,
            zip: None,
        }
    }
}

/// A vehicle record as handed to callers.
///
/// `id` is `None` until the store assigns one, and immutable afterwards.
/// `price` carries the display-formatted quote from the pricing lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: Option<VehicleId>,
    pub condition: Condition,
    pub details: Details,
    pub location: Location,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}
