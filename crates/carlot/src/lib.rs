//! Core of the vehicle inventory service: the domain model, the persistence
//! contract with its in-memory store, the clients for the pricing and maps
//! collaborators, and the HTTP router tying them together.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod vehicles;
