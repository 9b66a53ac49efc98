//! In-memory catalog with loading helpers

use super::vehicle::Vehicle;
use crate::error::{MatchError, Result};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Read-only collection of vehicles available to a search call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id.as_str()) {
                return Err(MatchError::DuplicateVehicle {
                    id: vehicle.id.clone(),
                });
            }
        }
        Ok(Self { vehicles })
    }

    /// Parse a JSON array of vehicles
    pub fn from_json_str(json: &str) -> Result<Self> {
        let vehicles: Vec<Vehicle> = serde_json::from_str(json)?;
        Self::new(vehicles)
    }

    /// Load a JSON array of vehicles from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!("Loaded {} vehicles from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// All vehicles in catalog order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Look up a vehicle by id
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Order-sensitive hash of every vehicle's contents, used in cache keys.
    /// Any edit to a listing changes it.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for vehicle in &self.vehicles {
            hash_vehicle(&mut hasher, vehicle);
        }
        format!("{:x}", hasher.finalize())
    }
}

fn hash_vehicle(hasher: &mut Sha256, vehicle: &Vehicle) {
    let mut field = |bytes: &[u8]| {
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    };

    field(vehicle.id.as_bytes());
    field(vehicle.make.as_bytes());
    field(vehicle.model.as_bytes());
    field(&vehicle.year.to_le_bytes());
    field(&vehicle.price.to_bits().to_le_bytes());
    field(&vehicle.mileage.to_le_bytes());
    field(vehicle.fuel_type.as_deref().unwrap_or("").as_bytes());
    field(vehicle.transmission.as_deref().unwrap_or("").as_bytes());
    field(&(vehicle.features.len() as u64).to_le_bytes());
    for feature in &vehicle.features {
        field(feature.as_bytes());
    }
    field(vehicle.description().as_bytes());
}
