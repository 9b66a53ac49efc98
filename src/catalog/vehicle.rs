//! Vehicle record definition

use serde::{Deserialize, Serialize};

/// A single vehicle listing as decoded from a listing provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Catalog-assigned identifier, unique within a catalog
    pub id: String,
    /// Manufacturer, e.g. "Acura"
    pub make: String,
    /// Model name, e.g. "NSX" or "CR-V Hybrid"
    pub model: String,
    /// Model year
    #[serde(default)]
    pub year: u16,
    /// Asking price in US dollars
    #[serde(default)]
    pub price: f64,
    /// Odometer reading in miles
    #[serde(default)]
    pub mileage: u64,
    /// Fuel type ("Gasoline", "Hybrid", "Electric", ...)
    #[serde(default)]
    pub fuel_type: Option<String>,
    /// Transmission ("Automatic", "Manual", ...)
    #[serde(default)]
    pub transmission: Option<String>,
    /// Listed features
    #[serde(default)]
    pub features: Vec<String>,
    /// Free-text listing description
    #[serde(default)]
    pub description: Option<String>,
}

impl Vehicle {
    /// Create a vehicle with the required fields; everything else is empty
    pub fn new(
        id: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        price: f64,
        mileage: u64,
    ) -> Self {
        Self {
            id: id.into(),
            make: make.into(),
            model: model.into(),
            year,
            price,
            mileage,
            fuel_type: None,
            transmission: None,
            features: Vec::new(),
            description: None,
        }
    }

    /// Set the fuel type
    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    /// Add a feature
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description text, empty when the provider sent none
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Fuel type, empty when unknown
    pub fn fuel_type(&self) -> &str {
        self.fuel_type.as_deref().unwrap_or("")
    }

    /// "<year> <make> <model>"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields() {
        let json = r#"{"id": "v1", "make": "Honda", "model": "Civic", "year": 2019, "price": 18500, "mileage": 42000}"#;
        let vehicle: Vehicle = serde_json::from_str(json).unwrap();

        assert_eq!(vehicle.description(), "");
        assert_eq!(vehicle.fuel_type(), "");
        assert!(vehicle.features.is_empty());
        assert_eq!(vehicle.title(), "2019 Honda Civic");
    }

    #[test]
    fn test_builder() {
        let vehicle = Vehicle::new("v2", "Toyota", "Prius", 2021, 24000.0, 15000)
            .with_fuel_type("Hybrid")
            .with_feature("Backup Camera")
            .with_description("Great mileage");

        assert_eq!(vehicle.fuel_type(), "Hybrid");
        assert_eq!(vehicle.features, vec!["Backup Camera"]);
        assert_eq!(vehicle.description(), "Great mileage");
    }
}
