use serde::{Deserialize, Serialize};

/// A single listing scraped by the DriveMatch service.
///
/// The client never builds or mutates these; they arrive as part of an
/// `analyze` response and live only for the current render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    pub description: String,
    /// Asking price in euros.
    pub price: i64,
    #[serde(default)]
    pub attributes: Vec<String>,
    /// ISO-8601 timestamp as emitted by the API. Kept verbatim and only parsed
    /// for display, see `view::format::registration_date`.
    pub first_registration: String,
    /// Kilometres.
    pub mileage: i64,
    pub horse_power: i64,
    pub fuel_type: String,
    pub details_url: String,
    /// May be empty when the listing has no picture.
    #[serde(default)]
    pub image_url: String,
}

/// A car with the relevance score the service computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCar {
    pub car: Car,
    pub score: f64,
}

/// Aggregate bucket of all cars sharing a manufacturer and model.
///
/// Every average is computed server side. `average_age` (in days) is only
/// sent by newer versions of the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedCarsByManufacturerAndModel {
    pub manufacturer: String,
    pub model: String,
    pub count: u64,
    pub average_price: f64,
    pub average_mileage: f64,
    pub average_horse_power: f64,
    #[serde(default)]
    pub average_age: Option<f64>,
}

/// Body of the `analyze` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoredAndGroupedCars {
    pub scored_cars: Vec<ScoredCar>,
    pub grouped_cars: Vec<GroupedCarsByManufacturerAndModel>,
}

impl ScoredAndGroupedCars {
    pub fn is_empty(&self) -> bool {
        self.scored_cars.is_empty() && self.grouped_cars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grouped_cars_without_average_age() {
        let group: GroupedCarsByManufacturerAndModel = serde_json::from_value(json!({
            "manufacturer": "BMW",
            "model": "320d",
            "count": 3,
            "average_price": 31999.333,
            "average_mileage": 42000.0,
            "average_horse_power": 190.0
        }))
        .unwrap();

        assert_eq!(group.count, 3);
        assert_eq!(group.average_age, None);
    }

    #[test]
    fn car_without_image_or_attributes() {
        let car: Car = serde_json::from_value(json!({
            "id": "abc",
            "manufacturer": "Skoda",
            "model": "Octavia",
            "description": "Combi",
            "price": 21500,
            "first_registration": "2021-04-01T00:00:00",
            "mileage": 48000,
            "horse_power": 150,
            "fuel_type": "Diesel",
            "details_url": "https://example.com/1"
        }))
        .unwrap();

        assert!(car.attributes.is_empty());
        assert!(car.image_url.is_empty());
    }

    #[test]
    fn empty_analysis() {
        assert!(ScoredAndGroupedCars::default().is_empty());
    }
}
