//! Presentational model for the result columns.
//!
//! The frontend never formats DTO fields itself: every scored car, grouped
//! bucket and stored search is first turned into a `ListEntry`, which the
//! renderer maps one-to-one onto DOM nodes. Keeping this step in plain Rust
//! makes the displayed text testable without a browser.

pub mod format;

use crate::model::car::{GroupedCarsByManufacturerAndModel, ScoredAndGroupedCars, ScoredCar};
use crate::model::search::SearchInfo;

/// CSS class carried by every entry.
pub const LIST_ENTRY_CLASS: &str = "list-entry";

/// An image shown above an entry's title.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryImage {
    pub src: String,
    pub alt: String,
}

/// One rendered item of a result column: optional image, a title (optionally
/// linked) and a list of paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub classes: Vec<String>,
    pub title: String,
    pub title_link: Option<String>,
    pub image: Option<EntryImage>,
    pub paragraphs: Vec<String>,
}

impl ListEntry {
    pub fn new(title: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            classes: vec![LIST_ENTRY_CLASS.to_string()],
            title: title.into(),
            title_link: None,
            image: None,
            paragraphs,
        }
    }

    /// Links the title; empty links are ignored.
    pub fn with_link(mut self, link: &str) -> Self {
        self.title_link = non_empty(link);
        self
    }

    /// Adds an image; an empty `src` leaves the entry without one.
    pub fn with_image(mut self, src: &str, alt: &str) -> Self {
        self.image = non_empty(src).map(|src| EntryImage {
            src,
            alt: alt.to_string(),
        });
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl From<&ScoredCar> for ListEntry {
    fn from(scored: &ScoredCar) -> Self {
        let car = &scored.car;
        let title = format!("{} {}", car.manufacturer, car.model);
        ListEntry::new(
            title.clone(),
            vec![
                car.description.clone(),
                format!("{}€", car.price),
                format!(
                    "EZ {} - {}km - {}hp - {}",
                    format::registration_date(&car.first_registration),
                    car.mileage,
                    car.horse_power,
                    car.fuel_type
                ),
                format!("Score: {}", format::average(scored.score)),
            ],
        )
        .with_link(&car.details_url)
        .with_image(&car.image_url, &title)
    }
}

impl From<&GroupedCarsByManufacturerAndModel> for ListEntry {
    fn from(group: &GroupedCarsByManufacturerAndModel) -> Self {
        let mut paragraphs = vec![
            format!("Count: {}", group.count),
            format!("Average Price: {}€", format::average(group.average_price)),
            format!("Average Mileage: {}km", format::average(group.average_mileage)),
            format!("Average Horsepower: {}hp", format::average(group.average_horse_power)),
        ];
        if let Some(age) = group.average_age {
            paragraphs.push(format!("Average Age: {} days", format::average(age)));
        }
        ListEntry::new(format!("{} {}", group.manufacturer, group.model), paragraphs)
    }
}

impl From<&SearchInfo> for ListEntry {
    fn from(search: &SearchInfo) -> Self {
        ListEntry::new(
            search.name.clone(),
            vec![
                format!("ID: {}", search.id),
                format!("Cars: {}", search.amount_of_cars),
                format!("Date: {}", search.date),
            ],
        )
        .with_link(&search.url)
    }
}

/// Entries for the two result containers: scored cars and grouped buckets.
pub fn analysis_entries(data: &ScoredAndGroupedCars) -> (Vec<ListEntry>, Vec<ListEntry>) {
    let scored = data.scored_cars.iter().map(ListEntry::from).collect();
    let grouped = data.grouped_cars.iter().map(ListEntry::from).collect();
    (scored, grouped)
}

pub fn search_entries(searches: &[SearchInfo]) -> Vec<ListEntry> {
    searches.iter().map(ListEntry::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::car::Car;

    fn scored(image_url: &str) -> ScoredCar {
        ScoredCar {
            car: Car {
                id: "1".into(),
                manufacturer: "Volkswagen".into(),
                model: "Passat Variant".into(),
                description: "2.0 TDI DSG Elegance".into(),
                price: 28990,
                attributes: vec!["Unfallfrei".into()],
                first_registration: "2021-03-01T00:00:00".into(),
                mileage: 61000,
                horse_power: 150,
                fuel_type: "Diesel".into(),
                details_url: "https://example.com/details/1".into(),
                image_url: image_url.into(),
            },
            score: 0.87654,
        }
    }

    #[test]
    fn scored_car_entry() {
        let entry = ListEntry::from(&scored("https://img.example.com/1.jpg"));

        assert_eq!(entry.classes, [LIST_ENTRY_CLASS]);
        assert_eq!(entry.title, "Volkswagen Passat Variant");
        assert_eq!(entry.title_link.as_deref(), Some("https://example.com/details/1"));
        assert_eq!(
            entry.image,
            Some(EntryImage {
                src: "https://img.example.com/1.jpg".into(),
                alt: "Volkswagen Passat Variant".into(),
            })
        );
        assert_eq!(
            entry.paragraphs,
            [
                "2.0 TDI DSG Elegance",
                "28990€",
                "EZ 01.03.2021 - 61000km - 150hp - Diesel",
                "Score: 0.88",
            ]
        );
    }

    #[test]
    fn scored_car_without_image() {
        let entry = ListEntry::from(&scored(""));
        assert_eq!(entry.image, None);
        assert!(entry.title_link.is_some());
    }

    #[test]
    fn grouped_entry_has_no_link_or_image() {
        let group = GroupedCarsByManufacturerAndModel {
            manufacturer: "Audi".into(),
            model: "A4 Avant".into(),
            count: 4,
            average_price: 30124.5,
            average_mileage: 55321.333,
            average_horse_power: 187.25,
            average_age: Some(1234.5678),
        };
        let entry = ListEntry::from(&group);

        assert_eq!(entry.title, "Audi A4 Avant");
        assert_eq!(entry.title_link, None);
        assert_eq!(entry.image, None);
        assert_eq!(
            entry.paragraphs,
            [
                "Count: 4",
                "Average Price: 30124.50€",
                "Average Mileage: 55321.33km",
                "Average Horsepower: 187.25hp",
                "Average Age: 1234.57 days",
            ]
        );
    }

    #[test]
    fn search_entry() {
        let search = SearchInfo {
            id: "7f3a9c".into(),
            name: "Kombi".into(),
            url: "https://suchen.mobile.de/fahrzeuge/search.html".into(),
            amount_of_cars: 42,
            date: "2024-02-01 10:00:00".into(),
        };
        let entry = ListEntry::from(&search);

        assert_eq!(entry.title, "Kombi");
        assert_eq!(entry.title_link.as_deref(), Some("https://suchen.mobile.de/fahrzeuge/search.html"));
        assert_eq!(entry.paragraphs, ["ID: 7f3a9c", "Cars: 42", "Date: 2024-02-01 10:00:00"]);
    }
}
