// tests/analyze_response.rs
//
// Decodes payloads shaped like the DriveMatch API's responses and checks what
// ends up in the result columns.

use drivematch_common::endpoint::Endpoint;
use drivematch_common::model::car::ScoredAndGroupedCars;
use drivematch_common::model::search::{SearchInfo, resolve_search_id};
use drivematch_common::requests::{AnalyzeRequest, ApiRequest, SearchesRequest};
use drivematch_common::view::{analysis_entries, search_entries};
use serde_json::{Value, json};

fn car(id: &str, manufacturer: &str, model: &str, price: i64) -> Value {
    json!({
        "id": id,
        "manufacturer": manufacturer,
        "model": model,
        "description": format!("{manufacturer} {model} gepflegt"),
        "price": price,
        "attributes": ["Unfallfrei", "Scheckheftgepflegt"],
        "first_registration": "2020-06-01T00:00:00",
        "mileage": 70500,
        "horse_power": 190,
        "fuel_type": "Diesel",
        "details_url": format!("https://suchen.mobile.de/fahrzeuge/details.html?id={id}"),
        "image_url": format!("https://img.classistatic.de/api/v1/mo-prod/images/{id}")
    })
}

fn analyze_payload() -> Value {
    json!({
        "scored_cars": [
            { "car": car("1", "BMW", "320d Touring", 27900), "score": 1.75 },
            { "car": car("2", "BMW", "320d Touring", 29900), "score": 1.2 },
            { "car": car("3", "Audi", "A4 Avant", 31450), "score": -0.3 }
        ],
        "grouped_cars": [
            {
                "manufacturer": "BMW",
                "model": "320d Touring",
                "count": 2,
                "average_price": 28900.0,
                "average_mileage": 70500.0,
                "average_horse_power": 190.0,
                "average_age": 1386.0
            },
            {
                "manufacturer": "Audi",
                "model": "A4 Avant",
                "count": 1,
                "average_price": 31450.0,
                "average_mileage": 70500.0,
                "average_horse_power": 190.0
            }
        ]
    })
}

#[test]
fn one_entry_per_scored_car_and_group() {
    let data: <AnalyzeRequest as ApiRequest>::Response =
        serde_json::from_value(analyze_payload()).unwrap();
    let (scored, grouped) = analysis_entries(&data);

    assert_eq!(scored.len(), 3);
    assert_eq!(grouped.len(), 2);

    assert_eq!(scored[0].title, "BMW 320d Touring");
    assert_eq!(scored[2].paragraphs[1], "31450€");
    assert!(scored.iter().all(|entry| entry.image.is_some()));

    assert_eq!(grouped[0].paragraphs.last().unwrap(), "Average Age: 1386.00 days");
    assert_eq!(grouped[1].paragraphs.last().unwrap(), "Average Horsepower: 190.00hp");
}

#[test]
fn empty_analysis_renders_nothing() {
    let data: ScoredAndGroupedCars =
        serde_json::from_value(json!({ "scored_cars": [], "grouped_cars": [] })).unwrap();
    let (scored, grouped) = analysis_entries(&data);

    assert!(data.is_empty());
    assert!(scored.is_empty());
    assert!(grouped.is_empty());
}

#[test]
fn malformed_analysis_is_a_decode_error() {
    let result = serde_json::from_value::<ScoredAndGroupedCars>(json!({ "detail": "Not Found" }));
    assert!(result.is_err());
}

#[test]
fn searches_listing_round_trip_through_endpoint() {
    let endpoint = Endpoint::new("http://127.0.0.1:8000/api/v2");
    assert_eq!(
        endpoint.url_for(&SearchesRequest).unwrap().as_str(),
        "http://127.0.0.1:8000/api/v2/searches"
    );

    let searches: Vec<SearchInfo> = serde_json::from_value(json!([
        {
            "id": "5d2c1e4f-0b8e-4a43-9a55-3c7f1f0b9e21",
            "name": "Kombi Automatik",
            "url": "https://suchen.mobile.de/fahrzeuge/search.html?c=EstateCar",
            "amount_of_cars": 118,
            "timestamp": "2024-03-02T18:41:07"
        },
        {
            "id": "9a0f6b13-7c2d-4e11-8f3a-2b5d6e7f8091",
            "name": "SUV",
            "url": "https://suchen.mobile.de/fahrzeuge/search.html?c=OffRoad",
            "amount_of_cars": 64,
            "date": "2024-03-05 09:12:44"
        }
    ]))
    .unwrap();

    let entries = search_entries(&searches);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].paragraphs[2], "Date: 2024-03-02T18:41:07");
    assert_eq!(
        resolve_search_id("9a0f", &searches),
        "9a0f6b13-7c2d-4e11-8f3a-2b5d6e7f8091"
    );

    let request = AnalyzeRequest {
        search_id: resolve_search_id("5d2c", &searches).to_string(),
        ..AnalyzeRequest::default()
    };
    let url = endpoint.url_for(&request).unwrap();
    assert!(url
        .as_str()
        .starts_with("http://127.0.0.1:8000/api/v2/analyze?search_id=5d2c1e4f-0b8e-4a43-9a55-3c7f1f0b9e21&weight_hp=1&"));
}
