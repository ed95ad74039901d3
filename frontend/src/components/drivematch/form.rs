//! Reads the scrape and analyze forms straight from the DOM.
//!
//! Values are taken as the browser reports them: text fields as strings,
//! number fields through `valueAsNumber` (so an empty field becomes `NaN`).
//! Nothing is validated here; the service owns the rules.

use common::model::search::{resolve_search_id, SearchInfo};
use common::requests::{AnalyzeRequest, ScrapeRequest};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

pub const NAME: &str = "name";
pub const URL: &str = "url";
pub const SEARCH_ID: &str = "search_id";
pub const WEIGHT_HP: &str = "weight_hp";
pub const WEIGHT_PRICE: &str = "weight_price";
pub const WEIGHT_MILEAGE: &str = "weight_mileage";
pub const WEIGHT_AGE: &str = "weight_age";
pub const PREFERRED_AGE: &str = "preferred_age";
pub const FILTER_BY_MANUFACTURER: &str = "filter_by_manufacturer";
pub const FILTER_BY_MODEL: &str = "filter_by_model";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn input(id: &str) -> Option<HtmlInputElement> {
    document()?
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
}

fn text(id: &str) -> String {
    input(id).map(|i| i.value()).unwrap_or_default()
}

fn number(id: &str) -> f64 {
    input(id).map(|i| i.value_as_number()).unwrap_or(f64::NAN)
}

pub fn read_scrape_form() -> ScrapeRequest {
    ScrapeRequest {
        name: text(NAME),
        url: text(URL),
    }
}

/// Builds the analyze request, expanding a typed search-id prefix against the
/// searches currently listed.
pub fn read_analyze_form(searches: &[SearchInfo]) -> AnalyzeRequest {
    let search_id = text(SEARCH_ID);
    AnalyzeRequest {
        search_id: resolve_search_id(&search_id, searches).to_string(),
        weight_hp: number(WEIGHT_HP),
        weight_price: number(WEIGHT_PRICE),
        weight_mileage: number(WEIGHT_MILEAGE),
        weight_age: number(WEIGHT_AGE),
        preferred_age: number(PREFERRED_AGE),
        filter_by_manufacturer: text(FILTER_BY_MANUFACTURER),
        filter_by_model: text(FILTER_BY_MODEL),
    }
}

pub fn set_value(id: &str, value: &str) {
    if let Some(input) = input(id) {
        input.set_value(value);
    }
}
