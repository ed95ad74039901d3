//! View rendering for the DriveMatch component.
//!
//! Layout: the scrape and analyze forms on top, a loading message, and a
//! three-column grid with the stored searches, the scored cars container and
//! the grouped cars container. Form inputs are uncontrolled; `form.rs` reads
//! them by id when a form is submitted.

use common::view::{search_entries, ListEntry};
use yew::html::Scope;
use yew::prelude::*;

use super::form;
use super::messages::Msg;
use super::state::DriveMatchComponent;
use crate::components::list_entry::ListEntryComponent;
use crate::results_grid::ResultsGrid;

pub const SEARCHES_CONTAINER: &str = "searchesContainer";
pub const SCORED_CARS_CONTAINER: &str = "scoredCarsContainer";
pub const GROUPED_CARS_CONTAINER: &str = "groupedCarsContainer";

pub fn view(component: &DriveMatchComponent, ctx: &Context<DriveMatchComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="drivematch-root">
            <div class="forms">
                { build_scrape_form(component, link) }
                { build_analyze_form(component, link) }
            </div>
            { build_loading_message(component) }
            <ResultsGrid columns={3}>
                { build_searches_column(component, link) }
                { build_column(
                    SCORED_CARS_CONTAINER,
                    "Scored Cars",
                    &component.scored_entries,
                    component.analyzed,
                ) }
                { build_column(
                    GROUPED_CARS_CONTAINER,
                    "Grouped Cars",
                    &component.grouped_entries,
                    component.analyzed,
                ) }
            </ResultsGrid>
        </div>
    }
}

fn on_submit(link: &Scope<DriveMatchComponent>, msg: fn() -> Msg) -> Callback<SubmitEvent> {
    link.callback(move |e: SubmitEvent| {
        e.prevent_default();
        msg()
    })
}

fn build_scrape_form(component: &DriveMatchComponent, link: &Scope<DriveMatchComponent>) -> Html {
    html! {
        <form class="card" onsubmit={on_submit(link, || Msg::Scrape)}>
            <h2>{"Scrape"}</h2>
            { text_field(form::NAME, "Name", "e.g. Kombi Automatik") }
            { text_field(form::URL, "Search URL", "https://suchen.mobile.de/fahrzeuge/search.html?...") }
            <button type="submit" disabled={component.is_loading()}>{"Scrape"}</button>
        </form>
    }
}

fn build_analyze_form(component: &DriveMatchComponent, link: &Scope<DriveMatchComponent>) -> Html {
    html! {
        <form class="card" onsubmit={on_submit(link, || Msg::Analyze)}>
            <h2>{"Analyze"}</h2>
            <label for={form::SEARCH_ID}>{"Search ID"}</label>
            <input
                id={form::SEARCH_ID}
                type="text"
                list="search-ids"
                placeholder="first characters are enough"
            />
            <datalist id="search-ids">
                { for component.searches.iter().map(|s| html! {
                    <option value={s.id.clone()}>{ s.name.clone() }</option>
                }) }
            </datalist>
            { weight_field(form::WEIGHT_HP, "Weight Horsepower", "1") }
            { weight_field(form::WEIGHT_PRICE, "Weight Price", "-1") }
            { weight_field(form::WEIGHT_MILEAGE, "Weight Mileage", "-1") }
            { weight_field(form::WEIGHT_AGE, "Weight Age", "-1") }
            <label for={form::PREFERRED_AGE}>{"Preferred Age (days)"}</label>
            <input id={form::PREFERRED_AGE} type="number" min="0" max="17800" step="1" value="0" />
            { text_field(form::FILTER_BY_MANUFACTURER, "Manufacturer", "") }
            { text_field(form::FILTER_BY_MODEL, "Model", "") }
            <button type="submit" disabled={component.is_loading()}>{"Analyze"}</button>
        </form>
    }
}

fn text_field(id: &'static str, label: &'static str, placeholder: &'static str) -> Html {
    html! {
        <>
            <label for={id}>{label}</label>
            <input id={id} type="text" placeholder={placeholder} />
        </>
    }
}

fn weight_field(id: &'static str, label: &'static str, default: &'static str) -> Html {
    html! {
        <>
            <label for={id}>{label}</label>
            <input id={id} type="number" min="-10" max="10" step="0.1" value={default} />
        </>
    }
}

fn build_loading_message(component: &DriveMatchComponent) -> Html {
    let display = if component.is_loading() { "block" } else { "none" };
    html! {
        <div id="loadingMessage" class="loading" style={format!("display: {};", display)}>
            {"Loading..."}
        </div>
    }
}

fn build_searches_column(component: &DriveMatchComponent, link: &Scope<DriveMatchComponent>) -> Html {
    let entries = search_entries(&component.searches);
    html! {
        <div class="column">
            <h2>{"Searches"}</h2>
            <div id={SEARCHES_CONTAINER}>
                {
                    if entries.is_empty() {
                        html! { <p class="placeholder">{"No searches"}</p> }
                    } else {
                        component.searches.iter().zip(entries).map(|(search, entry)| {
                            let id = search.id.clone();
                            html! {
                                <ListEntryComponent
                                    entry={entry}
                                    onclick={link.callback(move |_: MouseEvent| Msg::SelectSearch(id.clone()))}
                                />
                            }
                        }).collect::<Html>()
                    }
                }
            </div>
        </div>
    }
}

/// One result container. Its children are rebuilt from `entries` on every
/// render, so a new response always replaces the previous content.
fn build_column(id: &'static str, heading: &'static str, entries: &[ListEntry], analyzed: bool) -> Html {
    html! {
        <div class="column">
            <h2>{heading}</h2>
            <div id={id}>
                {
                    if analyzed && entries.is_empty() {
                        html! { <p class="placeholder">{"No results"}</p> }
                    } else {
                        entries.iter().map(|entry| html! {
                            <ListEntryComponent entry={entry.clone()} />
                        }).collect::<Html>()
                    }
                }
            </div>
        </div>
    }
}
