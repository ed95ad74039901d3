//! Update function for the DriveMatch component.
//!
//! Elm-style: receives the state, the `Context` and a `Msg`, mutates the
//! state and returns whether to re-render. Every API call is spawned with
//! `spawn_local` and reports back through a `*Finished`/`*Loaded` message.

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::form;
use super::helpers::{show_toast, ToastKind};
use super::messages::Msg;
use super::state::DriveMatchComponent;
use crate::api::DriveMatchClient;

pub fn update(
    component: &mut DriveMatchComponent,
    ctx: &Context<DriveMatchComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ConfigLoaded(config) => {
            component.client = DriveMatchClient::new(&config.api_endpoint);
            ctx.link().send_message(Msg::LoadSearches);
            false
        }
        Msg::LoadSearches => {
            component.request_started();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.get_searches().await;
                link.send_message(Msg::SearchesLoaded(result));
            });
            true
        }
        Msg::SearchesLoaded(result) => {
            match component.apply_searches(result) {
                None => log!(format!("Loaded {} searches", component.searches.len())),
                Some(e) => show_toast(&e.to_string(), ToastKind::Error),
            }
            true
        }
        Msg::Scrape => {
            let request = form::read_scrape_form();
            component.request_started();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.scrape(&request.name, &request.url).await;
                link.send_message(Msg::ScrapeFinished(result));
            });
            true
        }
        Msg::ScrapeFinished(result) => {
            component.request_finished();
            match result {
                Ok(_) => {
                    show_toast("Scrape finished.", ToastKind::Info);
                    ctx.link().send_message(Msg::LoadSearches);
                }
                Err(e) => show_toast(&e.to_string(), ToastKind::Error),
            }
            true
        }
        Msg::Analyze => {
            let request = form::read_analyze_form(&component.searches);
            component.request_started();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.analyze(&request).await;
                link.send_message(Msg::AnalyzeFinished(result));
            });
            true
        }
        Msg::AnalyzeFinished(result) => {
            if let Ok(data) = &result {
                if data.is_empty() {
                    log!("Analysis returned no cars");
                }
            }
            // Previously rendered results stay on screen on failure.
            if let Some(e) = component.apply_analysis(result) {
                show_toast(&e.to_string(), ToastKind::Error);
            }
            true
        }
        Msg::SelectSearch(id) => {
            form::set_value(form::SEARCH_ID, &id);
            false
        }
    }
}
