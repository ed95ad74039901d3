//! DriveMatch client UI: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, form reading and
//! helpers.
//!
//! On first render the component resolves the API endpoint (from its props or
//! the launcher's `/app-config`) and lists the stored searches.

use yew::platform::spawn_local;
use yew::prelude::*;

mod form;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DriveMatchProps;
pub use state::DriveMatchComponent;

use crate::api::load_app_config;

impl Component for DriveMatchComponent {
    type Message = Msg;
    type Properties = DriveMatchProps;

    fn create(ctx: &Context<Self>) -> Self {
        DriveMatchComponent::new(ctx.props().api_endpoint.as_deref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if ctx.props().api_endpoint.is_some() {
                ctx.link().send_message(Msg::LoadSearches);
            } else {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let config = load_app_config().await;
                    link.send_message(Msg::ConfigLoaded(config));
                });
            }
        }
    }
}
