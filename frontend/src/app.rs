use crate::components::drivematch::DriveMatchComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h1 class="title">{"DriveMatch"}</h1>
                <DriveMatchComponent />
            </div>
        }
    }
}
