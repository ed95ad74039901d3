use crate::app::App;

mod api;
mod app;
mod components;
mod results_grid;

fn main() {
    yew::Renderer::<App>::new().render();
}
