use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ResultsGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Lays its children out as equally wide, independently scrolling columns.
pub struct ResultsGrid;

impl Component for ResultsGrid {
    type Message = ();
    type Properties = ResultsGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ResultsGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, minmax(0, 1fr));
             gap: 16px;
             align-items: start;
             margin: 16px auto;
             max-width: 1600px;",
            props.columns
        );

        html! {
            <div class="results-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
