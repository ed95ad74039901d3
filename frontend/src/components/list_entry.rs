use common::view::ListEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ListEntryProps {
    pub entry: ListEntry,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Renders a `ListEntry`: optional image, a title that links out when the
/// entry has a link, then one `<p>` per paragraph.
pub struct ListEntryComponent;

impl Component for ListEntryComponent {
    type Message = ();
    type Properties = ListEntryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ListEntryComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let entry = &props.entry;

        let image = match &entry.image {
            Some(image) => html! {
                <img class="car-image" src={image.src.clone()} alt={image.alt.clone()} />
            },
            None => html! {},
        };

        let title = match &entry.title_link {
            Some(link) => html! {
                <a href={link.clone()} target="_blank" rel="noopener noreferrer">{ entry.title.clone() }</a>
            },
            None => html! { { entry.title.clone() } },
        };

        html! {
            <div class={classes!(entry.classes.clone())} onclick={props.onclick.clone()}>
                { image }
                <h3>{ title }</h3>
                { for entry.paragraphs.iter().map(|text| html! { <p>{ text.clone() }</p> }) }
            </div>
        }
    }
}
