use crate::components::event_catalog::EventCatalog;
use crate::components::scroll_reveal::use_scroll_reveal;
use yew::prelude::*;

#[function_component(Events)]
pub fn events() -> Html {
    use_scroll_reveal();

    html! {
        <div class="container">
            <header class="page-header reveal">
                <h2>{"Events"}</h2>
                <p>{"Tournaments and community nights. Register through Discord."}</p>
            </header>
            <EventCatalog />
        </div>
    }
}
