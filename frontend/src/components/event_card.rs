use crate::config::Config;
use yew::prelude::*;

/// Inline style giving card `index` its place in the cascade.
pub fn animation_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * Config::CARD_DELAY_STEP_SECS)
}

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: shared::Event,
    pub index: usize,
    pub on_register: Callback<MouseEvent>,
}

#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;

    html! {
        <article class="event-card fade-in-up" style={animation_delay(props.index)}>
            <h4>{&event.title}</h4>
            <div class="event-meta">{event.meta_line()}</div>
            <p>{&event.description}</p>
            <div class="event-actions">
                <a class="btn btn-primary" href={event.link.clone()} onclick={props.on_register.clone()}>
                    {"Register"}
                </a>
                <a class="btn btn-ghost" href={event.link.clone()}>{"Details"}</a>
            </div>
        </article>
    }
}

#[function_component(SkeletonCard)]
pub fn skeleton_card() -> Html {
    html! { <div class="event-card skeleton-card skeleton"></div> }
}

/// Renders `events` in input order. An empty slice renders nothing.
pub fn render_events(events: &[shared::Event], on_register: &Callback<MouseEvent>) -> Html {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            html! {
                <EventCard
                    key={index}
                    event={event.clone()}
                    {index}
                    on_register={on_register.clone()}
                />
            }
        })
        .collect::<Html>()
}
