use crate::api::events::fetch_events;
use crate::components::event_card::{render_events, SkeletonCard};
use crate::components::toast::{use_toast, ToastRequest};
use crate::config::Config;
use gloo_timers::future::TimeoutFuture;
use shared::{Catalog, CatalogAction, CatalogPhase, SiteError, ToastKind, LOAD_ERROR_MESSAGE};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState(pub Catalog);

impl Reducible for CatalogState {
    type Action = CatalogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

/// What a finished load dispatches into the catalog and which toast it
/// raises. Every failure ends in the in-grid error message plus an error
/// toast.
pub fn load_outcome(result: Result<Vec<shared::Event>, SiteError>) -> (CatalogAction, ToastRequest) {
    match result {
        Ok(events) => (
            CatalogAction::Loaded(events),
            ToastRequest::new("Events loaded successfully!", ToastKind::Success),
        ),
        Err(e) => (
            CatalogAction::LoadFailed(e.to_string()),
            ToastRequest::new("Failed to load events", ToastKind::Error),
        ),
    }
}

#[function_component(EventCatalog)]
pub fn event_catalog() -> Html {
    let catalog = use_reducer(CatalogState::default);
    let toasts = use_toast();

    // Load once per mount; failures end up in the grid, never in a panic.
    {
        let catalog = catalog.dispatcher();
        let toasts = toasts.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = fetch_events().await;
                if result.is_ok() {
                    TimeoutFuture::new(Config::LOAD_DELAY_MS).await;
                }
                let (action, toast) = load_outcome(result);
                catalog.dispatch(action);
                toasts.add_toast.emit(toast);
            });
            || ()
        });
    }

    let on_search = {
        let catalog = catalog.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            catalog.dispatch(CatalogAction::SetSearch(input.value()));
        })
    };

    let on_prize = {
        let catalog = catalog.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            catalog.dispatch(CatalogAction::SetMinPrize(select.value()));
        })
    };

    let on_clear = {
        let catalog = catalog.dispatcher();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            catalog.dispatch(CatalogAction::Clear);
            toasts.show("Filters cleared", ToastKind::Success);
        })
    };

    let on_register = {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.show("Opening Discord...", ToastKind::Info))
    };

    let state = &catalog.0;
    let grid = match state.phase() {
        CatalogPhase::Loading => (0..Config::SKELETON_CARDS)
            .map(|i| html! { <SkeletonCard key={i} /> })
            .collect::<Html>(),
        CatalogPhase::Failed(_) => html! { <p>{LOAD_ERROR_MESSAGE}</p> },
        CatalogPhase::Ready => render_events(state.visible(), &on_register),
    };

    let no_events_style = if state.no_events_visible() {
        "display: block"
    } else {
        "display: none"
    };

    html! {
        <section class="events-section">
            <div class="event-controls">
                <input
                    id="event-search"
                    type="search"
                    placeholder="Search events..."
                    aria-label="Search events"
                    value={state.search_input().to_string()}
                    oninput={on_search}
                />
                <select id="prize-filter" aria-label="Minimum prize" onchange={on_prize}>
                    {for Config::PRIZE_OPTIONS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={state.prize_input() == *value}>{*label}</option>
                    })}
                </select>
                <button id="clear-filters" class="btn btn-ghost" onclick={on_clear}>
                    {"Clear filters"}
                </button>
            </div>

            <div id="eventsGrid" class="events-grid">
                {grid}
            </div>

            <div id="no-events" class="no-events" style={no_events_style}>
                <p>{"No events match your search. Try different filters."}</p>
            </div>
        </section>
    }
}
