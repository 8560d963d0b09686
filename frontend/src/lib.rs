use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::components::toast::{use_toast, ToastProvider};
use gloo_timers::callback::Timeout;
use log::{debug, info};
use shared::ToastKind;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod dom;
pub mod service_worker;
pub mod storage;
pub mod pages {
    pub mod about;
    pub mod events;
    pub mod home;
    pub mod not_found;
}

use config::Config;
use pages::{about::About, events::Events, home::Home, not_found::NotFound};

// Unit test modules only
#[cfg(test)]
mod tests;

/// Page paths match the files the offline worker caches.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/events.html")]
    Events,
    #[at("/about.html")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="app-container">
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
                <Startup />
            </BrowserRouter>
        </ToastProvider>
    }
}

/// One-off page-load work that needs the toast context.
#[function_component(Startup)]
fn startup() -> Html {
    let toasts = use_toast();

    use_effect_with((), move |_| {
        wasm_bindgen_futures::spawn_local(service_worker::register());

        let welcome = Timeout::new(Config::WELCOME_DELAY_MS, move || {
            toasts.show(Config::WELCOME_MESSAGE, ToastKind::Success);
        });
        move || drop(welcome)
    });

    html! {}
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home | Route::Index => html! { <Home /> },
        Route::Events => html! { <Events /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            web_sys::console::error_1(&e);
        }
    });
    Ok(())
}
