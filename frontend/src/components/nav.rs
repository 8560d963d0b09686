use crate::components::theme_toggle::ThemeToggle;
use crate::config::Config;
use crate::dom;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_menu_open = use_state(|| false);
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let toggle_menu = {
        let is_menu_open = is_menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            dom::toggle_root_class(Config::NAV_OPEN_CLASS);
            is_menu_open.set(!*is_menu_open);
        })
    };

    let link_class = |route: Route| {
        let active = current_route == route
            || (route == Route::Home && current_route == Route::Index);
        classes!("nav-link", active.then_some("active"))
    };

    html! {
        <header class="site-header">
            <nav class="nav container">
                <Link<Route> to={Route::Home} classes="brand">
                    <img src="assets/images/IMG_6841-compressed.png" alt="" class="brand-logo" />
                    <span>{"UK-IR PUBG"}</span>
                </Link<Route>>

                <button
                    id="nav-toggle"
                    class="nav-toggle"
                    aria-controls="nav-menu"
                    aria-expanded={(*is_menu_open).to_string()}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span class="nav-toggle-bar"></span>
                </button>

                <ul id="nav-menu" class="nav-menu">
                    <li>
                        <Link<Route> to={Route::Home} classes={link_class(Route::Home)}>{"Home"}</Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Events} classes={link_class(Route::Events)}>{"Events"}</Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::About} classes={link_class(Route::About)}>{"About"}</Link<Route>>
                    </li>
                    <li><ThemeToggle /></li>
                </ul>
            </nav>
        </header>
    }
}
