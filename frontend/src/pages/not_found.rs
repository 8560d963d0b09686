use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container not-found">
            <h2>{"Page not found"}</h2>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to home"}</Link<Route>>
        </div>
    }
}
