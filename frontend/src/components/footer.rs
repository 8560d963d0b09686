use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo((), |_| chrono::Local::now().year());

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <p>
                    {"© "}<span id="year">{*year}</span>{" UK-IR PUBG Community"}
                </p>
                <p class="footer-note">
                    {"Not affiliated with KRAFTON or PUBG Studios."}
                </p>
            </div>
        </footer>
    }
}
