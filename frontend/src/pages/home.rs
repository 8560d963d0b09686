use crate::components::member_count::MemberCount;
use crate::components::scroll_reveal::use_scroll_reveal;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_reveal();

    html! {
        <>
            <section class="hero">
                <div class="container hero-inner reveal">
                    <h1>{"UK-IR PUBG Community"}</h1>
                    <p class="hero-lead">
                        {"Customs, scrims and community cups for UK and Irish players."}
                    </p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="https://discord.gg/" target="_blank" rel="noopener">
                            {"Join the Discord"}
                        </a>
                        <Link<Route> to={Route::Events} classes="btn btn-ghost">{"Upcoming events"}</Link<Route>>
                    </div>
                </div>
            </section>

            <section class="stats container">
                <div class="stat reveal-left">
                    <MemberCount />
                    <span class="stat-label">{"members"}</span>
                </div>
                <div class="stat reveal-right">
                    <span class="stat-value">{"Weekly"}</span>
                    <span class="stat-label">{"custom games"}</span>
                </div>
            </section>
        </>
    }
}
