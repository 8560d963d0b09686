use crate::components::scroll_reveal::use_scroll_reveal;
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_reveal();

    html! {
        <div class="container about">
            <section class="reveal">
                <h2>{"About us"}</h2>
                <p>
                    {"We are a community of PUBG players from the UK and Ireland. \
                      Anyone is welcome, whether you play every night or once a month."}
                </p>
            </section>
            <section class="reveal-left">
                <h3>{"What we run"}</h3>
                <p>{"Custom lobbies, ranked squads looking for a fourth, and prize cups through the year."}</p>
            </section>
            <section class="reveal-right">
                <h3>{"House rules"}</h3>
                <p>{"Be decent, no cheating, and keep comms clear during matches."}</p>
            </section>
        </div>
    }
}
