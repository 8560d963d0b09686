use gloo_timers::callback::Timeout;
use shared::member_count::{drifted_count, initial_count, DRIFT_DELAY_MS, FALLBACK_TEXT};
use yew::prelude::*;

/// Mock community size. There is no Discord query behind it.
#[function_component(MemberCount)]
pub fn member_count() -> Html {
    let count = use_state(|| None::<u32>);

    {
        let count = count.clone();
        use_effect_with((), move |_| {
            let initial = initial_count(js_sys::Math::random());
            count.set(Some(initial));

            let drift = Timeout::new(DRIFT_DELAY_MS, move || {
                count.set(Some(drifted_count(initial, js_sys::Math::random())));
            });
            move || drop(drift)
        });
    }

    let text = (*count)
        .map(|c| c.to_string())
        .unwrap_or_else(|| FALLBACK_TEXT.to_string());

    html! {
        <span id="member-count" class="stat-value">{text}</span>
    }
}
