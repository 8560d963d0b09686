use crate::dom;
use crate::storage::LocalPreferences;
use log::warn;
use shared::{Theme, ThemeController};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(|| {
        let initial = ThemeController::new(LocalPreferences).initial();
        log::info!("Initial theme: {}", initial);
        initial
    });

    {
        use_effect_with(*theme, |theme| {
            dom::apply_theme(*theme);
            || ()
        });
    }

    // Follow the OS colour scheme until the user picks a theme.
    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let listener = dom::watch_color_scheme(move |prefers_dark| {
                if let Some(next) = ThemeController::new(LocalPreferences).system_changed(prefers_dark) {
                    theme.set(next);
                }
            });
            move || drop(listener)
        });
    }

    let onchange = {
        let theme = theme.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let checked = input.checked();
            match ThemeController::new(LocalPreferences).toggle(checked) {
                Ok(next) => theme.set(next),
                Err(err) => {
                    warn!("Theme choice not saved: {}", err);
                    theme.set(Theme::from_checked(checked));
                }
            }
        })
    };

    html! {
        <label class="theme-toggle" title="Toggle dark mode">
            <input
                type="checkbox"
                id="theme-toggle-input"
                checked={theme.is_checked()}
                {onchange}
            />
            <span class="theme-toggle-slider"></span>
        </label>
    }
}
