//! One-click dark/light toggle.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::color_scheme;

/// Sun/moon button that pins the opposite of the applied scheme as an
/// explicit preference, then re-resolves the page.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let on_toggle = move |_| {
        let next = theme.get().applied_scheme().opposite();
        color_scheme::set_preference(next);
        let dark = color_scheme::resolve_and_apply();
        theme.update(|t| {
            t.dark = dark;
            t.preference = Some(next);
        });
    };

    view! {
        <button class="btn toolbar__dark-toggle" on:click=on_toggle title="Toggle dark mode">
            {move || if theme.get().dark { "☀" } else { "☾" }}
        </button>
    }
}
