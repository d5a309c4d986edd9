//! Three-way scheme selector: explicit light, explicit dark, or follow the OS.

use leptos::prelude::*;

use appearance::ColorScheme;

use crate::state::theme::ThemeState;
use crate::util::color_scheme;

#[cfg(test)]
#[path = "scheme_menu_test.rs"]
mod scheme_menu_test;

/// Class string for one menu choice, marking the active one.
fn choice_class(active: bool) -> &'static str {
    if active {
        "scheme-menu__choice scheme-menu__choice--active"
    } else {
        "scheme-menu__choice"
    }
}

/// Commit a menu choice. `Some` pins an explicit preference, `None` clears
/// it so the OS signal decides again. Either way the page re-resolves at
/// once and the shared state follows.
fn select(theme: RwSignal<ThemeState>, choice: Option<ColorScheme>) {
    match choice {
        Some(scheme) => color_scheme::set_preference(scheme),
        None => color_scheme::clear_preference(),
    }
    let dark = color_scheme::resolve_and_apply();
    theme.update(|t| {
        t.dark = dark;
        t.preference = choice;
    });
}

/// Light | Dark | System button group with the active choice highlighted.
#[component]
pub fn SchemeMenu() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <div class="scheme-menu" title="Color scheme">
            <button
                class=move || choice_class(theme.get().preference == Some(ColorScheme::Light))
                on:click=move |_| select(theme, Some(ColorScheme::Light))
            >
                "Light"
            </button>
            <button
                class=move || choice_class(theme.get().preference == Some(ColorScheme::Dark))
                on:click=move |_| select(theme, Some(ColorScheme::Dark))
            >
                "Dark"
            </button>
            <button
                class=move || choice_class(theme.get().preference.is_none())
                on:click=move |_| select(theme, None)
            >
                "System"
            </button>
        </div>
    }
}
