//! Landing page showing the resolved scheme and some themed surfaces.

use leptos::prelude::*;

use crate::state::theme::ThemeState;

/// Single page of the shell. Everything here renders from [`ThemeState`],
/// so the toolbar controls are immediately visible in the copy below.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let applied = move || theme.get().applied_scheme().to_string();
    let preference = move || theme.get().preference_label();

    view! {
        <main class="home">
            <section class="card">
                <h1>"Color scheme"</h1>
                <p>
                    "This page renders the " <strong class="card__scheme">{applied}</strong>
                    " variant. Preference: " <strong>{preference}</strong> "."
                </p>
                <p class="card__hint">
                    "Pick Light or Dark to pin a choice in this browser, or System to follow the OS setting. The choice survives reloads."
                </p>
            </section>

            <section class="card">
                <h2>"Sample surface"</h2>
                <p>
                    "Body text, borders, and " <a href="#">"links"</a>
                    " all key off the root class, so the whole page follows the marker together."
                </p>
            </section>
        </main>
    }
}
