//! Root application component with routing, theme context, and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toolbar::Toolbar;
use crate::pages::home::HomePage;
use crate::state::theme::ThemeState;
use crate::util::color_scheme;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The boot script goes in ahead of the stylesheets and hydration scripts so
/// the first paint already carries the right root class; hydration then only
/// confirms what the script decided.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=color_scheme::BOOT_SCRIPT></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared theme context and performs the load-time resolution
/// that seeds it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    // Effects only run in the browser, so the server render stays neutral
    // and the boot script owns the class until hydration lands here.
    Effect::new(move || {
        let dark = color_scheme::resolve_and_apply();
        let preference = color_scheme::stored_preference();
        theme.update(|t| {
            t.dark = dark;
            t.preference = preference;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/nightlight.css"/>
        <Title text="Nightlight"/>

        <Router>
            <Toolbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
