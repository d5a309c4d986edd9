//! Top bar with the product title and both scheme controls.

use leptos::prelude::*;

use crate::components::scheme_menu::SchemeMenu;
use crate::components::theme_toggle::ThemeToggle;

/// Header bar for every page. The menu pins an explicit scheme or hands
/// control back to the OS; the toggle is the one-click shortcut.
#[component]
pub fn Toolbar() -> impl IntoView {
    view! {
        <div class="toolbar">
            <span class="toolbar__title">"Nightlight"</span>
            <span class="toolbar__spacer"></span>
            <SchemeMenu/>
            <ThemeToggle/>
        </div>
    }
}
