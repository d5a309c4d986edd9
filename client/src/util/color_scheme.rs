//! Color-scheme resolution against live browser state.
//!
//! Wires the resolver from the `appearance` crate to the real providers:
//! `localStorage` for the stored preference, `matchMedia` for the OS signal,
//! and the `class` attribute on `<html>` for the applied result. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; without the `hydrate`
//! feature every entry point compiles to a deterministic stub (light, no
//! stored preference) so server rendering stays stable.

use appearance::ColorScheme;
#[cfg(feature = "hydrate")]
use appearance::{PreferenceStore, SchemeTarget, SystemPreference, ThemeResolver};

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

/// Storage key for the explicit preference. One key serves both the read
/// and the write path.
pub const STORAGE_KEY: &str = "color-theme";

/// Class token on `<html>` that stylesheets key the dark variant on.
pub const DARK_CLASS: &str = "dark";

/// Media query carrying the OS-level appearance signal.
pub const SYSTEM_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Inline bootstrap for the document `<head>`, run before stylesheets and
/// hydration so the first paint already carries the right root class. Must
/// stay in agreement with [`resolve_and_apply`] and the constants above;
/// a test checks the literals.
pub const BOOT_SCRIPT: &str = r"
if (localStorage.getItem('color-theme') === 'dark' || (
    !('color-theme' in localStorage) &&
    window.matchMedia('(prefers-color-scheme: dark)').matches)
) {
    document.documentElement.classList.add('dark');
} else {
    document.documentElement.classList.remove('dark');
}
";

/// Explicit preference storage in origin-scoped `localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }

    fn store(&self, scheme: ColorScheme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, scheme.as_str());
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// OS appearance signal read through `window.matchMedia`, queried fresh on
/// every resolution rather than cached.
#[cfg(feature = "hydrate")]
pub struct MediaQuerySystem;

#[cfg(feature = "hydrate")]
impl SystemPreference for MediaQuerySystem {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(SYSTEM_DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
}

/// Applies the marker class on `document.documentElement`.
#[cfg(feature = "hydrate")]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
impl SchemeTarget for DocumentRoot {
    fn apply_dark(&self, dark: bool) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(el) = root {
            let classes = el.class_list();
            if dark {
                let _ = classes.add_1(DARK_CLASS);
            } else {
                let _ = classes.remove_1(DARK_CLASS);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn resolver() -> ThemeResolver<LocalStorageStore, MediaQuerySystem, DocumentRoot> {
    ThemeResolver::new(LocalStorageStore, MediaQuerySystem, DocumentRoot)
}

/// Evaluate the preference (stored choice first, OS signal as fallback) and
/// set or remove the root class accordingly. Returns whether the dark
/// variant is now applied.
pub fn resolve_and_apply() -> bool {
    #[cfg(feature = "hydrate")]
    {
        resolver().resolve_and_apply()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Persist an explicit scheme choice. Does not touch the page; callers
/// follow up with [`resolve_and_apply`].
pub fn set_preference(scheme: ColorScheme) {
    #[cfg(feature = "hydrate")]
    {
        resolver().set_preference(scheme);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scheme;
    }
}

/// Drop the explicit choice so resolution falls back to the OS signal.
pub fn clear_preference() {
    #[cfg(feature = "hydrate")]
    {
        resolver().clear_preference();
    }
}

/// The stored preference parsed for display, `None` when nothing valid is
/// stored or outside a browser.
pub fn stored_preference() -> Option<ColorScheme> {
    #[cfg(feature = "hydrate")]
    {
        resolver().stored_preference()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
