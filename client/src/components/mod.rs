//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared theme state from the Leptos context;
//! none of them touch browser APIs directly, which keeps them renderable on
//! the server.

pub mod scheme_menu;
pub mod theme_toggle;
pub mod toolbar;
