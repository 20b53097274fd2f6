use dioxus::prelude::*;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and renders the single page. There is no routing,
/// no shared state, and no context: the page is rendered once and the only
/// runtime behavior is its entrance animation and hover feedback.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}
