//! Scroll helpers for growing message lists. Requires a browser environment.

use leptos::prelude::*;

/// Pin a scroll container to its bottom edge.
pub fn scroll_to_bottom(container: NodeRef<leptos::html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = container.get() {
            let scroll_height = el.scroll_height();
            el.set_scroll_top(scroll_height);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = container;
    }
}
