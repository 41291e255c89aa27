//! Brand logo component.

use boardly_core::LOGO_ALT;
use leptos::prelude::*;

/// The Boardly mark: three kanban columns of decreasing height.
#[component]

pub fn Logo(
    /// Extra CSS classes.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let class = class.map_or_else(
        || "topbar-logo".to_string(),
        |extra| format!("topbar-logo {extra}"),
    );

    view! {
        <svg
            class=class
            role="img"
            aria-label=LOGO_ALT
            viewBox="0 0 32 32"
            width="32"
            height="32"
        >
            <rect x="1" y="1" width="30" height="30" rx="6" fill="var(--brand-primary)" />
            <rect x="6" y="6" width="5" height="20" rx="1.5" fill="currentColor" />
            <rect x="13.5" y="6" width="5" height="14" rx="1.5" fill="currentColor" />
            <rect x="21" y="6" width="5" height="9" rx="1.5" fill="currentColor" />
        </svg>
    }
}
