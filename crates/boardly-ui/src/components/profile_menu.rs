//! Profile menu component.
//!
//! An avatar button for the logged-in user. Menu entries are owned by the
//! pages that mount it; this component only handles the open state.

use boardly_core::{UserIdentity, initials};
use leptos::prelude::*;

use crate::app::SessionContext;

/// Avatar button with a toggleable profile panel.
#[component]

pub fn ProfileMenu() -> impl IntoView {
    let session = use_context::<SessionContext>();
    let (open, set_open) = signal(false);

    let user = move || session.and_then(|ctx| ctx.session.with(|s| s.user().cloned()));
    let avatar = move || user().map_or_else(|| initials(""), |u| u.initials());
    let name = move || user().map(|u: UserIdentity| u.display_name);

    let toggle = move |_| {
        set_open.update(|is_open| *is_open = !*is_open);
    };

    view! {
        <div class="profile-menu">
            <button
                class="profile-menu-avatar"
                aria-label="Open profile menu"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=toggle
            >
                {avatar}
            </button>
            <Show when=move || open.get()>
                <div class="profile-menu-panel" role="menu">
                    <span class="profile-menu-name">
                        {move || name().unwrap_or_else(|| "Signed in".to_string())}
                    </span>
                </div>
            </Show>
        </div>
    }
}
