//! Topbar component.
//!
//! Fixed, full-width header with the brand on the left and a reserved profile
//! region on the right.

use boardly_core::{SessionSource, Theme, TopbarConfig, TopbarModel};
use leptos::logging::log;
use leptos::prelude::*;

use crate::app::{RouteContext, SessionContext};
use crate::browser::current_route;
use crate::components::{Logo, ProfileMenu};

/// Where the login state comes from for this render.
///
/// Reading the signals here makes the enclosing memo track them.
fn session_source(
    session: Option<SessionContext>,
    routes: Option<RouteContext>,
) -> SessionSource {
    match (session, routes) {
        (Some(ctx), _) => SessionSource::Explicit(ctx.session.get()),
        (None, Some(routes)) => SessionSource::PathHeuristic(routes.route.get()),
        (None, None) => SessionSource::PathHeuristic(current_route()),
    }
}

/// The topbar model, recomputed when the session or route changes.
///
/// Without a [`RouteContext`] the location is read once, so a topbar mounted
/// outside [`crate::App`] must be remounted on navigation.
pub fn use_topbar_model() -> Memo<TopbarModel> {
    let theme = use_context::<Theme>().unwrap_or_default();
    let config = use_context::<TopbarConfig>().unwrap_or_default();
    let session = use_context::<SessionContext>();
    let routes = use_context::<RouteContext>();

    Memo::new(move |_| {
        let login_state = session_source(session, routes).resolve();
        log!("Topbar render: {}", login_state);
        TopbarModel::build(&config, &theme, login_state)
    })
}

/// Application topbar.
///
/// Reads the [`Theme`] and [`TopbarConfig`] from context, falling back to the
/// defaults. Login state comes from a [`SessionContext`] when one is provided,
/// otherwise from the [`RouteContext`] or the current location.
#[component]

pub fn Topbar() -> impl IntoView {
    let model = use_topbar_model();

    let brand_text = move || model.with(|m| m.brand.text.clone());
    let show_menu = move || model.with(|m| !m.profile_slot.is_empty());

    view! {
        <header
            class="topbar"
            style=move || model.with(TopbarModel::container_style)
        >
            <div class="topbar-brand">
                <Logo class="topbar-logo-fit" />
                <span
                    class="topbar-brand-text"
                    style=move || model.with(TopbarModel::brand_text_style)
                >
                    {brand_text}
                </span>
            </div>
            <div class="topbar-spacer"></div>
            <div class="topbar-profile">
                <Show when=show_menu>
                    <ProfileMenu />
                </Show>
            </div>
        </header>
    }
}
