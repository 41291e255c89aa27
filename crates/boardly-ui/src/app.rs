//! Main application component.

use boardly_core::{AppConfig, RoutePath, Session};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::browser::current_route;
use crate::components::Topbar;
use crate::theme::generate_css_variables;

/// Configuration bundled with the front end.
const BUNDLED_CONFIG: &str = include_str!("../config/boardly.json");

/// Provides the explicit session to the topbar.
///
/// When absent, the topbar falls back to inferring login state from the
/// current location.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// The current session.
    pub session: Signal<Session>,
}

/// The current route, tracked across client-side navigation.
#[derive(Clone, Copy)]
pub struct RouteContext {
    /// Current location path.
    pub route: RwSignal<RoutePath>,
}

impl RouteContext {
    /// Start tracking at the given route.
    pub fn new(route: RoutePath) -> Self {
        Self {
            route: RwSignal::new(route),
        }
    }

    /// Record a navigation. Routers call this after `history.pushState`,
    /// which does not fire `popstate`.
    pub fn navigate(&self, route: RoutePath) {
        self.route.set(route);
    }
}

/// Parse the bundled configuration, falling back to defaults.
pub fn load_config(json: &str) -> AppConfig {
    AppConfig::from_json(json).unwrap_or_else(|e| {
        warn!("Invalid bundled config, using defaults: {}", e);
        AppConfig::default()
    })
}

/// Keep the route context in sync with back/forward navigation.
#[cfg(target_arch = "wasm32")]
fn track_history(routes: RouteContext) {
    let _popstate = window_event_listener(leptos::ev::popstate, move |_| {
        routes.navigate(current_route());
    });
}

#[cfg(not(target_arch = "wasm32"))]
const fn track_history(_routes: RouteContext) {}

/// Main application component.
#[component]

pub fn App(
    /// Explicit session, when the host application knows it.
    #[prop(optional, into)]
    session: Option<Signal<Session>>,
) -> impl IntoView {
    let config = load_config(BUNDLED_CONFIG);
    let css_vars = generate_css_variables(&config.theme, &config.topbar);

    let routes = RouteContext::new(current_route());
    track_history(routes);

    provide_context(config.theme);
    provide_context(config.topbar);
    provide_context(routes);
    if let Some(session) = session {
        provide_context(SessionContext { session });
    }

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Topbar />
    }
}

/// Makes an explicit session available to the topbar and profile menu.
#[component]

pub fn SessionProvider(
    /// The current session.
    #[prop(into)]
    session: Signal<Session>,
    /// Content that should see the session.
    children: Children,
) -> impl IntoView {
    provide_context(SessionContext { session });

    children()
}
