//! Access to the browser location.

use boardly_core::RoutePath;
use leptos::logging::warn;

/// The current `window.location.pathname`, if a window is available.
#[cfg(target_arch = "wasm32")]
pub fn current_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Host builds have no browser window.
#[cfg(not(target_arch = "wasm32"))]
pub const fn current_pathname() -> Option<String> {
    None
}

/// The current route, falling back to the root page.
pub fn current_route() -> RoutePath {
    route_from_pathname(current_pathname())
}

/// Parse a pathname read from the location.
///
/// A missing or malformed pathname resolves to the root page, which keeps the
/// visitor logged out.
pub fn route_from_pathname(pathname: Option<String>) -> RoutePath {
    let Some(pathname) = pathname else {
        warn!("No browser location available, assuming root path");
        return RoutePath::root();
    };

    RoutePath::parse(&pathname).unwrap_or_else(|e| {
        warn!("Ignoring location pathname '{}': {}", pathname, e);
        RoutePath::root()
    })
}
