//! Route classification for the topbar display flag.
//!
//! The topbar shows a profile affordance only to logged-in users. Without an
//! explicit session, login state is inferred from the current location: the
//! landing page and the signup page are public, every other page is assumed
//! to sit behind a login.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// The application root (landing page).
pub const ROOT_PATH: &str = "/";

/// The signup page.
pub const SIGNUP_PATH: &str = "/signup";

/// A normalized location pathname.
///
/// Query strings and fragments are dropped; the empty path becomes `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(String);

impl RoutePath {
    /// Parse a pathname as reported by the browser location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoute`] if the path is not absolute.
    pub fn parse(raw: &str) -> Result<Self> {
        let path = raw
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if path.is_empty() {
            return Ok(Self::root());
        }

        if !path.starts_with('/') {
            return Err(Error::InvalidRoute(format!(
                "path must start with '/': {raw}"
            )));
        }

        Ok(Self(path.to_string()))
    }

    /// The root path.
    pub fn root() -> Self {
        Self(ROOT_PATH.to_string())
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the pages reachable without logging in.
    pub fn is_public(&self) -> bool {
        self.0 == ROOT_PATH || self.0 == SIGNUP_PATH
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.0
    }
}

/// Whether the current visitor is treated as logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginState {
    /// Anonymous visitor.
    #[default]
    LoggedOut,
    /// Authenticated user, or a page that requires one.
    LoggedIn,
}

impl LoginState {
    /// Derive the login state from a raw location pathname.
    ///
    /// Only the exact root and signup paths count as logged out; the empty
    /// path is the root. Any other value, parsable or not, counts as logged in.
    pub fn from_path(raw: &str) -> Self {
        let state = if raw.is_empty() || raw == ROOT_PATH || raw == SIGNUP_PATH {
            Self::LoggedOut
        } else {
            Self::LoggedIn
        };
        debug!(path = raw, ?state, "Derived login state from pathname");
        state
    }

    /// Derive the login state from a parsed route.
    pub fn from_route(route: &RoutePath) -> Self {
        let state = if route.is_public() {
            Self::LoggedOut
        } else {
            Self::LoggedIn
        };
        debug!(path = %route, ?state, "Derived login state from route");
        state
    }

    /// The boolean display flag.
    pub const fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

impl From<bool> for LoginState {
    fn from(logged_in: bool) -> Self {
        if logged_in {
            Self::LoggedIn
        } else {
            Self::LoggedOut
        }
    }
}

impl fmt::Display for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => write!(f, "logged out"),
            Self::LoggedIn => write!(f, "logged in"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_logged_out() {
        assert_eq!(LoginState::from_path("/"), LoginState::LoggedOut);
        assert!(!LoginState::from_path("/").is_logged_in());
    }

    #[test]
    fn test_signup_is_logged_out() {
        assert_eq!(LoginState::from_path("/signup"), LoginState::LoggedOut);
    }

    #[test]
    fn test_dashboard_is_logged_in() {
        assert!(LoginState::from_path("/dashboard").is_logged_in());
    }

    #[test]
    fn test_other_paths_are_logged_in() {
        for path in ["/board/42", "/login", "/signup/", "/signups", "/SIGNUP", "//"] {
            assert!(
                LoginState::from_path(path).is_logged_in(),
                "{path} should be treated as logged in"
            );
        }
    }

    #[test]
    fn test_empty_path_is_root() {
        let route = RoutePath::parse("").expect("empty path should parse");
        assert_eq!(route, RoutePath::root());
        assert_eq!(LoginState::from_path(""), LoginState::LoggedOut);
    }

    #[test]
    fn test_query_and_fragment_are_dropped() {
        let route = RoutePath::parse("/signup?ref=home#form").expect("should parse");
        assert_eq!(route.as_str(), SIGNUP_PATH);
        assert_eq!(LoginState::from_route(&route), LoginState::LoggedOut);

        let route = RoutePath::parse("?next=/board").expect("should parse");
        assert_eq!(route, RoutePath::root());
    }

    #[test]
    fn test_relative_path_rejected_by_parser() {
        let err = RoutePath::parse("dashboard").expect_err("relative path should fail");
        assert!(matches!(err, Error::InvalidRoute(_)));
    }

    #[test]
    fn test_unparsable_paths_are_logged_in() {
        for path in ["dashboard", "board/1", "?next=/board", "#section", "/signup?ref=home"] {
            assert_eq!(
                LoginState::from_path(path),
                LoginState::LoggedIn,
                "{path} is neither the root nor the signup path"
            );
        }
    }

    #[test]
    fn test_from_path_agrees_with_from_route() {
        for path in ["/", "/signup", "/dashboard", "/signup/", "//"] {
            let route = RoutePath::parse(path).expect("absolute path should parse");
            assert_eq!(LoginState::from_path(path), LoginState::from_route(&route));
        }
    }

    #[test]
    fn test_route_serde() {
        let route: RoutePath = serde_json::from_str("\"/dashboard\"").expect("should deserialize");
        assert_eq!(route.as_str(), "/dashboard");
        assert!(serde_json::from_str::<RoutePath>("\"dashboard\"").is_err());
    }

    #[test]
    fn test_login_state_from_bool() {
        assert_eq!(LoginState::from(true), LoginState::LoggedIn);
        assert_eq!(LoginState::from(false), LoginState::LoggedOut);
        assert_eq!(LoginState::default(), LoginState::LoggedOut);
    }
}
