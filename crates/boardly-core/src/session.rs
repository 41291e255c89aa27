//! Explicit session state.
//!
//! A [`Session`] carries the authenticated identity when the application
//! knows it. The topbar prefers it over the location heuristic in
//! [`crate::route`]; see [`SessionSource`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::route::{LoginState, RoutePath};

/// The identity of a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Backend user id.
    pub id: String,
    /// Name shown in the profile menu.
    pub display_name: String,
    /// Contact email, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserIdentity {
    /// Create an identity without an email.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
        }
    }

    /// Set the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Avatar initials for this user.
    pub fn initials(&self) -> String {
        initials(&self.display_name)
    }
}

/// Current session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum Session {
    /// No user is logged in.
    #[default]
    Anonymous,
    /// A user is logged in.
    Authenticated(UserIdentity),
}

impl Session {
    /// The login state implied by this session.
    pub const fn login_state(&self) -> LoginState {
        match self {
            Self::Anonymous => LoginState::LoggedOut,
            Self::Authenticated(_) => LoginState::LoggedIn,
        }
    }

    /// The logged-in user, if any.
    pub const fn user(&self) -> Option<&UserIdentity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }
}

/// Where the topbar gets its login state from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSource {
    /// An explicit session provided by the application.
    Explicit(Session),
    /// Fallback: infer login state from the current route.
    PathHeuristic(RoutePath),
}

impl SessionSource {
    /// Resolve the login state.
    pub fn resolve(&self) -> LoginState {
        match self {
            Self::Explicit(session) => {
                let state = session.login_state();
                debug!(?state, "Login state from explicit session");
                state
            }
            Self::PathHeuristic(route) => LoginState::from_route(route),
        }
    }

    /// The logged-in user, when the source knows one.
    pub const fn user(&self) -> Option<&UserIdentity> {
        match self {
            Self::Explicit(session) => session.user(),
            Self::PathHeuristic(_) => None,
        }
    }
}

/// Up to two uppercase initials from a display name.
///
/// Returns `"?"` when the name has no alphanumeric words.
pub fn initials(display_name: &str) -> String {
    let letters: String = display_name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}
