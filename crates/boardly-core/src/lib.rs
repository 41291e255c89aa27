//! `Boardly` Core Library
//!
//! This crate provides the host-testable logic behind the Boardly topbar:
//! - Route classification for the login display flag
//! - Explicit session state that supersedes the route heuristic
//! - Theme tokens and topbar configuration
//! - A pure layout model of the topbar render tree
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`], backed by the typed [`Error`]
//! enum in the [`error`] module.
//!
//! ```rust
//! use boardly_core::{LoginState, Theme, TopbarConfig, TopbarModel};
//!
//! let model = TopbarModel::build(
//!     &TopbarConfig::default(),
//!     &Theme::default(),
//!     LoginState::from_path("/dashboard"),
//! );
//! assert!(model.login_state.is_logged_in());
//! assert!(model.profile_slot.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod route;
pub mod session;
pub mod theme;
pub mod topbar;

pub use config::{
    AppConfig, DEFAULT_BRAND_FONT_FAMILY, DEFAULT_BRAND_TEXT, DEFAULT_TOPBAR_HEIGHT, TopbarConfig,
};
pub use error::{Error, Result};
pub use route::{LoginState, ROOT_PATH, RoutePath, SIGNUP_PATH};
pub use session::{Session, SessionSource, UserIdentity, initials};
pub use theme::{BrandColors, Theme, ThemeColors};
pub use topbar::{BrandGroup, LOGO_ALT, LogoSpec, ProfileSlot, TopbarModel};
