//! `Boardly` UI - Leptos-based topbar.
//!
//! This crate renders the Boardly page topbar on top of the layout model in
//! `boardly-core`.

pub mod app;
pub mod browser;
pub mod components;
pub mod theme;

pub use app::{App, RouteContext, SessionContext, SessionProvider};
pub use components::Topbar;
