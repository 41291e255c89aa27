//! Integration tests for the topbar display flag and layout model.
//!
//! These tests drive the public API the UI crate uses: resolve a session
//! source, build the model, and check what would be rendered.

use boardly_core::{
    AppConfig, LOGO_ALT, LoginState, ProfileSlot, RoutePath, Session, SessionSource, Theme,
    TopbarConfig, TopbarModel, UserIdentity,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn model_for(source: &SessionSource, config: &TopbarConfig) -> TopbarModel {
    TopbarModel::build(config, &Theme::default(), source.resolve())
}

fn heuristic(path: &str) -> SessionSource {
    SessionSource::PathHeuristic(RoutePath::parse(path).expect("test path should parse"))
}

/// The three documented scenarios: landing, signup, dashboard.
#[test]
fn test_documented_path_scenarios() {
    init_tracing();

    assert!(!heuristic("/").resolve().is_logged_in());
    assert!(!heuristic("/signup").resolve().is_logged_in());
    assert!(heuristic("/dashboard").resolve().is_logged_in());
}

/// The reserved region stays empty for both flag values with the stock config.
#[test]
fn test_reserved_region_empty_regardless_of_flag() {
    init_tracing();
    let config = TopbarConfig::default();

    let logged_out = model_for(&heuristic("/"), &config);
    let logged_in = model_for(&heuristic("/dashboard"), &config);

    assert_ne!(logged_out.login_state, logged_in.login_state);
    assert_eq!(logged_out.profile_slot, ProfileSlot::Empty);
    assert_eq!(logged_in.profile_slot, ProfileSlot::Empty);

    // Apart from the recorded flag, the two renders are identical.
    let normalized = TopbarModel {
        login_state: LoginState::LoggedOut,
        ..logged_in
    };
    assert_eq!(normalized, logged_out);
}

/// Every model carries the logo and the configured brand text.
#[test]
fn test_brand_group_for_every_path() {
    init_tracing();
    let enabled = TopbarConfig {
        profile_menu_enabled: true,
        ..TopbarConfig::default()
    };

    for config in [TopbarConfig::default(), enabled] {
        for path in ["/", "/signup", "/dashboard", "/board/1/list/2"] {
            let model = model_for(&heuristic(path), &config);
            assert_eq!(model.brand.logo.alt, LOGO_ALT);
            assert_eq!(model.brand.text, "Boardly");
        }
    }
}

/// Non-empty pathnames the parser rejects still count as logged in.
#[test]
fn test_raw_pathnames_outside_public_pages() {
    for path in ["dashboard", "board/1", "?next=/board", "#section"] {
        assert!(LoginState::from_path(path).is_logged_in(), "{path}");
    }
    assert!(!LoginState::from_path("").is_logged_in());
}

/// An explicit session decides the flag, not the URL.
#[test]
fn test_explicit_session_drives_profile_menu() {
    init_tracing();
    let config = AppConfig::from_json(r#"{"topbar":{"profile_menu_enabled":true}}"#)
        .expect("config should parse")
        .topbar;

    let ada = Session::Authenticated(UserIdentity::new("u1", "Ada Lovelace"));
    let model = model_for(&SessionSource::Explicit(ada), &config);
    assert_eq!(model.profile_slot, ProfileSlot::Menu);

    let model = model_for(&SessionSource::Explicit(Session::Anonymous), &config);
    assert_eq!(model.profile_slot, ProfileSlot::Empty);
}

/// Theme tokens from configuration flow into the rendered background.
#[test]
fn test_theme_background_from_config() {
    let config = AppConfig::from_json(
        r##"{"theme":{"colors":{"brand":{"topbar":"#101820"}}}}"##,
    )
    .expect("config should parse");

    let model = TopbarModel::build(&config.topbar, &config.theme, LoginState::LoggedIn);
    assert_eq!(model.background, "#101820");
}
