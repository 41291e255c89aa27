//! Layout model of the topbar.
//!
//! [`TopbarModel`] describes what the topbar renders without touching the DOM:
//! a brand group on the left, a flexible spacer, and a reserved profile slot on
//! the right. The UI crate renders it; tests inspect it directly.

use serde::Serialize;
use tracing::debug;

use crate::config::TopbarConfig;
use crate::route::LoginState;
use crate::theme::Theme;

/// Accessible label of the brand logo.
pub const LOGO_ALT: &str = "Boardly logo";

/// The brand logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoSpec {
    /// Accessible label.
    pub alt: String,
}

/// Logo plus brand text, aligned to the left edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandGroup {
    /// The logo.
    pub logo: LogoSpec,
    /// Brand text shown after the logo.
    pub text: String,
    /// Font of the brand text.
    pub font_family: String,
    /// Brand text color.
    pub color: String,
}

/// Content of the right-hand reserved region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSlot {
    /// Reserved but empty.
    Empty,
    /// The profile menu.
    Menu,
}

impl ProfileSlot {
    /// Whether nothing is rendered in the slot.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A pure description of the topbar render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopbarModel {
    /// Background color token.
    pub background: String,
    /// CSS height of the bar.
    pub height: String,
    /// Left-aligned brand group.
    pub brand: BrandGroup,
    /// Right-hand reserved region.
    pub profile_slot: ProfileSlot,
    /// Login state the model was built with.
    pub login_state: LoginState,
}

impl TopbarModel {
    /// Build the model for one render pass.
    pub fn build(config: &TopbarConfig, theme: &Theme, login_state: LoginState) -> Self {
        let profile_slot = if config.profile_menu_enabled && login_state.is_logged_in() {
            ProfileSlot::Menu
        } else {
            ProfileSlot::Empty
        };

        debug!(
            %login_state,
            ?profile_slot,
            menu_enabled = config.profile_menu_enabled,
            "Built topbar model"
        );

        Self {
            background: theme.topbar_background().to_string(),
            height: config.height.clone(),
            brand: BrandGroup {
                logo: LogoSpec {
                    alt: LOGO_ALT.to_string(),
                },
                text: config.brand_text.clone(),
                font_family: config.brand_font_family.clone(),
                color: theme.colors.brand.topbar_text.clone(),
            },
            profile_slot,
            login_state,
        }
    }

    /// Inline style of the bar container.
    pub fn container_style(&self) -> String {
        format!(
            "background-color: {}; height: {};",
            self.background, self.height
        )
    }

    /// Inline style of the brand text.
    pub fn brand_text_style(&self) -> String {
        format!(
            "color: {}; font-family: '{}', monospace;",
            self.brand.color, self.brand.font_family
        )
    }
}
