//! Topbar and application configuration.
//!
//! Configuration is plain serde JSON with every field defaulted, so an empty
//! object yields the stock Boardly topbar.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::theme::Theme;

/// Default brand text.
pub const DEFAULT_BRAND_TEXT: &str = "Boardly";

/// Default brand font.
pub const DEFAULT_BRAND_FONT_FAMILY: &str = "Berkeley Mono";

/// Default topbar height.
pub const DEFAULT_TOPBAR_HEIGHT: &str = "4rem";

/// Topbar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopbarConfig {
    /// Text shown next to the logo.
    pub brand_text: String,
    /// Font family of the brand text.
    pub brand_font_family: String,
    /// CSS height of the bar.
    pub height: String,
    /// Render the profile menu for logged-in users.
    ///
    /// Off until the profile menu ships; the reserved region stays empty.
    pub profile_menu_enabled: bool,
}

impl Default for TopbarConfig {
    fn default() -> Self {
        Self {
            brand_text: DEFAULT_BRAND_TEXT.to_string(),
            brand_font_family: DEFAULT_BRAND_FONT_FAMILY.to_string(),
            height: DEFAULT_TOPBAR_HEIGHT.to_string(),
            profile_menu_enabled: false,
        }
    }
}

impl TopbarConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the brand text or height is empty.
    pub fn validate(&self) -> Result<()> {
        if self.brand_text.trim().is_empty() {
            warn!("Rejecting topbar config with empty brand text");
            return Err(Error::InvalidConfig("brand_text is empty".to_string()));
        }
        if self.height.trim().is_empty() {
            warn!("Rejecting topbar config with empty height");
            return Err(Error::InvalidConfig("height is empty".to_string()));
        }
        Ok(())
    }
}

/// Root configuration for the front end.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Theme tokens.
    pub theme: Theme,
    /// Topbar settings.
    pub topbar: TopbarConfig,
}

impl AppConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            profile_menu_enabled = config.topbar.profile_menu_enabled,
            "Loaded app config"
        );
        Ok(config)
    }

    /// Validate theme and topbar settings.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(&self) -> Result<()> {
        self.theme.validate()?;
        self.topbar.validate()
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
