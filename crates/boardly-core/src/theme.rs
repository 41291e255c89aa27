//! Theme tokens consumed by the topbar.
//!
//! The theme is owned by the surrounding application. This module only models
//! the tokens the topbar reads and provides the Boardly defaults.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Brand color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandColors {
    /// Topbar background.
    pub topbar: String,
    /// Text drawn on top of the topbar.
    pub topbar_text: String,
    /// Primary brand accent.
    pub primary: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            topbar: "#1f2937".to_string(),
            topbar_text: "#ffffff".to_string(),
            primary: "#6366f1".to_string(),
        }
    }
}

/// Color token groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    /// Brand colors.
    pub brand: BrandColors,
}

/// Application theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color tokens.
    pub colors: ThemeColors,
}

impl Theme {
    /// Parse a theme token file. Missing tokens keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a token is empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Self = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Check that every token the topbar reads is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTheme`] naming the first empty token.
    pub fn validate(&self) -> Result<()> {
        let brand = &self.colors.brand;
        for (name, value) in [
            ("colors.brand.topbar", &brand.topbar),
            ("colors.brand.topbar_text", &brand.topbar_text),
            ("colors.brand.primary", &brand.primary),
        ] {
            if value.trim().is_empty() {
                warn!(token = name, "Rejecting theme with empty token");
                return Err(Error::InvalidTheme(format!("{name} is empty")));
            }
        }
        Ok(())
    }

    /// The topbar background token.
    pub fn topbar_background(&self) -> &str {
        &self.colors.brand.topbar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_valid() {
        let theme = Theme::default();
        assert!(theme.validate().is_ok());
        assert!(theme.topbar_background().starts_with('#'));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let theme = Theme::from_json(r##"{"colors":{"brand":{"topbar":"#0f172a"}}}"##)
            .expect("partial theme should parse");
        assert_eq!(theme.topbar_background(), "#0f172a");
        assert_eq!(
            theme.colors.brand.topbar_text,
            BrandColors::default().topbar_text
        );
    }

    #[test]
    fn test_empty_json_is_default() {
        let theme = Theme::from_json("{}").expect("empty theme should parse");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = Theme::from_json(r#"{"colors":{"brand":{"topbar":"  "}}}"#)
            .expect_err("empty token should be rejected");
        assert!(matches!(err, Error::InvalidTheme(ref msg) if msg.contains("topbar")));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Theme::from_json("{colors").expect_err("malformed json should fail");
        assert!(matches!(err, Error::Serialization(_)));
    }
}
