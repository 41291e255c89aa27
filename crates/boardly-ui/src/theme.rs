//! Theme styling for the Boardly topbar.
//!
//! Color tokens come from [`boardly_core::Theme`]; this module turns them into
//! CSS custom properties alongside the fixed layout values.

use boardly_core::{Theme, TopbarConfig};

/// Spacing values.
pub mod spacing {
    /// Inner padding of topbar regions.
    pub const REGION_PADDING: &str = "0.5rem";
    /// Gap between the logo and the brand text.
    pub const BRAND_GAP: &str = "0.5rem";
}

/// Typography configuration.
pub mod typography {
    /// Brand text size.
    pub const BRAND_SIZE: &str = "1.25rem";
    /// Fallback stack for the brand font.
    pub const BRAND_FALLBACK: &str = "ui-monospace, SFMono-Regular, Menlo, monospace";
}

/// Elevation of the bar.
pub mod elevation {
    /// Stacking order above page content.
    pub const Z_INDEX: u32 = 50;
    /// Drop shadow under the bar.
    pub const SHADOW: &str = "0 20px 13px rgba(0, 0, 0, 0.03), 0 8px 5px rgba(0, 0, 0, 0.08)";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables(theme: &Theme, topbar: &TopbarConfig) -> String {
    let brand = &theme.colors.brand;
    format!(
        r":root {{
  /* Brand colors */
  --topbar-bg: {topbar_bg};
  --topbar-text: {topbar_text};
  --brand-primary: {brand_primary};

  /* Layout */
  --topbar-height: {topbar_height};
  --topbar-padding: {region_padding};
  --topbar-brand-gap: {brand_gap};
  --topbar-z-index: {z_index};
  --topbar-shadow: {shadow};

  /* Typography */
  --font-family-brand: '{brand_font}', {brand_fallback};
  --font-size-brand: {brand_size};
}}",
        topbar_bg = brand.topbar,
        topbar_text = brand.topbar_text,
        brand_primary = brand.primary,
        topbar_height = topbar.height,
        region_padding = spacing::REGION_PADDING,
        brand_gap = spacing::BRAND_GAP,
        z_index = elevation::Z_INDEX,
        shadow = elevation::SHADOW,
        brand_font = topbar.brand_font_family,
        brand_fallback = typography::BRAND_FALLBACK,
        brand_size = typography::BRAND_SIZE,
    )
}
