// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (the studio's warm orange brand)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (the studio's warm orange scale)
    pub const BRAND_100: Color = Color::from_rgb(1.0, 0.93, 0.88);
    pub const BRAND_200: Color = Color::from_rgb(1.0, 0.83, 0.72);
    pub const BRAND_400: Color = Color::from_rgb(1.0, 0.56, 0.44); // #ff8f70
    pub const BRAND_500: Color = Color::from_rgb(1.0, 0.42, 0.21); // #ff6b35
    pub const BRAND_600: Color = Color::from_rgb(0.88, 0.35, 0.15);
    pub const BRAND_700: Color = Color::from_rgb(0.72, 0.28, 0.11);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Header
    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const HEADER_HEIGHT_CONDENSED: f32 = 52.0;

    // Scroll progress bar thickness
    pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;

    // Gallery
    pub const GALLERY_CARD_WIDTH: f32 = 300.0;
    pub const GALLERY_CARD_HEIGHT: f32 = 220.0;

    // Carousel cards
    pub const CAROUSEL_CARD_HEIGHT: f32 = 340.0;

    // Floating contact button
    pub const FLOATING_BUTTON: f32 = 56.0;
    pub const PULSE_BADGE: f32 = 20.0;

    // Toasts
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for a consistent text hierarchy.

    /// Hero headline
    pub const DISPLAY: f32 = 44.0;

    /// Large title - Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Card titles, brand mark
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Sub-headings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, counters, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::HEADER_HEIGHT > sizing::HEADER_HEIGHT_CONDENSED);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::BRAND_500.r >= 0.0 && palette::BRAND_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_scale_darkens_with_weight() {
        assert!(palette::BRAND_400.r + palette::BRAND_400.g
            > palette::BRAND_600.r + palette::BRAND_600.g);
    }
}
