// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the wallet UI, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (neutral grays plus the coffee/amber brand scale)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use coffee_wallet::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
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
    pub const GRAY_900: Color = Color::from_rgb8(0x18, 0x18, 0x1b);
    pub const GRAY_800: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
    pub const GRAY_700: Color = Color::from_rgb8(0x27, 0x27, 0x2a);
    pub const GRAY_400: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (coffee scale)
    pub const COFFEE_500: Color = Color::from_rgb8(0x63, 0x48, 0x32); // Wallet sheet
    pub const COFFEE_700: Color = Color::from_rgb8(0x4a, 0x37, 0x28); // Loyalty card
    pub const CREMA_300: Color = Color::from_rgb8(0xff, 0xb8, 0x5c); // Wallet backdrop tint

    // Accent (amber) used for stamps and the drag handle
    pub const AMBER_300: Color = Color::from_rgb8(0xfc, 0xd3, 0x4d);

    // Map surface
    pub const MAP_LAND: Color = Color::from_rgb8(0xe8, 0xe4, 0xd8);
    pub const MAP_ROAD: Color = Color::from_rgb8(0xfa, 0xf8, 0xf2);
    pub const MAP_WATER: Color = Color::from_rgb8(0xaa, 0xd3, 0xdf);
    pub const MAP_PARK: Color = Color::from_rgb8(0xc8, 0xe0, 0xb4);

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
    /// Sheet backdrop dimming at full backdrop opacity.
    pub const SCRIM: f32 = 0.4;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Modal sheet backdrop.
    pub const MODAL_SCRIM: f32 = 0.6;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
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
    pub const ICON_XL: f32 = 48.0;

    /// Round icon buttons in the top bar.
    pub const ICON_BUTTON: f32 = 48.0;

    // Floating menu
    pub const FAB_MAIN: f32 = 80.0;
    pub const FAB_SATELLITE: f32 = 56.0;
    /// Distance of the menu centre from the bottom edge.
    pub const FAB_BOTTOM_OFFSET: f32 = 140.0;

    // Wallet sheet
    pub const HANDLE_WIDTH: f32 = 96.0;
    pub const HANDLE_HEIGHT: f32 = 4.0;
    pub const LOYALTY_CARD_WIDTH: f32 = 220.0;
    pub const LOYALTY_CARD_HEIGHT: f32 = 160.0;
    pub const STAMP: f32 = 24.0;
    pub const QR_CODE: f32 = 140.0;

    // Map pins
    pub const PIN_RADIUS: f32 = 10.0;
    /// Hit radius around a pin - WCAG 2.5.5 compliant (44x44 minimum)
    pub const PIN_HIT_RADIUS: f32 = 22.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Large title - Shop name in the detail sheet
    pub const TITLE_LG: f32 = 28.0;

    /// Medium title - Wallet hint, feature sheet titles
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Loyalty card shop name, section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Sheet header label
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Stamp outlines, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Toast accents, selected pins
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Upward shadow cast by bottom sheets.
    pub const SHEET: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: -2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
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
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);
    assert!(opacity::MODAL_SCRIM > opacity::SCRIM);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::FAB_MAIN > sizing::FAB_SATELLITE);
    assert!(sizing::PIN_HIT_RADIUS > sizing::PIN_RADIUS);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
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
    fn brand_colors_are_opaque() {
        for color in [palette::COFFEE_500, palette::COFFEE_700, palette::AMBER_300] {
            assert_eq!(color.a, 1.0);
        }
    }
}
