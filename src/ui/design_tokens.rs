// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the envelope canvas and the reveal scene.

## Organization

- **Palette**: Base colors and the per-variant gradient stops
- **Opacity**: Standardized opacity levels
- **Sizing**: Envelope and card component sizes
- **Typography**: Font size scale
- **Radius**: Corner radii

## Examples

```
use envelope_reveal::ui::design_tokens::{palette, opacity};
use iced::Color;

let shade = Color {
    a: opacity::SHADE,
    ..palette::BLACK
};
assert!(shade.a < 1.0);
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
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    /// Page background behind the envelope.
    pub const PAPER: Color = Color::from_rgb(0.96, 0.95, 0.93);

    // Sunset gradient, top to bottom
    pub const SUNSET_AMBER: Color = Color::from_rgb(0.96, 0.72, 0.22);
    pub const SUNSET_ORANGE: Color = Color::from_rgb(0.96, 0.55, 0.28);
    pub const SUNSET_PINK: Color = Color::from_rgb(0.95, 0.30, 0.55);
    pub const SUNSET_MAGENTA: Color = Color::from_rgb(0.82, 0.30, 0.72);
    pub const SUNSET_PURPLE: Color = Color::from_rgb(0.58, 0.48, 0.90);

    // Meadow gradient, top to bottom
    pub const MEADOW_GREEN: Color = Color::from_rgb(0.40, 0.75, 0.55);
    pub const MEADOW_TEAL: Color = Color::from_rgb(0.45, 0.68, 0.66);
    pub const MEADOW_BLUE: Color = Color::from_rgb(0.55, 0.60, 0.75);

    // Inside face of the flap
    pub const INSIDE_GREEN: Color = Color::from_rgb(0.30, 0.82, 0.42);
    pub const INSIDE_SAGE: Color = Color::from_rgb(0.40, 0.75, 0.55);
    pub const INSIDE_SLATE: Color = Color::from_rgb(0.55, 0.60, 0.75);
    pub const INSIDE_INDIGO: Color = Color::from_rgb(0.50, 0.48, 0.88);
    pub const INSIDE_LAVENDER: Color = Color::from_rgb(0.78, 0.78, 0.92);

    // Card (silver)
    pub const CARD_LIGHT: Color = Color::from_rgb(0.96, 0.96, 0.97);
    pub const CARD_MID: Color = Color::from_rgb(0.91, 0.91, 0.93);
    pub const CARD_DARK: Color = Color::from_rgb(0.88, 0.88, 0.91);
    pub const CARD_INK: Color = Color::from_rgb(0.45, 0.45, 0.50);

    // Chip
    pub const CHIP_SHADOW: Color = Color::from_rgb(0.78, 0.74, 0.65);
    pub const CHIP_GOLD: Color = Color::from_rgb(0.85, 0.82, 0.72);
    pub const CHIP_LIGHT: Color = Color::from_rgb(0.90, 0.87, 0.78);
    pub const CHIP_BORDER: Color = Color::from_rgb(0.70, 0.66, 0.58);

    // Tear strip
    pub const STRIP_LIGHT: Color = Color::from_rgb(0.96, 0.95, 0.92);
    pub const STRIP_DARK: Color = Color::from_rgb(0.93, 0.92, 0.88);
    pub const PERFORATION: Color = Color::from_rgb(0.75, 0.73, 0.70);
    pub const HINT: Color = Color::from_rgb(0.55, 0.52, 0.48);

    // Pocket lip
    pub const LIP: Color = Color::from_rgb(0.85, 0.85, 0.88);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Inner shading of the pocket and flap inside.
    pub const SHADE: f32 = 0.18;
    /// Perforation dashes on the tear strip.
    pub const PERFORATION: f32 = 0.5;
    /// Frosted lip over the bottom of the pocket.
    pub const LIP: f32 = 0.55;
    /// Drop shadow under the envelope at rest.
    pub const DROP_SHADOW: f32 = 0.12;
    /// Flap edge highlight.
    pub const HIGHLIGHT: f32 = 0.45;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Chip size relative to the card width.
    pub const CHIP_WIDTH_RATIO: f32 = 0.16;
    /// Chip height relative to its width.
    pub const CHIP_HEIGHT_RATIO: f32 = 0.72;

    /// Perforation dash pattern along the strip edges.
    pub const PERFORATION_DASH: f32 = 5.0;
    pub const PERFORATION_GAP: f32 = 3.0;
    pub const PERFORATION_WIDTH: f32 = 1.2;

    /// Hint chevron arm length.
    pub const CHEVRON_SIZE: f32 = 5.0;

    /// Blur steps used to approximate soft shadows.
    pub const SHADOW_LAYERS: usize = 4;
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BRAND: f32 = 22.0;
    pub const FLAP_TITLE: f32 = 17.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 11.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 14.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::MD == spacing::XS * 2.0);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADE > 0.0 && opacity::SHADE < 1.0);
    assert!(opacity::DROP_SHADOW > 0.0 && opacity::DROP_SHADOW < 1.0);

    assert!(sizing::CHIP_WIDTH_RATIO > 0.0 && sizing::CHIP_WIDTH_RATIO < 0.5);
    assert!(sizing::PERFORATION_DASH > sizing::PERFORATION_GAP);
    assert!(sizing::SHADOW_LAYERS > 0);

    assert!(typography::BRAND > typography::FLAP_TITLE);
    assert!(typography::FLAP_TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::LG > radius::MD);
    assert!(radius::MD > radius::SM);
};
