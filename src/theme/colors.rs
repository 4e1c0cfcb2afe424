//! Colors - Double A Brand Colors

use gpui::{Rgba, rgb};

/// Double A color palette - All colors are accessed via associated functions
pub struct DapColors;

impl DapColors {
    // Brand colors
    /// Primary brand accent - Orange
    pub fn brand() -> Rgba {
        rgb(0xea580c)
    }
    /// Darker brand accent for hover states
    pub fn brand_hover() -> Rgba {
        rgb(0xc2410c)
    }
    /// Lighter brand accent for focus rings
    pub fn brand_focus() -> Rgba {
        rgb(0xf97316)
    }

    // Background colors
    /// Main background
    pub fn background() -> Rgba {
        rgb(0xf3f4f6)
    }
    /// Card and content area background
    pub fn content_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Navigation bar background
    pub fn navbar_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Artwork tile background
    pub fn tile_bg() -> Rgba {
        rgb(0xfff7ed)
    }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba {
        rgb(0x1f2937)
    }
    /// Secondary text
    pub fn text_secondary() -> Rgba {
        rgb(0x6b7280)
    }
    /// Muted text
    pub fn text_muted() -> Rgba {
        rgb(0x9ca3af)
    }
    /// Light text (on brand backgrounds)
    pub fn text_light() -> Rgba {
        rgb(0xffffff)
    }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba {
        rgb(0x22c55e)
    }

    // Border colors
    /// Default border
    pub fn border() -> Rgba {
        rgb(0xe5e7eb)
    }
    /// Focused border
    pub fn border_focus() -> Rgba {
        rgb(0xf97316)
    }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba {
        rgb(0xea580c)
    }
    /// Primary button text
    pub fn button_primary_text() -> Rgba {
        rgb(0xffffff)
    }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba {
        rgb(0xe5e7eb)
    }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba {
        rgb(0x6b7280)
    }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Input border
    pub fn input_border() -> Rgba {
        rgb(0xd1d5db)
    }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba {
        rgb(0x9ca3af)
    }
}
