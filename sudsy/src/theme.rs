//! Colors for the light and dark themes plus rotating accent palettes.

use ratatui::style::Color;
use sudsy_core::Theme;

/// Base colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Card background
    pub surface: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (ids, timestamps, hints)
    pub muted: Color,
    /// Card borders
    pub border: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb(11, 14, 24),
    surface: Color::Rgb(20, 25, 40),
    text: Color::Rgb(236, 239, 248),
    muted: Color::Rgb(140, 148, 170),
    border: Color::Rgb(58, 66, 92),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(244, 246, 252),
    surface: Color::Rgb(255, 255, 255),
    text: Color::Rgb(20, 24, 38),
    muted: Color::Rgb(98, 106, 128),
    border: Color::Rgb(200, 206, 222),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Five accent sets of five colors; "shuffle palette" picks one.
pub const ACCENT_SETS: [[Color; 5]; 5] = [
    [hex(0x7c3aed), hex(0x06b6d4), hex(0x22c55e), hex(0xf97316), hex(0xe11d48)],
    [hex(0x22c55e), hex(0x60a5fa), hex(0xa78bfa), hex(0xf59e0b), hex(0xfb7185)],
    [hex(0x06b6d4), hex(0x34d399), hex(0xf472b6), hex(0xf97316), hex(0x818cf8)],
    [hex(0xf97316), hex(0x22c55e), hex(0x06b6d4), hex(0xa78bfa), hex(0xfb7185)],
    [hex(0xfb7185), hex(0x60a5fa), hex(0x22c55e), hex(0xf59e0b), hex(0xa78bfa)],
];
