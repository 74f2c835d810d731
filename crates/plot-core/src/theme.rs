// File: crates/plot-core/src/theme.rs
// Summary: Colors and Light/Dark theme presets used to resolve unset graphic params.

use crate::text::LabelFont;

/// Non-premultiplied 8-bit ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub frame: Color,
    pub label: Color,
    pub trace: Color,
    pub label_font: LabelFont,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            frame: Color::from_argb(255, 180, 180, 190),
            label: Color::from_argb(255, 235, 235, 245),
            trace: Color::from_argb(255, 64, 160, 255),
            label_font: LabelFont::default(),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            frame: Color::from_argb(255, 60, 60, 70),
            label: Color::from_argb(255, 20, 20, 30),
            trace: Color::from_argb(255, 32, 120, 200),
            label_font: LabelFont::default(),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            frame: Color::from_argb(255, 0x93, 0xa1, 0xa1),      // base1
            label: Color::from_argb(255, 0xee, 0xe8, 0xd5),      // base2
            trace: Color::from_argb(255, 0x26, 0x8b, 0xd2),      // blue
            label_font: LabelFont::default(),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            frame: Color::from_argb(255, 0x65, 0x7b, 0x83),      // base00
            label: Color::from_argb(255, 0x00, 0x2b, 0x36),      // base03
            trace: Color::from_argb(255, 0x26, 0x8b, 0xd2),
            label_font: LabelFont::default(),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: Color::from_argb(255, 0x22, 0x22, 0x22),
            frame: Color::from_argb(255, 0xff, 0xff, 0xff),
            label: Color::from_argb(255, 0xff, 0xff, 0xff),
            trace: Color::from_argb(255, 0x00, 0xff, 0xff),
            label_font: LabelFont::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
