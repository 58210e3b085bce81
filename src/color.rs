//! Color strings for the fill and background of the rendered symbol.
//!
//! Parsing is delegated to `csscolorparser`, so anything CSS accepts works
//! (surrounding whitespace ignored, case-insensitive):
//!
//! | Form | Example |
//! |---|---|
//! | CSS color name | `black`, `navy`, `rebeccapurple` |
//! | hex | `#fff`, `#fff8`, `#1a2b3c`, `#1a2b3c80` |
//! | rgb | `rgb(26, 43, 60)`, `rgb(100%, 0%, 0%)`, `rgba(26, 43, 60, 0.5)` |
//! | hsl / hsv | `hsl(0, 100%, 50%)`, `hsla(...)`, `hsv(120, 100%, 100%)` |
//!
//! The symbol is written as opaque RGB, so any alpha component is dropped.

use crate::error::QrError;
use image::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

/// Parse a color string in any of the accepted forms.
pub fn parse_color(input: &str) -> Result<Color, QrError> {
    let [r, g, b, _alpha] = csscolorparser::parse(input.trim())
        .map_err(|_| QrError::InvalidColor(input.to_string()))?
        .to_rgba8();
    Ok(Color::new(r, g, b))
}
