use ggez::graphics;
use hsl::HSL;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

pub use to_color::ToColor;

mod to_color;

#[derive(Deref, DerefMut, Copy, Clone, Debug, PartialEq)]
pub struct Color(pub graphics::Color);

impl Color {
    pub const WHITE: Self = Self(graphics::Color::WHITE);
    pub const RED: Self = Self(graphics::Color::RED);

    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(graphics::Color::from_rgb(r, g, b))
    }

    #[must_use]
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Scale the lightness of the color, keeping hue and saturation
    #[must_use]
    pub fn shade(self, factor: f64) -> Self {
        let (r, g, b, _) = self.to_rgba();
        let mut hsl = HSL::from_rgb(&[r, g, b]);
        hsl.l = (hsl.l * factor).clamp(0., 1.);
        hsl.to_color().with_alpha(self.a)
    }
}

impl From<Color> for graphics::Color {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[derive(Debug, Error)]
pub struct ColorError {
    pub input: String,
}

impl Display for ColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}, expected #RRGGBB", self.input)
    }
}

/// Parses the `#RRGGBB` notation used by color parameters
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorError { input: s.to_string() };
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        let color: Color = "#4CAF50".parse().unwrap();
        assert_eq!(color.to_rgb(), (0x4C, 0xAF, 0x50));
        let color: Color = "#f44336".parse().unwrap();
        assert_eq!(color.to_rgb(), (0xF4, 0x43, 0x36));
    }

    #[test]
    fn rejects_malformed_colors() {
        for input in ["4CAF50", "#4CAF5", "#4CAF500", "#GGGGGG", "", "#"] {
            assert!(input.parse::<Color>().is_err(), "{:?}", input);
        }
    }

    #[test]
    fn shade_darkens() {
        let color = Color::from_rgb(200, 100, 50);
        let darker = color.shade(0.5);
        let (r, g, b) = darker.to_rgb();
        assert!(r < 200 && g < 100 && b <= 50);
        assert_eq!(darker.a, color.a);
    }
}
