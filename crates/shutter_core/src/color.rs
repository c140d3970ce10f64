//! Colors and brushes

use crate::error::{CoreError, Result};

/// RGBA color with components in 0.0..=1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    /// Warm amber used by camera UIs while a capture is in progress
    pub const AMBER: Color = Color::rgb(1.0, 199.0 / 255.0, 115.0 / 255.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Color from `0xAARRGGBB`
    pub fn from_argb(argb: u32) -> Self {
        let a = ((argb >> 24) & 0xFF) as f32 / 255.0;
        Self::from_hex(argb & 0x00FF_FFFF).with_alpha(a)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` (the leading `#` is optional)
    pub fn from_hex_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || CoreError::InvalidColor(s.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        match digits.len() {
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(invalid()),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    ///
    /// `t` is clamped so spring overshoot never produces out-of-gamut colors.
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Fill or stroke source for draw operations
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    /// The solid color of this brush
    pub fn color(&self) -> Color {
        match self {
            Brush::Solid(color) => *color,
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_from_hex_str_rgb() {
        let color = Color::from_hex_str("#FFC773").unwrap();
        assert_eq!(color, Color::AMBER);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_from_hex_str_argb() {
        let color = Color::from_hex_str("80ffffff").unwrap();
        assert!(approx(color.r, 1.0));
        assert!(approx(color.a, 128.0 / 255.0));
        assert_eq!(Color::from_argb(0xffffc773), Color::AMBER);
    }

    #[test]
    fn test_from_hex_str_rejects_garbage() {
        assert!(Color::from_hex_str("#FFF").is_err());
        assert!(Color::from_hex_str("#GGGGGG").is_err());
        assert!(Color::from_hex_str("+12345").is_err());
        assert!(Color::from_hex_str("").is_err());
        assert!(Color::from_hex_str("#").is_err());
    }

    #[test]
    fn test_from_hex_str_single_hash_only() {
        assert!(Color::from_hex_str("##FFC773").is_err());
        assert!(Color::from_hex_str("#FFC773#").is_err());
        assert_eq!(Color::from_hex_str("FFC773"), Ok(Color::AMBER));
        assert_eq!(Color::from_hex_str(" #FFC773 "), Ok(Color::AMBER));
    }

    #[test]
    fn test_lerp_clamps_factor() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert!(approx(mid.r, 0.5));

        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, 1.4), Color::WHITE);
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, -0.2), Color::BLACK);
    }
}
