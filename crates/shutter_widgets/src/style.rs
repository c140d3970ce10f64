//! Camera button styling and defaults
//!
//! `CameraButtonColors` and `CameraButtonScale` are small immutable value
//! groups: an idle value, an active value and the animation used to move
//! between them. `CameraButtonDefaults` supplies the stock look.

use shutter_animation::{AnimationSpec, SpringConfig};
use shutter_core::Color;

/// Fill and ring colors of a camera button
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraButtonColors {
    /// Color while idle
    pub color: Color,
    /// Color while a capture is in progress
    pub shoot_color: Color,
    /// Animation between the two
    pub animation: AnimationSpec,
}

impl CameraButtonColors {
    pub fn new(color: Color, shoot_color: Color) -> Self {
        Self {
            color,
            shoot_color,
            animation: CameraButtonDefaults::animation(),
        }
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Target color for the given shooting state
    pub fn current(&self, shooting: bool) -> Color {
        if shooting {
            self.shoot_color
        } else {
            self.color
        }
    }
}

impl Default for CameraButtonColors {
    fn default() -> Self {
        CameraButtonDefaults::colors()
    }
}

/// Disc scale factors of a camera button, as a fraction of the button radius
///
/// Both values are expected in `(0, 1]`; `target` is normally the smaller one
/// so the disc shrinks while pressed or shooting. Neither is validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraButtonScale {
    /// Scale while idle
    pub default: f32,
    /// Scale while pressed or shooting
    pub target: f32,
    /// Animation between the two
    pub animation: AnimationSpec,
}

impl CameraButtonScale {
    pub fn new(default: f32, target: f32) -> Self {
        Self {
            default,
            target,
            animation: CameraButtonDefaults::animation(),
        }
    }

    pub fn with_animation(mut self, animation: AnimationSpec) -> Self {
        self.animation = animation;
        self
    }

    /// Target scale for the given shooting and pressed states
    pub fn current(&self, shooting: bool, pressed: bool) -> f32 {
        if pressed || shooting {
            self.target
        } else {
            self.default
        }
    }
}

impl Default for CameraButtonScale {
    fn default() -> Self {
        CameraButtonDefaults::scale()
    }
}

/// Stock configuration values for camera buttons
pub struct CameraButtonDefaults;

impl CameraButtonDefaults {
    /// Side length in logical pixels
    pub const SIZE: f32 = 56.0;

    /// Ring stroke width as a fraction of the short side, doubled
    pub const STROKE_WIDTH_PERCENT: f32 = 0.02;

    pub const COLOR: Color = Color::WHITE;
    pub const SHOOT_COLOR: Color = Color::AMBER;

    pub const DEFAULT_SCALE: f32 = 0.85;
    pub const TARGET_SCALE: f32 = 0.65;

    pub fn colors() -> CameraButtonColors {
        CameraButtonColors::new(Self::COLOR, Self::SHOOT_COLOR)
    }

    pub fn scale() -> CameraButtonScale {
        CameraButtonScale::new(Self::DEFAULT_SCALE, Self::TARGET_SCALE)
    }

    /// Critically damped spring: no bounce, settles in roughly a third of a second
    pub fn animation() -> AnimationSpec {
        AnimationSpec::Spring(SpringConfig::medium())
    }
}
