//! Animatable value types
//!
//! Linear interpolation for the value types widgets animate.

use shutter_core::Color;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    ///
    /// Implementations may extrapolate for `t` outside `[0, 1]`, which is
    /// how spring overshoot shows up in the animated value.
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;

    /// Dot product of the displacements `self -> to` and `from -> onto`
    ///
    /// Lets a retargeted animation project its velocity onto the new path.
    fn delta_dot(&self, to: &Self, from: &Self, onto: &Self) -> f32;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }

    fn delta_dot(&self, to: &Self, from: &Self, onto: &Self) -> f32 {
        (to - self) * (onto - from)
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }

    fn delta_dot(&self, to: &Self, from: &Self, onto: &Self) -> f32 {
        (to.r - self.r) * (onto.r - from.r)
            + (to.g - self.g) * (onto.g - from.g)
            + (to.b - self.b) * (onto.b - from.b)
            + (to.a - self.a) * (onto.a - from.a)
    }
}
