//! Target-driven transitions
//!
//! A `Transition` holds an animated value and the target it is moving
//! toward. Changing the target restarts the animation from wherever the
//! value currently is; the host advances it with `tick(dt)` once per frame.
//!
//! # Example
//!
//! ```rust
//! use shutter_animation::{AnimationSpec, SpringConfig, Transition};
//!
//! let mut scale = Transition::new(0.85_f32, AnimationSpec::Spring(SpringConfig::medium()));
//! scale.set_target(0.65);
//!
//! while scale.tick(1.0 / 60.0) {}
//! assert_eq!(scale.value(), 0.65);
//! ```

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use crate::values::Interpolate;

/// Targets closer than this to the current target do not restart the animation
const TARGET_EPSILON: f32 = 1e-4;

/// Longest single spring integration step; stiff springs use shorter ones
const MAX_SPRING_STEP: f32 = 1.0 / 120.0;

/// Progress springs run from 0.0 to 1.0, so settle on unit-scale thresholds
const PROGRESS_EPSILON: f32 = 1e-3;
const PROGRESS_VELOCITY_EPSILON: f32 = 1e-2;

/// How a transition moves from its start value to its target
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationSpec {
    /// Physics-driven, duration emerges from the spring parameters
    Spring(SpringConfig),
    /// Fixed duration with an easing curve
    Tween { duration_ms: u32, easing: Easing },
    /// Jump to the target immediately
    Snap,
}

impl AnimationSpec {
    /// Critically damped medium spring
    pub fn spring() -> Self {
        AnimationSpec::Spring(SpringConfig::medium())
    }

    /// Timed tween with the standard fast-out-slow-in curve
    pub fn tween(duration_ms: u32) -> Self {
        AnimationSpec::Tween {
            duration_ms,
            easing: Easing::FAST_OUT_SLOW_IN,
        }
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::spring()
    }
}

#[derive(Clone, Copy, Debug)]
enum Progress {
    Idle,
    Spring(Spring),
    Tween { elapsed_ms: f32 },
}

/// An animated value moving toward a target
#[derive(Clone, Debug)]
pub struct Transition<T: Interpolate> {
    spec: AnimationSpec,
    start: T,
    target: T,
    current: T,
    progress: Progress,
}

impl<T: Interpolate> Transition<T> {
    /// Create a transition resting at `initial`
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            spec,
            start: initial.clone(),
            target: initial.clone(),
            current: initial,
            progress: Progress::Idle,
        }
    }

    /// Current (possibly in-flight) value
    pub fn value(&self) -> T {
        self.current.clone()
    }

    /// The value being animated toward
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Whether another `tick` would change the value
    pub fn is_animating(&self) -> bool {
        !matches!(self.progress, Progress::Idle)
    }

    /// Move toward a new target
    ///
    /// The animation restarts from the current value. A spring keeps the
    /// velocity it had along the old path, projected onto the new one.
    /// Returns false when `target` equals the current target, in which case
    /// nothing changes.
    pub fn set_target(&mut self, target: T) -> bool {
        if target.approx_eq(&self.target, TARGET_EPSILON) {
            return false;
        }

        let carried = self.carried_velocity(&target);
        self.start = self.current.clone();
        self.target = target;
        self.progress = match self.spec {
            AnimationSpec::Spring(config) if config.is_valid() => {
                let mut spring = Spring::new(config, 0.0)
                    .with_velocity(carried)
                    .with_rest_threshold(PROGRESS_EPSILON, PROGRESS_VELOCITY_EPSILON);
                spring.set_target(1.0);
                Progress::Spring(spring)
            }
            AnimationSpec::Spring(config) => {
                tracing::warn!(?config, "spring never settles, jumping to target");
                Progress::Idle
            }
            AnimationSpec::Tween { duration_ms, .. } if duration_ms > 0 => {
                Progress::Tween { elapsed_ms: 0.0 }
            }
            _ => Progress::Idle,
        };

        if self.is_animating() {
            tracing::trace!(spec = ?self.spec, carried, "transition started");
        } else {
            self.current = self.target.clone();
        }
        true
    }

    /// Progress velocity for a path from the current value to `target`
    /// that continues the in-flight motion
    fn carried_velocity(&self, target: &T) -> f32 {
        let velocity = match self.progress {
            Progress::Spring(spring) => spring.velocity(),
            _ => return 0.0,
        };

        let along = self
            .start
            .delta_dot(&self.target, &self.current, target);
        let length_sq = self.current.delta_dot(target, &self.current, target);
        let carried = velocity * along / length_sq;
        if length_sq > f32::EPSILON && carried.is_finite() {
            carried
        } else {
            0.0
        }
    }

    /// Jump to the target, abandoning any in-flight animation
    pub fn snap_to_target(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.progress = Progress::Idle;
    }

    /// Advance by `dt` seconds; returns true while still animating
    pub fn tick(&mut self, dt: f32) -> bool {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let (fraction, finished) = match &mut self.progress {
            Progress::Idle => return false,
            Progress::Spring(spring) => {
                spring.advance(dt, MAX_SPRING_STEP);
                (spring.value(), spring.is_settled())
            }
            Progress::Tween { elapsed_ms } => {
                let (duration_ms, easing) = match self.spec {
                    AnimationSpec::Tween {
                        duration_ms,
                        easing,
                    } => (duration_ms, easing),
                    _ => (0, Easing::Linear),
                };
                *elapsed_ms += dt * 1000.0;
                let linear = if duration_ms == 0 {
                    1.0
                } else {
                    (*elapsed_ms / duration_ms as f32).min(1.0)
                };
                (easing.apply(linear), linear >= 1.0)
            }
        };

        if !fraction.is_finite() {
            tracing::warn!(spec = ?self.spec, "transition diverged, jumping to target");
            self.snap_to_target();
            return false;
        }

        if finished {
            self.snap_to_target();
            false
        } else {
            self.current = self.start.lerp(&self.target, fraction);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shutter_core::Color;

    fn run_to_rest<T: Interpolate>(transition: &mut Transition<T>) -> usize {
        let mut frames = 0;
        while transition.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 600, "transition never settled");
        }
        frames
    }

    #[test]
    fn test_resting_transition_does_not_animate() {
        let mut t = Transition::new(0.85_f32, AnimationSpec::spring());
        assert!(!t.is_animating());
        assert!(!t.tick(1.0 / 60.0));
        assert_eq!(t.value(), 0.85);
    }

    #[test]
    fn test_same_target_is_ignored() {
        let mut t = Transition::new(0.85_f32, AnimationSpec::spring());
        assert!(!t.set_target(0.85));
        assert!(!t.is_animating());
    }

    #[test]
    fn test_spring_reaches_target_exactly() {
        let mut t = Transition::new(0.85_f32, AnimationSpec::spring());
        assert!(t.set_target(0.65));
        assert!(t.is_animating());

        let frames = run_to_rest(&mut t);
        assert!(frames > 1);
        assert_eq!(t.value(), 0.65);
    }

    #[test]
    fn test_spring_moves_monotonically_when_critically_damped() {
        let mut t = Transition::new(0.85_f32, AnimationSpec::spring());
        t.set_target(0.65);

        let mut prev = t.value();
        while t.tick(1.0 / 60.0) {
            assert!(t.value() <= prev + 1e-6);
            assert!(t.value() >= 0.65 - 1e-3);
            prev = t.value();
        }
    }

    #[test]
    fn test_retarget_starts_from_in_flight_value() {
        let mut t = Transition::new(0.0_f32, AnimationSpec::tween(100));
        t.set_target(1.0);
        t.tick(0.05);
        let midway = t.value();
        assert!(midway > 0.0 && midway < 1.0);

        t.set_target(0.0);
        assert_eq!(t.value(), midway);
        t.tick(0.0);
        assert!((t.value() - midway).abs() < 1e-6);

        run_to_rest(&mut t);
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_tween_duration() {
        let mut t = Transition::new(
            0.0_f32,
            AnimationSpec::Tween {
                duration_ms: 200,
                easing: Easing::Linear,
            },
        );
        t.set_target(10.0);

        assert!(t.tick(0.1));
        assert!((t.value() - 5.0).abs() < 1e-4);
        assert!(!t.tick(0.1));
        assert_eq!(t.value(), 10.0);
    }

    #[test]
    fn test_snap_and_zero_duration_jump() {
        let mut snap = Transition::new(Color::WHITE, AnimationSpec::Snap);
        snap.set_target(Color::AMBER);
        assert!(!snap.is_animating());
        assert_eq!(snap.value(), Color::AMBER);

        let mut instant = Transition::new(0.0_f32, AnimationSpec::tween(0));
        instant.set_target(1.0);
        assert_eq!(instant.value(), 1.0);
    }

    #[test]
    fn test_large_frame_delta_is_substepped() {
        let mut t = Transition::new(0.85_f32, AnimationSpec::spring());
        t.set_target(0.65);

        // A single half-second hitch still lands on the target
        assert!(!t.tick(0.5));
        assert_eq!(t.value(), 0.65);
    }

    #[test]
    fn test_color_transition() {
        let mut t = Transition::new(Color::WHITE, AnimationSpec::spring());
        t.set_target(Color::AMBER);
        t.tick(1.0 / 60.0);

        let c = t.value();
        assert_eq!(c.r, 1.0);
        assert!(c.b < 1.0 && c.b > Color::AMBER.b);

        run_to_rest(&mut t);
        assert_eq!(t.value(), Color::AMBER);
    }

    #[test]
    fn test_very_stiff_spring_settles() {
        let spec = AnimationSpec::Spring(SpringConfig::from_damping_ratio(1.0, 1e6));
        let mut t = Transition::new(0.85_f32, spec);

        t.set_target(0.65);
        for _ in 0..120 {
            t.tick(1.0 / 60.0);
            assert!(t.value().is_finite());
        }
        assert!(!t.is_animating());
        assert_eq!(t.value(), 0.65);

        t.set_target(0.85);
        run_to_rest(&mut t);
        assert_eq!(t.value(), 0.85);
    }

    #[test]
    fn test_degenerate_spring_jumps_to_target() {
        let spec = AnimationSpec::Spring(SpringConfig::new(0.0, 10.0, 1.0));
        let mut t = Transition::new(0.85_f32, spec);
        assert!(t.set_target(0.65));
        assert!(!t.is_animating());
        assert_eq!(t.value(), 0.65);
        assert_eq!(*t.target(), 0.65);
    }

    #[test]
    fn test_non_finite_frame_delta_is_ignored() {
        let mut t = Transition::new(0.0_f32, AnimationSpec::tween(100));
        t.set_target(1.0);
        assert!(t.tick(f32::NAN));
        assert!(t.tick(f32::INFINITY));
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_reversal_keeps_spring_momentum() {
        let mut t = Transition::new(0.85_f32, AnimationSpec::spring());
        t.set_target(0.65);
        t.tick(1.0 / 60.0);
        let in_flight = t.value();
        assert!(in_flight < 0.85);

        // Still heading down when the target flips back up
        t.set_target(0.85);
        t.tick(1.0 / 60.0);
        assert!(t.value() < in_flight);

        run_to_rest(&mut t);
        assert_eq!(t.value(), 0.85);
    }

    #[test]
    fn test_same_direction_retarget_does_not_stall() {
        let mut t = Transition::new(0.0_f32, AnimationSpec::spring());
        t.set_target(1.0);
        t.tick(1.0 / 60.0);
        let first = t.value();

        t.set_target(2.0);
        t.tick(1.0 / 60.0);
        // Carried velocity moves it further than a standing start would
        let mut fresh = Transition::new(first, AnimationSpec::spring());
        fresh.set_target(2.0);
        fresh.tick(1.0 / 60.0);
        assert!(t.value() > fresh.value());
    }
}
