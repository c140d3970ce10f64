//! Shutter Animation System
//!
//! Spring physics, easing curves, and target-driven transitions.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Easing Curves**: Standard and cubic-bezier easing for timed tweens
//! - **Transitions**: Animate any `Interpolate` value toward a target that
//!   can change mid-flight, stepped by the host's frame tick

pub mod easing;
pub mod spring;
pub mod transition;
pub mod values;

pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use transition::{AnimationSpec, Transition};
pub use values::Interpolate;
