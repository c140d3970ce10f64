//! Draw Context - retained rendering API
//!
//! Widgets paint through the `DrawContext` trait. The host decides what a
//! draw call means: a GPU backend rasterizes it, while `RecordingContext`
//! stores the calls as `DrawCommand`s so they can be replayed or inspected.
//!
//! # Example
//!
//! ```ignore
//! fn paint(ctx: &mut dyn DrawContext) {
//!     ctx.push_transform(Transform::translate(10.0, 20.0));
//!     ctx.fill_circle(Point::new(28.0, 28.0), 24.0, Color::WHITE.into());
//!     ctx.pop_transform();
//! }
//! ```

use crate::color::Brush;
use crate::geometry::{Affine2D, Point, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Transform Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D transform pushed onto a draw context
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Affine2D(Affine2D),
}

impl Transform {
    /// Create a 2D translation
    pub fn translate(x: f32, y: f32) -> Self {
        Transform::Affine2D(Affine2D::translation(x, y))
    }

    pub fn as_affine(&self) -> Affine2D {
        match self {
            Transform::Affine2D(affine) => *affine,
        }
    }
}

/// Stroke style configuration
///
/// Strokes are centered on the outline: half the width lies inside the
/// shape and half outside.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The interface widgets paint through
///
/// Coordinates are relative to the combined transform of every
/// `push_transform` that has not been popped yet.
pub trait DrawContext {
    /// Push a transform onto the stack
    fn push_transform(&mut self, transform: Transform);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, brush: Brush);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush);

    /// Stroke the outline of a circle
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush);
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    // State
    PushTransform(Transform),
    PopTransform,

    // 2D Drawing
    FillRect {
        rect: Rect,
        brush: Brush,
    },
    FillCircle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        stroke: Stroke,
        brush: Brush,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
    }

    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        self.commands.push(DrawCommand::FillRect { rect, brush });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            brush,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke: stroke.clone(),
            brush,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_recording_context_records_in_order() {
        let mut ctx = RecordingContext::new();
        ctx.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), Color::BLACK.into());
        ctx.push_transform(Transform::translate(20.0, 30.0));
        ctx.fill_circle(Point::new(50.0, 50.0), 10.0, Color::WHITE.into());
        ctx.stroke_circle(
            Point::new(50.0, 50.0),
            20.0,
            &Stroke::new(2.0),
            Color::WHITE.into(),
        );
        ctx.pop_transform();

        let commands = ctx.commands();
        assert_eq!(commands.len(), 5);
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        assert_eq!(
            commands[1],
            DrawCommand::PushTransform(Transform::translate(20.0, 30.0))
        );
        assert!(matches!(commands[2], DrawCommand::FillCircle { radius, .. } if radius == 10.0));
        assert!(matches!(
            &commands[3],
            DrawCommand::StrokeCircle { stroke, .. } if stroke.width == 2.0
        ));
        assert_eq!(commands[4], DrawCommand::PopTransform);
    }

    #[test]
    fn test_translate_moves_points() {
        let transform = Transform::translate(10.0, -5.0);
        assert_eq!(
            transform.as_affine().transform_point(Point::new(1.0, 1.0)),
            Point::new(11.0, -4.0)
        );
    }

    #[test]
    fn test_clear_drops_commands() {
        let mut ctx = RecordingContext::new();
        ctx.fill_circle(Point::ZERO, 1.0, Color::WHITE.into());
        ctx.clear();
        assert!(ctx.commands().is_empty());
    }
}
