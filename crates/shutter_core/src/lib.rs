//! Shutter Core
//!
//! Foundational primitives shared by the Shutter widget crates:
//!
//! - **Geometry**: points, sizes, rects and 2D affine transforms
//! - **Color**: linear RGBA colors with hex parsing and interpolation
//! - **Draw Context**: a retained drawing API that records commands for a host renderer
//! - **Events**: pointer events delivered by the host platform
//! - **State Machines**: small transition tables for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use shutter_core::{Color, DrawContext, Point, RecordingContext, Stroke};
//!
//! let mut ctx = RecordingContext::new();
//! ctx.fill_circle(Point::new(28.0, 28.0), 20.0, Color::WHITE.into());
//! ctx.stroke_circle(Point::new(28.0, 28.0), 28.0, &Stroke::new(2.0), Color::WHITE.into());
//!
//! assert_eq!(ctx.commands().len(), 2);
//! ```

pub mod color;
pub mod draw;
pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use color::{Brush, Color};
pub use draw::{DrawCommand, DrawContext, RecordingContext, Stroke, Transform};
pub use error::{CoreError, Result};
pub use events::{event_types, Event, EventData, EventType};
pub use fsm::{StateId, StateMachine, StateMachineBuilder};
pub use geometry::{Affine2D, Point, Rect, Size};
