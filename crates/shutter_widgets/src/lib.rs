//! Shutter Widget Library
//!
//! Camera UI components with FSM-driven interactions and animated state.
//!
//! # Architecture
//!
//! Widgets are retained objects driven by the host's loop:
//!
//! 1. **Events**: the host forwards pointer events to `handle_event`, which
//!    runs them through the widget's interaction state machine.
//! 2. **Props**: caller-owned state (such as whether a capture is running)
//!    is pushed in through setters.
//! 3. **Frames**: `update(dt)` advances animations and reports whether
//!    another frame is needed; `render` paints into a `DrawContext`.
//!
//! # Example
//!
//! ```ignore
//! use shutter_widgets::prelude::*;
//!
//! let mut shutter = camera_button(false)
//!     .on_click(|| start_capture())
//!     .build()?;
//!
//! shutter.handle_event(&event);
//! shutter.set_shooting(capture_running);
//! if shutter.update(dt) {
//!     request_redraw();
//! }
//! shutter.render(&mut ctx);
//! ```

pub mod camera_button;
pub mod error;
pub mod style;

pub use camera_button::{
    camera_button, clamp_stroke_percent, CameraButton, CameraButtonBuilder, CameraButtonConfig,
    ShutterGeometry,
};
pub use error::{Result, WidgetError};
pub use style::{CameraButtonColors, CameraButtonDefaults, CameraButtonScale};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::camera_button::{camera_button, CameraButton, CameraButtonBuilder};
    pub use crate::style::{CameraButtonColors, CameraButtonDefaults, CameraButtonScale};
}
