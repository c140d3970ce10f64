//! Camera shutter button
//!
//! A circular capture button made of a filled disc inside a thin ring:
//! - The disc shrinks while the button is pressed or a capture is running
//! - Both shapes take the shoot color while a capture is running
//! - Changes animate with the configured springs or tweens
//! - A completed click invokes `on_click`; a gesture that leaves the hit
//!   area or is cancelled by the platform does not
//!
//! The caller owns the shooting state and pushes it in with `set_shooting`.
//!
//! # Example
//!
//! ```rust
//! use shutter_core::{event_types, Event, RecordingContext};
//! use shutter_widgets::camera_button;
//!
//! let mut button = camera_button(false)
//!     .on_click(|| println!("capture!"))
//!     .build()
//!     .unwrap();
//!
//! button.handle_event(&Event::pointer(event_types::POINTER_DOWN, 28.0, 28.0));
//! button.handle_event(&Event::pointer(event_types::POINTER_UP, 28.0, 28.0));
//! button.set_shooting(true);
//!
//! while button.update(1.0 / 60.0) {}
//!
//! let mut ctx = RecordingContext::new();
//! button.render(&mut ctx);
//! assert_eq!(ctx.commands().len(), 4);
//! ```

use shutter_animation::Transition;
use shutter_core::{
    event_types, Color, DrawContext, Event, Point, Rect, Size, StateMachine, Stroke, Transform,
};

use crate::error::{Result, WidgetError};
use crate::style::{CameraButtonColors, CameraButtonDefaults, CameraButtonScale};

/// Interaction states
pub mod states {
    /// Not pressed
    pub const IDLE: u32 = 0;
    /// Pointer is down inside the hit area
    pub const PRESSED: u32 = 1;
}

/// Clamp a ring stroke percentage to `[0, 1]`; NaN becomes 0
pub fn clamp_stroke_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 1.0)
    }
}

/// Camera button configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraButtonConfig {
    pub colors: CameraButtonColors,
    pub scale: CameraButtonScale,
    /// Preferred side length in logical pixels
    pub size: f32,
    /// Ring stroke width relative to the short side (clamped at use)
    pub stroke_width_percent: f32,
}

impl Default for CameraButtonConfig {
    fn default() -> Self {
        Self {
            colors: CameraButtonDefaults::colors(),
            scale: CameraButtonDefaults::scale(),
            size: CameraButtonDefaults::SIZE,
            stroke_width_percent: CameraButtonDefaults::STROKE_WIDTH_PERCENT,
        }
    }
}

impl CameraButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(&self) -> Result<()> {
        if !self.size.is_finite() || self.size < 0.0 {
            return Err(WidgetError::InvalidSize(self.size));
        }
        Ok(())
    }
}

/// Resolved shapes for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShutterGeometry {
    pub center: Point,
    /// Radius of the filled disc
    pub disc_radius: f32,
    /// Radius of the ring's centerline
    pub ring_radius: f32,
    /// Width of the ring stroke, centered on `ring_radius`
    pub stroke_width: f32,
}

impl ShutterGeometry {
    /// Compute shapes for `bounds` at the given disc scale
    pub fn compute(bounds: Rect, scale: f32, stroke_width_percent: f32) -> Self {
        let short_side = bounds.short_side();
        Self {
            center: bounds.center(),
            disc_radius: scale * short_side / 2.0,
            ring_radius: short_side / 2.0,
            stroke_width: short_side * clamp_stroke_percent(stroke_width_percent) * 2.0,
        }
    }

    /// Outermost extent of the ring
    pub fn ring_outer_radius(&self) -> f32 {
        self.ring_radius + self.stroke_width / 2.0
    }
}

/// Camera shutter button widget
pub struct CameraButton {
    config: CameraButtonConfig,
    fsm: StateMachine,
    shooting: bool,
    color: Transition<Color>,
    scale: Transition<f32>,
    /// Hit area and drawing bounds in host coordinates
    bounds: Rect,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl CameraButton {
    /// Create a camera button with the default look
    pub fn new(shooting: bool) -> Self {
        let config = CameraButtonConfig::default();
        Self::create(config, shooting)
    }

    /// Create a camera button with a custom config
    pub fn with_config(config: CameraButtonConfig, shooting: bool) -> Result<Self> {
        config.validate()?;
        Ok(Self::create(config, shooting))
    }

    fn create(config: CameraButtonConfig, shooting: bool) -> Self {
        let fsm = Self::create_fsm();
        // Start at rest on the initial targets
        let color = Transition::new(config.colors.current(shooting), config.colors.animation);
        let scale = Transition::new(
            config.scale.current(shooting, false),
            config.scale.animation,
        );

        Self {
            bounds: Size::square(config.size).to_rect(),
            config,
            fsm,
            shooting,
            color,
            scale,
            on_click: None,
        }
    }

    /// Create the press FSM
    fn create_fsm() -> StateMachine {
        StateMachine::builder(states::IDLE)
            .on(states::IDLE, event_types::POINTER_DOWN, states::PRESSED)
            // Release inside the hit area completes the click
            .on(states::PRESSED, event_types::POINTER_UP, states::IDLE)
            // Leaving or losing the pointer abandons it
            .on(states::PRESSED, event_types::POINTER_LEAVE, states::IDLE)
            .on(states::PRESSED, event_types::POINTER_CANCEL, states::IDLE)
            .build()
    }

    pub fn config(&self) -> &CameraButtonConfig {
        &self.config
    }

    /// Preferred size for layout
    pub fn preferred_size(&self) -> Size {
        Size::square(self.config.size)
    }

    /// Set the callback invoked once per completed click
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn is_pressed(&self) -> bool {
        self.fsm.current() == states::PRESSED
    }

    pub fn is_shooting(&self) -> bool {
        self.shooting
    }

    /// Update the caller-owned shooting flag
    pub fn set_shooting(&mut self, shooting: bool) {
        if self.shooting != shooting {
            tracing::debug!(shooting, "camera button shooting changed");
            self.shooting = shooting;
            self.sync_targets();
        }
    }

    /// Color the button is animating toward
    pub fn target_color(&self) -> Color {
        self.config.colors.current(self.shooting)
    }

    /// Disc scale the button is animating toward
    pub fn target_scale(&self) -> f32 {
        self.config.scale.current(self.shooting, self.is_pressed())
    }

    /// Current animated color
    pub fn current_color(&self) -> Color {
        self.color.value()
    }

    /// Current animated disc scale
    pub fn current_scale(&self) -> f32 {
        self.scale.value()
    }

    /// Whether another `update` is needed to finish an animation
    pub fn is_animating(&self) -> bool {
        self.color.is_animating() || self.scale.is_animating()
    }

    fn sync_targets(&mut self) {
        let color = self.target_color();
        let scale = self.target_scale();
        let color_changed = self.color.set_target(color);
        let scale_changed = self.scale.set_target(scale);
        if color_changed || scale_changed {
            tracing::trace!(?color, scale, "camera button retargeted");
        }
    }

    // =========================================================================
    // Layout & Input
    // =========================================================================

    /// Place the button; `bounds` is both the hit area and the drawing area
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Handle a pointer event; returns true if it changed the interaction state
    pub fn handle_event(&mut self, event: &Event) -> bool {
        let inside = event
            .position()
            .map_or(true, |point| self.bounds.contains(point));

        let event_type = match event.event_type {
            event_types::POINTER_DOWN if !inside => return false,
            // Releasing or dragging outside the hit area cancels the press
            event_types::POINTER_UP | event_types::POINTER_MOVE if !inside => {
                event_types::POINTER_LEAVE
            }
            other => other,
        };

        let was_pressed = self.is_pressed();
        if !self.fsm.send(event_type) {
            return false;
        }

        if was_pressed && !self.is_pressed() {
            if event_type == event_types::POINTER_UP {
                tracing::debug!("camera button clicked");
                if let Some(ref mut callback) = self.on_click {
                    callback();
                }
            } else {
                tracing::debug!(event_type, "camera button press cancelled");
            }
        }

        self.sync_targets();
        true
    }

    /// Advance animations by `dt` seconds; returns true while still animating
    pub fn update(&mut self, dt: f32) -> bool {
        let color_animating = self.color.tick(dt);
        let scale_animating = self.scale.tick(dt);
        color_animating || scale_animating
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Shapes for the current frame at the current bounds
    pub fn geometry(&self) -> ShutterGeometry {
        ShutterGeometry::compute(
            self.bounds,
            self.current_scale(),
            self.config.stroke_width_percent,
        )
    }

    /// Draw the disc and ring centered in the current bounds
    ///
    /// Shapes are emitted in local coordinates under a translation to the
    /// bounds origin.
    pub fn render(&self, ctx: &mut dyn DrawContext) {
        let local = ShutterGeometry::compute(
            self.bounds.size.to_rect(),
            self.current_scale(),
            self.config.stroke_width_percent,
        );
        let color = self.current_color();
        let origin = self.bounds.origin;

        ctx.push_transform(Transform::translate(origin.x, origin.y));
        ctx.fill_circle(local.center, local.disc_radius, color.into());
        ctx.stroke_circle(
            local.center,
            local.ring_radius,
            &Stroke::new(local.stroke_width),
            color.into(),
        );
        ctx.pop_transform();
    }
}

/// Create a camera button builder
pub fn camera_button(shooting: bool) -> CameraButtonBuilder {
    CameraButtonBuilder {
        config: CameraButtonConfig::default(),
        shooting,
        on_click: None,
    }
}

/// Builder for creating camera buttons
pub struct CameraButtonBuilder {
    config: CameraButtonConfig,
    shooting: bool,
    on_click: Option<Box<dyn FnMut() + Send>>,
}

impl CameraButtonBuilder {
    /// Set idle and shooting colors
    pub fn colors(mut self, colors: CameraButtonColors) -> Self {
        self.config.colors = colors;
        self
    }

    /// Set idle and active disc scales
    pub fn scale(mut self, scale: CameraButtonScale) -> Self {
        self.config.scale = scale;
        self
    }

    /// Set the preferred side length
    pub fn size(mut self, size: f32) -> Self {
        self.config.size = size;
        self
    }

    /// Set the ring stroke width percentage (clamped to `[0, 1]` when drawn)
    pub fn stroke_width_percent(mut self, percent: f32) -> Self {
        self.config.stroke_width_percent = percent;
        self
    }

    /// Set the click callback
    pub fn on_click<F: FnMut() + Send + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Build the camera button widget
    pub fn build(self) -> Result<CameraButton> {
        let mut button = CameraButton::with_config(self.config, self.shooting)?;
        button.on_click = self.on_click;
        Ok(button)
    }
}
