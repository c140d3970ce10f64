//! Headless preview loop
//!
//! Drives a camera button the way a windowed host would: scripted pointer
//! gestures, a shutter that resets itself, and a fixed-rate frame tick that
//! updates animations and records draw commands.

use std::time::Duration;

use anyhow::Result;
use shutter_core::{
    event_types, Affine2D, Color, DrawCommand, DrawContext, Event, Point, Rect, RecordingContext,
    Size,
};
use shutter_widgets::{CameraButton, CameraButtonConfig};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

use crate::shutter::ShutterController;

/// How long each scripted tap holds the pointer down
const TAP_HOLD: Duration = Duration::from_millis(120);

/// Preview parameters
#[derive(Clone, Debug)]
pub struct PreviewOptions {
    pub viewport: Size,
    pub fps: u32,
    pub duration: Duration,
    pub shutter: Duration,
    /// Offsets from start at which a tap begins
    pub taps: Vec<Duration>,
}

/// What happened during a preview run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewSummary {
    pub frames: u32,
    pub animated_frames: u32,
    pub clicks: u32,
}

/// A pointer event due at an offset from the start of the preview
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedEvent {
    pub at: Duration,
    pub event: Event,
}

/// Expand tap start times into down/up pairs at `target`, in time order
pub fn tap_script(taps: &[Duration], target: Point) -> Vec<ScriptedEvent> {
    let mut script: Vec<ScriptedEvent> = taps
        .iter()
        .flat_map(|&start| {
            [
                (start, event_types::POINTER_DOWN),
                (start + TAP_HOLD, event_types::POINTER_UP),
            ]
        })
        .map(|(at, event_type)| ScriptedEvent {
            at,
            event: Event::pointer(event_type, target.x, target.y)
                .with_timestamp(at.as_millis() as u64),
        })
        .collect();
    script.sort_by_key(|scripted| scripted.at);
    script
}

/// Run the preview to completion
pub async fn run(config: CameraButtonConfig, options: PreviewOptions) -> Result<PreviewSummary> {
    let (mut shutter, mut shooting) = ShutterController::new(options.shutter);
    let (click_tx, mut click_rx) = mpsc::unbounded_channel();

    let mut button = CameraButton::with_config(config, false)?.on_click(move || {
        // Receiver lives for the whole preview
        let _ = click_tx.send(());
    });

    let viewport = options.viewport.to_rect();
    let bounds = Rect::from_center(viewport.center(), button.preferred_size());
    button.set_bounds(bounds);

    let script = tap_script(&options.taps, bounds.center());
    let mut next_event = 0;

    let frame = Duration::from_secs_f64(1.0 / f64::from(options.fps.max(1)));
    let mut ticker = tokio::time::interval(frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut ctx = RecordingContext::new();
    let mut summary = PreviewSummary::default();
    let start = Instant::now();
    let mut last_frame = start;

    tracing::info!(
        fps = options.fps,
        duration = ?options.duration,
        taps = options.taps.len(),
        "preview started"
    );

    loop {
        let now = ticker.tick().await;
        let elapsed = now.duration_since(start);
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        while let Some(scripted) = script.get(next_event).filter(|s| s.at <= elapsed) {
            button.handle_event(&scripted.event);
            next_event += 1;
        }

        while click_rx.try_recv().is_ok() {
            summary.clicks += 1;
            shutter.shoot();
        }

        if shooting.has_changed().unwrap_or(false) {
            let value = *shooting.borrow_and_update();
            button.set_shooting(value);
        }

        let animating = button.update(dt);
        if animating {
            summary.animated_frames += 1;
        }

        ctx.clear();
        paint_frame(&mut ctx, &button, viewport);
        summary.frames += 1;
        tracing::trace!(
            elapsed_ms = elapsed.as_millis() as u64,
            frame = %describe(ctx.commands()),
            "frame"
        );

        if elapsed >= options.duration {
            break;
        }
    }

    tracing::info!(
        frames = summary.frames,
        animated = summary.animated_frames,
        clicks = summary.clicks,
        shots = shutter.shots(),
        "preview finished"
    );
    Ok(summary)
}

/// Black backdrop with the button painted at its bounds
fn paint_frame(ctx: &mut dyn DrawContext, button: &CameraButton, viewport: Rect) {
    ctx.fill_rect(viewport, Color::BLACK.into());
    button.render(ctx);
}

/// One-line summary of a frame's circles, with centers in viewport space
pub fn describe(commands: &[DrawCommand]) -> String {
    let mut transforms = vec![Affine2D::IDENTITY];
    let mut parts = Vec::new();

    for command in commands {
        let current = transforms.last().copied().unwrap_or(Affine2D::IDENTITY);
        match command {
            DrawCommand::PushTransform(transform) => {
                transforms.push(current.then(&transform.as_affine()));
            }
            DrawCommand::PopTransform => {
                if transforms.len() > 1 {
                    transforms.pop();
                }
            }
            DrawCommand::FillCircle {
                center,
                radius,
                brush,
            } => {
                let at = current.transform_point(*center);
                parts.push(format!(
                    "disc ({:.1},{:.1}) r={radius:.2} {}",
                    at.x,
                    at.y,
                    hex(brush.color())
                ));
            }
            DrawCommand::StrokeCircle {
                radius,
                stroke,
                brush,
                ..
            } => parts.push(format!(
                "ring r={radius:.2} w={:.2} {}",
                stroke.width,
                hex(brush.color())
            )),
            DrawCommand::FillRect { .. } => {}
        }
    }

    parts.join(", ")
}

fn hex(color: Color) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shutter_widgets::CameraButtonDefaults;

    #[test]
    fn test_tap_script_orders_events() {
        let script = tap_script(
            &[Duration::from_millis(500), Duration::from_millis(100)],
            Point::new(10.0, 10.0),
        );
        let kinds: Vec<_> = script
            .iter()
            .map(|s| (s.at.as_millis(), s.event.event_type))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (100, event_types::POINTER_DOWN),
                (220, event_types::POINTER_UP),
                (500, event_types::POINTER_DOWN),
                (620, event_types::POINTER_UP),
            ]
        );
        assert_eq!(script[0].event.position(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_describe_resolves_button_position() {
        let mut button = CameraButton::new(true);
        button.set_bounds(Rect::from_center(
            Point::new(100.0, 100.0),
            button.preferred_size(),
        ));
        let mut ctx = RecordingContext::new();
        paint_frame(&mut ctx, &button, Rect::new(0.0, 0.0, 200.0, 200.0));

        let line = describe(ctx.commands());
        assert_eq!(
            line,
            "disc (100.0,100.0) r=18.20 #FFC773, ring r=28.00 w=2.24 #FFC773"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_click_shoots_and_resets() {
        let options = PreviewOptions {
            viewport: Size::new(200.0, 200.0),
            fps: 60,
            duration: Duration::from_millis(2000),
            shutter: Duration::from_millis(800),
            taps: vec![Duration::from_millis(100)],
        };
        let config = CameraButtonConfig::default();
        assert_eq!(config.size, CameraButtonDefaults::SIZE);

        let summary = run(config, options).await.unwrap();
        assert_eq!(summary.clicks, 1);
        assert!(summary.frames >= 120);
        assert!(summary.animated_frames > 0);
        assert!(summary.animated_frames < summary.frames);
    }
}
