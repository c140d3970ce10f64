//! Simulated camera shutter
//!
//! Owns the `shooting` flag the button displays. A shot raises the flag and
//! spawns a task that lowers it again once the shutter duration has passed.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct ShutterController {
    shooting: watch::Sender<bool>,
    duration: Duration,
    pending_reset: Option<JoinHandle<()>>,
    shots: u32,
}

impl ShutterController {
    /// Create a controller and the receiver that observes its shooting flag
    pub fn new(duration: Duration) -> (Self, watch::Receiver<bool>) {
        let (shooting, rx) = watch::channel(false);
        let controller = Self {
            shooting,
            duration,
            pending_reset: None,
            shots: 0,
        };
        (controller, rx)
    }

    /// Start a capture; a shot during a running capture restarts the timer
    pub fn shoot(&mut self) {
        self.shots += 1;
        tracing::info!(shot = self.shots, duration = ?self.duration, "shutter open");
        self.shooting.send_replace(true);

        if let Some(previous) = self.pending_reset.take() {
            previous.abort();
        }

        let shooting = self.shooting.clone();
        let duration = self.duration;
        self.pending_reset = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            tracing::info!("shutter closed");
            shooting.send_replace(false);
        }));
    }

    pub fn is_shooting(&self) -> bool {
        *self.shooting.borrow()
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }
}

impl Drop for ShutterController {
    fn drop(&mut self) {
        // Tearing down the caller abandons the delayed reset
        if let Some(pending) = self.pending_reset.take() {
            pending.abort();
        }
    }
}
