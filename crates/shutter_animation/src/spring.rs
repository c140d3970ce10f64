//! Spring physics animation
//!
//! A damped spring integrated with RK4. `Transition` runs one per animated
//! property in normalized progress space (0.0 at the start value, 1.0 at the
//! target), so the same spring shape applies to colors and scales alike.

/// Most RK4 sub-steps a single `advance` call will take
const MAX_SUBSTEPS: u32 = 4096;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Create a unit-mass spring from a damping ratio
    ///
    /// A ratio of 1.0 is critically damped, below 1.0 bounces, above 1.0
    /// settles slowly without overshoot.
    pub fn from_damping_ratio(damping_ratio: f32, stiffness: f32) -> Self {
        let mass = 1.0;
        Self {
            stiffness,
            damping: damping_ratio * 2.0 * (stiffness * mass).sqrt(),
            mass,
        }
    }

    /// Critically damped, medium stiffness: no bounce, settles in ~0.3s
    pub fn medium() -> Self {
        Self::from_damping_ratio(1.0, 1500.0)
    }

    /// Undamped angular frequency, `sqrt(k / m)`
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Ratio of actual to critical damping
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_critically_damped(&self) -> bool {
        (self.damping_ratio() - 1.0).abs() < 1e-3
    }

    /// Whether the parameters describe a spring that comes to rest
    ///
    /// Stiffness and mass must be positive, damping non-negative, all finite.
    pub fn is_valid(&self) -> bool {
        self.stiffness.is_finite()
            && self.damping.is_finite()
            && self.mass.is_finite()
            && self.stiffness > 0.0
            && self.mass > 0.0
            && self.damping >= 0.0
    }

    /// Largest RK4 step that keeps this spring well inside the stable region
    ///
    /// The fastest decay or oscillation rate is bounded by `max(ω, c / m)`;
    /// keeping `rate * dt` at 0.5 leaves a wide margin below RK4's limit.
    pub fn max_stable_step(&self) -> f32 {
        let rate = self.natural_frequency().max(self.damping / self.mass);
        0.5 / rate
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::medium()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    rest_epsilon: f32,
    rest_velocity: f32,
}

impl Spring {
    /// Pixel-space settle thresholds: within 0.5px and under 5px/s is imperceptible
    pub const PIXEL_EPSILON: f32 = 0.5;
    pub const PIXEL_VELOCITY_EPSILON: f32 = 5.0;

    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            rest_epsilon: Self::PIXEL_EPSILON,
            rest_velocity: Self::PIXEL_VELOCITY_EPSILON,
        }
    }

    /// Start with a velocity already in flight
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    /// Override the settle thresholds (for springs not measured in pixels)
    pub fn with_rest_threshold(mut self, epsilon: f32, velocity_epsilon: f32) -> Self {
        self.rest_epsilon = epsilon;
        self.rest_velocity = velocity_epsilon;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Within the rest thresholds of the target
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.rest_epsilon
            && self.velocity.abs() < self.rest_velocity
    }

    /// Advance by `dt` seconds in sub-steps no longer than `max_step` or the
    /// spring's own stable step, snapping to the target once settled
    pub fn advance(&mut self, dt: f32, max_step: f32) {
        let step_limit = self.config.max_stable_step().min(max_step);
        let mut remaining = dt;
        let mut steps = 0;

        while remaining > 0.0 && steps < MAX_SUBSTEPS {
            if self.is_settled() {
                break;
            }
            let h = remaining.min(step_limit);
            self.step(h);
            remaining -= h;
            steps += 1;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// One RK4 step of `h` seconds
    pub fn step(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let (dx1, dv1) = (v, self.acceleration(x, v));
        let (dx2, dv2) = {
            let (x, v) = (x + dx1 * h / 2.0, v + dv1 * h / 2.0);
            (v, self.acceleration(x, v))
        };
        let (dx3, dv3) = {
            let (x, v) = (x + dx2 * h / 2.0, v + dv2 * h / 2.0);
            (v, self.acceleration(x, v))
        };
        let (dx4, dv4) = {
            let (x, v) = (x + dx3 * h, v + dv3 * h);
            (v, self.acceleration(x, v))
        };

        self.value = x + (dx1 + 2.0 * (dx2 + dx3) + dx4) * h / 6.0;
        self.velocity = v + (dv1 + 2.0 * (dv2 + dv3) + dv4) * h / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        (-self.config.stiffness * (x - self.target) - self.config.damping * v) / self.config.mass
    }
}
