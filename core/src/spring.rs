//! Closed-form damped harmonic oscillator.
//!
//! The spring pulls a value from `from` toward `to`. Displacement `d = x - to` obeys
//! `m·d'' + c·d' + k·d = 0`, which has an exact solution in each of the three damping regimes, so
//! any point in time can be evaluated directly without stepping through the ones before it.
//!
//! Time is in milliseconds, velocities are in units per second.

use crate::generator::GeneratorState;
use crate::value::Value;

/// Stiffness used when none is given.
pub const DEFAULT_STIFFNESS: f64 = 100.0;
/// Damping used when none is given.
pub const DEFAULT_DAMPING: f64 = 10.0;
/// Mass used when none is given.
pub const DEFAULT_MASS: f64 = 1.0;
/// Resting speed threshold, in units per second.
pub const DEFAULT_REST_SPEED: f64 = 2.0;
/// Bounce used when a spring is described by duration.
pub const DEFAULT_BOUNCE: f64 = 0.25;
/// Duration used when a spring is described by bounce alone.
pub const DEFAULT_SPRING_DURATION: f64 = 800.0;

// `min(ωd·t, 300)` keeps sinh/cosh finite for long overdamped runs; the exponential envelope has
// long since driven the product to zero by then.
const MAX_HYPERBOLIC_ARGUMENT: f64 = 300.0;

/// Physical description of a spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Initial velocity, in units per second.
    pub velocity: f64,
    /// The spring may rest once its speed is at most this many units per second.
    pub rest_speed: f64,
    /// The spring may rest once it is at most this far from its target. Defaults to `0.01` for
    /// ranges up to 1 unit and `0.4` otherwise.
    pub rest_delta: Option<f64>,
    /// When set, the spring is done at exactly this time (ms) rather than at rest.
    pub duration: Option<f64>,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
            velocity: 0.0,
            rest_speed: DEFAULT_REST_SPEED,
            rest_delta: None,
            duration: None,
        }
    }
}

impl SpringParams {
    /// `c / (2·sqrt(k·m))`: below 1 oscillates, 1 is critical, above 1 creeps.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Solves stiffness and damping for a spring that settles in about `duration` ms with the
    /// given `bounce` (0 = no overshoot, toward 1 = very bouncy).
    ///
    /// The result is done at exactly `duration`.
    pub fn from_duration(duration: f64, bounce: f64, velocity: f64) -> Self {
        let (stiffness, damping) = find_spring(duration, bounce, velocity, DEFAULT_MASS);
        Self {
            stiffness,
            damping,
            duration: Some(duration),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Regime {
    Underdamped { decay: f64, frequency: f64 },
    Critical { frequency: f64 },
    Overdamped { decay: f64, frequency: f64 },
}

/// A spring between two numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    from: f64,
    to: f64,
    params: SpringParams,
    rest_delta: f64,
    regime: Regime,
}

impl Spring {
    pub fn new(from: f64, to: f64, params: SpringParams) -> Self {
        let rest_delta = params.rest_delta.unwrap_or(if (to - from).abs() <= 1.0 {
            0.01
        } else {
            0.4
        });
        let ratio = params.damping_ratio();
        // Angular frequency in radians per millisecond.
        let undamped = (params.stiffness / params.mass).sqrt() / 1000.0;
        let regime = if (ratio - 1.0).abs() < 1e-9 {
            Regime::Critical {
                frequency: undamped,
            }
        } else if ratio < 1.0 {
            Regime::Underdamped {
                decay: ratio * undamped,
                frequency: undamped * (1.0 - ratio * ratio).sqrt(),
            }
        } else {
            Regime::Overdamped {
                decay: ratio * undamped,
                frequency: undamped * (ratio * ratio - 1.0).sqrt(),
            }
        };
        Self {
            from,
            to,
            params,
            rest_delta,
            regime,
        }
    }

    pub fn params(&self) -> &SpringParams {
        &self.params
    }

    /// Fixed duration if this spring was solved from one.
    pub fn duration(&self) -> Option<f64> {
        self.params.duration
    }

    /// Displacement from `to` and its rate of change (units per ms) at time `t`.
    fn displacement(&self, t: f64) -> (f64, f64) {
        let d0 = self.from - self.to;
        let v0 = self.params.velocity / 1000.0;
        match self.regime {
            Regime::Underdamped { decay, frequency } => {
                let envelope = (-decay * t).exp();
                let b = (v0 + decay * d0) / frequency;
                let (sin, cos) = (frequency * t).sin_cos();
                let position = envelope * (d0 * cos + b * sin);
                let velocity = envelope * (v0 * cos - (decay * b + frequency * d0) * sin);
                (position, velocity)
            }
            Regime::Critical { frequency } => {
                let envelope = (-frequency * t).exp();
                let c = v0 + frequency * d0;
                let position = envelope * (d0 + c * t);
                let velocity = envelope * (v0 - frequency * c * t);
                (position, velocity)
            }
            Regime::Overdamped { decay, frequency } => {
                let envelope = (-decay * t).exp();
                let b = (v0 + decay * d0) / frequency;
                let angle = (frequency * t).min(MAX_HYPERBOLIC_ARGUMENT);
                let (sinh, cosh) = (angle.sinh(), angle.cosh());
                let position = envelope * (d0 * cosh + b * sinh);
                let velocity = envelope * (v0 * cosh + (frequency * d0 - decay * b) * sinh);
                (position, velocity)
            }
        }
    }

    pub fn evaluate(&self, t: f64) -> GeneratorState {
        let (displacement, rate) = self.displacement(t);
        let velocity = rate * 1000.0;
        let done = match self.params.duration {
            Some(duration) => t >= duration,
            None => velocity.abs() <= self.params.rest_speed && displacement.abs() <= self.rest_delta,
        };
        GeneratorState {
            value: Value::Number(if done { self.to } else { self.to + displacement }),
            velocity: Some(if done { 0.0 } else { velocity }),
            done,
        }
    }

    /// The same spring released from `to` back toward `from`, with its initial velocity negated.
    pub fn mirrored(&self) -> Self {
        let params = SpringParams {
            velocity: -self.params.velocity,
            rest_delta: Some(self.rest_delta),
            ..self.params
        };
        Self::new(self.to, self.from, params)
    }
}

const SAFE_MIN: f64 = 0.001;
const MIN_DURATION: f64 = 0.01;
const MAX_DURATION: f64 = 10.0;
const MIN_DAMPING_RATIO: f64 = 0.05;
const MAX_DAMPING_RATIO: f64 = 1.0;
const ROOT_ITERATIONS: usize = 12;

// Finds the undamped frequency whose envelope falls to SAFE_MIN at `duration` using Newton's
// method, then derives stiffness and damping from it. Works in seconds internally.
fn find_spring(duration: f64, bounce: f64, velocity: f64, mass: f64) -> (f64, f64) {
    let ratio = (1.0 - bounce).clamp(MIN_DAMPING_RATIO, MAX_DAMPING_RATIO);
    let duration = (duration / 1000.0).clamp(MIN_DURATION, MAX_DURATION);
    let damped = |undamped: f64, ratio: f64| undamped * (1.0 - ratio * ratio).sqrt();

    let envelope = |undamped: f64| -> f64 {
        if ratio < 1.0 {
            let decay = undamped * ratio;
            let a = decay - velocity;
            let b = damped(undamped, ratio);
            let c = (-decay * duration).exp();
            SAFE_MIN - (a / b) * c
        } else {
            let a = (-undamped * duration).exp();
            let b = (undamped - velocity) * duration + 1.0;
            -SAFE_MIN + a * b
        }
    };
    let derivative = |undamped: f64| -> f64 {
        if ratio < 1.0 {
            let decay = undamped * ratio;
            let delta = decay * duration;
            let d = delta * velocity + velocity;
            let e = ratio * ratio * undamped * undamped * duration;
            let f = (-delta).exp();
            let g = damped(undamped * undamped, ratio);
            let factor = if -envelope(undamped) + SAFE_MIN > 0.0 { -1.0 } else { 1.0 };
            factor * ((d - e) * f) / g
        } else {
            let a = (-undamped * duration).exp();
            let b = (velocity - undamped) * (duration * duration);
            a * b
        }
    };

    let mut undamped = 5.0 / duration;
    for _ in 1..ROOT_ITERATIONS {
        undamped -= envelope(undamped) / derivative(undamped);
    }
    if !undamped.is_finite() {
        return (DEFAULT_STIFFNESS, DEFAULT_DAMPING);
    }
    let stiffness = undamped * undamped * mass;
    let damping = ratio * 2.0 * (mass * stiffness).sqrt();
    (stiffness, damping)
}
