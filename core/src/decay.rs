//! Inertial deceleration toward a projected resting point.
//!
//! A value thrown with `velocity` glides to `from + power·velocity`, approaching it exponentially
//! with time constant `time_constant`. An optional hook can snap that resting point elsewhere, for
//! example onto a grid.

use crate::generator::GeneratorState;
use crate::value::Value;

pub const DEFAULT_POWER: f64 = 0.8;
/// Time constant, in milliseconds.
pub const DEFAULT_TIME_CONSTANT: f64 = 350.0;
pub const DEFAULT_DECAY_REST_DELTA: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayParams {
    /// Initial velocity, in units per second.
    pub velocity: f64,
    /// Scales how far the initial velocity carries the value.
    pub power: f64,
    pub time_constant: f64,
    /// Done once the remaining distance is at most this.
    pub rest_delta: f64,
}

impl Default for DecayParams {
    fn default() -> Self {
        Self {
            velocity: 0.0,
            power: DEFAULT_POWER,
            time_constant: DEFAULT_TIME_CONSTANT,
            rest_delta: DEFAULT_DECAY_REST_DELTA,
        }
    }
}

/// Exponential decay toward a fixed target.
#[derive(Clone, Debug, PartialEq)]
pub struct Decay {
    amplitude: f64,
    target: f64,
    time_constant: f64,
    rest_delta: f64,
}

impl Decay {
    /// `modify_target` is called once, with the natural resting point, and may return a new one.
    pub fn new(from: f64, params: DecayParams, modify_target: Option<&dyn Fn(f64) -> f64>) -> Self {
        let mut amplitude = params.power * params.velocity;
        let ideal = from + amplitude;
        let target = modify_target.map_or(ideal, |modify| modify(ideal));
        if target != ideal {
            amplitude = target - from;
        }
        Self {
            amplitude,
            target,
            time_constant: params.time_constant,
            rest_delta: params.rest_delta,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn evaluate(&self, t: f64) -> GeneratorState {
        let falloff = (-t / self.time_constant).exp();
        let delta = -self.amplitude * falloff;
        let done = delta.abs() <= self.rest_delta;
        GeneratorState {
            value: Value::Number(if done { self.target } else { self.target + delta }),
            velocity: Some(if done {
                0.0
            } else {
                self.amplitude / self.time_constant * falloff * 1000.0
            }),
            done,
        }
    }
}
