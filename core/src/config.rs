//! Declarative description of one animation run.

use crate::animator::{animate, AnimationControls};
use crate::decay::{DecayParams, DEFAULT_DECAY_REST_DELTA, DEFAULT_POWER, DEFAULT_TIME_CONSTANT};
use crate::driver::Driver;
use crate::easing::Easing;
use crate::error::{ConfigError, Result};
use crate::generator::GeneratorKind;
use crate::keyframes::KeyframeEasing;
use crate::spring::{
    SpringParams, DEFAULT_BOUNCE, DEFAULT_DAMPING, DEFAULT_MASS, DEFAULT_REST_SPEED,
    DEFAULT_SPRING_DURATION, DEFAULT_STIFFNESS,
};
use crate::time_scale::{Repeat, RepeatType};
use crate::value::{Target, Value};
use std::fmt;
use std::rc::Rc;

/// Receives every frame's value.
pub type UpdateFn = Box<dyn FnMut(Value)>;
/// Called each time a repeat cycle begins.
pub type RepeatFn = Box<dyn FnMut()>;
/// Called once when the run ends.
pub type DoneFn = Box<dyn FnOnce()>;
/// Maps a decay's natural resting point to the one it should actually stop at.
pub type ModifyTargetFn = Rc<dyn Fn(f64) -> f64>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct SpringOptions {
    pub stiffness: Option<f64>,
    pub damping: Option<f64>,
    pub mass: Option<f64>,
    pub rest_speed: Option<f64>,
    pub rest_delta: Option<f64>,
    pub bounce: Option<f64>,
}

#[derive(Default)]
pub(crate) struct Callbacks {
    pub on_update: Option<UpdateFn>,
    pub on_repeat: Option<RepeatFn>,
    pub on_complete: Option<DoneFn>,
    pub on_stop: Option<DoneFn>,
}

/// Configuration for [`animate`], built fluently.
///
/// ```
/// use impetus_core::config::AnimationConfig;
/// use impetus_core::driver::SyncDriver;
/// use impetus_core::easing::Easing;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let driver = SyncDriver::new(20.0);
/// let output = Rc::new(RefCell::new(Vec::new()));
/// let sink = output.clone();
/// AnimationConfig::new()
///     .to(100)
///     .duration(100.0)
///     .ease(Easing::Linear)
///     .driver(driver.clone())
///     .on_update(move |v| sink.borrow_mut().push(v.as_number().unwrap()))
///     .start()
///     .unwrap();
/// driver.run();
/// assert_eq!(*output.borrow(), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
/// ```
#[derive(Default)]
pub struct AnimationConfig {
    pub(crate) from: Option<Value>,
    pub(crate) to: Option<Target>,
    pub(crate) kind: Option<GeneratorKind>,
    pub(crate) duration: Option<f64>,
    pub(crate) elapsed: f64,
    pub(crate) ease: Option<KeyframeEasing>,
    pub(crate) offsets: Option<Vec<f64>>,
    pub(crate) repeat: Repeat,
    pub(crate) repeat_type: RepeatType,
    pub(crate) repeat_delay: f64,
    pub(crate) velocity: Option<f64>,
    pub(crate) spring: SpringOptions,
    pub(crate) power: Option<f64>,
    pub(crate) time_constant: Option<f64>,
    pub(crate) modify_target: Option<ModifyTargetFn>,
    pub(crate) driver: Option<Box<dyn Driver>>,
    pub(crate) callbacks: Callbacks,
}

impl fmt::Debug for AnimationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationConfig")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("kind", &self.kind)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("ease", &self.ease)
            .field("offsets", &self.offsets)
            .field("repeat", &self.repeat)
            .field("repeat_type", &self.repeat_type)
            .field("repeat_delay", &self.repeat_delay)
            .field("velocity", &self.velocity)
            .field("spring", &self.spring)
            .field("power", &self.power)
            .field("time_constant", &self.time_constant)
            .field("has_driver", &self.driver.is_some())
            .finish_non_exhaustive()
    }
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting value. Defaults to `0`.
    pub fn from(mut self, from: impl Into<Value>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Target value, or a keyframe sequence. Defaults to `1`.
    pub fn to(mut self, to: impl Into<Target>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Forces a generator instead of inferring one from the other options.
    pub fn kind(mut self, kind: GeneratorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Length of one cycle in milliseconds, for keyframes and duration-based springs.
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Time already elapsed when the run starts, in milliseconds. A negative value delays the start,
    /// holding the initial value in the meantime.
    pub fn elapsed(mut self, elapsed: f64) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Easing for every keyframe segment.
    pub fn ease(mut self, easing: Easing) -> Self {
        self.ease = Some(KeyframeEasing::All(easing));
        self
    }

    /// One easing per keyframe segment.
    pub fn eases(mut self, easings: Vec<Easing>) -> Self {
        self.ease = Some(KeyframeEasing::Each(easings));
        self
    }

    /// Normalized position of each keyframe, ascending within `0..=1`.
    pub fn offsets(mut self, offsets: Vec<f64>) -> Self {
        self.offsets = Some(offsets);
        self
    }

    /// Number of additional cycles after the first.
    pub fn repeat(mut self, repeat: impl Into<Repeat>) -> Self {
        self.repeat = repeat.into();
        self
    }

    pub fn repeat_type(mut self, repeat_type: RepeatType) -> Self {
        self.repeat_type = repeat_type;
        self
    }

    /// Pause between cycles, in milliseconds, during which the cycle's end value is held.
    pub fn repeat_delay(mut self, repeat_delay: f64) -> Self {
        self.repeat_delay = repeat_delay;
        self
    }

    pub fn stiffness(mut self, stiffness: f64) -> Self {
        self.spring.stiffness = Some(stiffness);
        self
    }

    pub fn damping(mut self, damping: f64) -> Self {
        self.spring.damping = Some(damping);
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.spring.mass = Some(mass);
        self
    }

    /// Initial velocity in units per second, for springs and decay.
    pub fn velocity(mut self, velocity: f64) -> Self {
        self.velocity = Some(velocity);
        self
    }

    pub fn rest_speed(mut self, rest_speed: f64) -> Self {
        self.spring.rest_speed = Some(rest_speed);
        self
    }

    /// Distance from the target within which a spring or decay may come to rest.
    pub fn rest_delta(mut self, rest_delta: f64) -> Self {
        self.spring.rest_delta = Some(rest_delta);
        self
    }

    /// Bounciness of a duration-based spring, from `0` (none) toward `1`.
    pub fn bounce(mut self, bounce: f64) -> Self {
        self.spring.bounce = Some(bounce);
        self
    }

    pub fn power(mut self, power: f64) -> Self {
        self.power = Some(power);
        self
    }

    pub fn time_constant(mut self, time_constant: f64) -> Self {
        self.time_constant = Some(time_constant);
        self
    }

    pub fn modify_target(mut self, modify_target: impl Fn(f64) -> f64 + 'static) -> Self {
        self.modify_target = Some(Rc::new(modify_target));
        self
    }

    pub fn driver(mut self, driver: impl Driver + 'static) -> Self {
        self.driver = Some(Box::new(driver));
        self
    }

    pub fn on_update(mut self, on_update: impl FnMut(Value) + 'static) -> Self {
        self.callbacks.on_update = Some(Box::new(on_update));
        self
    }

    pub fn on_repeat(mut self, on_repeat: impl FnMut() + 'static) -> Self {
        self.callbacks.on_repeat = Some(Box::new(on_repeat));
        self
    }

    pub fn on_complete(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.callbacks.on_complete = Some(Box::new(on_complete));
        self
    }

    pub fn on_stop(mut self, on_stop: impl FnOnce() + 'static) -> Self {
        self.callbacks.on_stop = Some(Box::new(on_stop));
        self
    }

    /// Starts the animation; shorthand for [`animate`].
    pub fn start(self) -> Result<AnimationControls> {
        animate(self)
    }

    pub(crate) fn from_value(&self) -> Value {
        self.from.clone().unwrap_or(Value::Number(0.0))
    }

    /// Checks every numeric option and the presence of a driver.
    pub(crate) fn validate(&self) -> std::result::Result<(), ConfigError> {
        type Check = std::result::Result<(), ConfigError>;

        fn non_negative(name: &'static str, value: Option<f64>) -> Check {
            match value {
                Some(value) if !value.is_finite() || value < 0.0 => {
                    Err(ConfigError::InvalidParameter { name, value })
                }
                _ => Ok(()),
            }
        }
        fn positive(name: &'static str, value: Option<f64>) -> Check {
            match value {
                Some(value) if !value.is_finite() || value <= 0.0 => {
                    Err(ConfigError::InvalidParameter { name, value })
                }
                _ => Ok(()),
            }
        }
        fn finite(name: &'static str, value: Option<f64>) -> Check {
            match value {
                Some(value) if !value.is_finite() => {
                    Err(ConfigError::InvalidParameter { name, value })
                }
                _ => Ok(()),
            }
        }

        non_negative("duration", self.duration)?;
        non_negative("repeat_delay", Some(self.repeat_delay))?;
        finite("elapsed", Some(self.elapsed))?;
        finite("velocity", self.velocity)?;
        positive("stiffness", self.spring.stiffness)?;
        // An undamped spring oscillates forever and never comes to rest.
        positive("damping", self.spring.damping)?;
        positive("mass", self.spring.mass)?;
        non_negative("rest_speed", self.spring.rest_speed)?;
        non_negative("rest_delta", self.spring.rest_delta)?;
        finite("bounce", self.spring.bounce)?;
        finite("power", self.power)?;
        positive("time_constant", self.time_constant)?;
        if self.driver.is_none() {
            return Err(ConfigError::MissingDriver);
        }
        Ok(())
    }

    /// Picks the generator. A keyframe sequence always animates as keyframes, then an explicit
    /// kind wins. Otherwise physical constants imply a spring, an easing or duration implies
    /// keyframes, and rest thresholds alone imply a spring. Everything else is keyframes.
    pub(crate) fn resolve_kind(&self) -> GeneratorKind {
        if matches!(self.to, Some(Target::Sequence(_))) {
            return GeneratorKind::Keyframes;
        }
        if let Some(kind) = self.kind {
            return kind;
        }
        let spring = &self.spring;
        let physical = spring.stiffness.is_some()
            || spring.damping.is_some()
            || spring.mass.is_some()
            || spring.bounce.is_some();
        if physical {
            GeneratorKind::Spring
        } else if self.ease.is_some() || self.duration.is_some() {
            GeneratorKind::Keyframes
        } else if spring.rest_speed.is_some() || spring.rest_delta.is_some() {
            GeneratorKind::Spring
        } else {
            GeneratorKind::Keyframes
        }
    }

    /// Every keyframe of a keyframes run, with `from` prepended when it differs from the first
    /// element of an explicit sequence.
    pub(crate) fn keyframe_values(&self) -> Vec<Value> {
        match &self.to {
            Some(Target::Sequence(values)) => match &self.from {
                Some(from) if values.first() != Some(from) => {
                    let mut keyframes = Vec::with_capacity(values.len() + 1);
                    keyframes.push(from.clone());
                    keyframes.extend(values.iter().cloned());
                    keyframes
                }
                _ => values.clone(),
            },
            Some(Target::Single(to)) => vec![self.from_value(), to.clone()],
            None => vec![self.from_value(), Value::Number(1.0)],
        }
    }

    /// Target of a spring or decay run. Only meaningful when `to` is not a sequence.
    pub(crate) fn single_target(&self) -> Value {
        match &self.to {
            Some(Target::Single(to)) => to.clone(),
            _ => Value::Number(1.0),
        }
    }

    /// Spring parameters for travelling `distance`. Without explicit physical parameters, a given
    /// duration or bounce derives them instead.
    pub(crate) fn spring_params(&self, distance: f64) -> SpringParams {
        let spring = &self.spring;
        let velocity = self.velocity.unwrap_or(0.0);
        let physical =
            spring.stiffness.is_some() || spring.damping.is_some() || spring.mass.is_some();
        let mut params = if !physical && (self.duration.is_some() || spring.bounce.is_some()) {
            // The solver works with velocity relative to the distance travelled.
            let relative = if distance != 0.0 { velocity / distance.abs() } else { 0.0 };
            SpringParams::from_duration(
                self.duration.unwrap_or(DEFAULT_SPRING_DURATION),
                spring.bounce.unwrap_or(DEFAULT_BOUNCE),
                relative,
            )
        } else {
            SpringParams {
                stiffness: spring.stiffness.unwrap_or(DEFAULT_STIFFNESS),
                damping: spring.damping.unwrap_or(DEFAULT_DAMPING),
                mass: spring.mass.unwrap_or(DEFAULT_MASS),
                velocity,
                ..SpringParams::default()
            }
        };
        params.rest_speed = spring.rest_speed.unwrap_or(DEFAULT_REST_SPEED);
        params.rest_delta = spring.rest_delta;
        params
    }

    pub(crate) fn decay_params(&self) -> DecayParams {
        DecayParams {
            velocity: self.velocity.unwrap_or(0.0),
            power: self.power.unwrap_or(DEFAULT_POWER),
            time_constant: self.time_constant.unwrap_or(DEFAULT_TIME_CONSTANT),
            rest_delta: self.spring.rest_delta.unwrap_or(DEFAULT_DECAY_REST_DELTA),
        }
    }
}
