//! Running animations: generator selection, the per-frame loop and the caller's handle.
//!
//! [`animate`] validates an [`AnimationConfig`], builds its generator once, and subscribes to the
//! configured [`Driver`](crate::driver::Driver). Each tick then maps the driver's timestamp onto
//! the generator's local time through a [`TimeScale`] and reports the resulting value. The run ends
//! either on its own (`on_complete`) or through [`AnimationControls::stop`] (`on_stop`); exactly
//! one of the two fires, and the driver subscription is released before it does.

use crate::config::{AnimationConfig, DoneFn, RepeatFn, UpdateFn};
use crate::decay::Decay;
use crate::driver::Subscription;
use crate::error::{ConfigError, Result};
use crate::generator::{Generator, GeneratorKind, GeneratorState};
use crate::interpolation::Interpolator;
use crate::keyframes::{Keyframes, DEFAULT_DURATION};
use crate::spring::Spring;
use crate::time_scale::{Phase, Repeat, RepeatType, TimeScale};
use crate::value::Value;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Springs over non-numeric values run from 0 to this and are projected back onto the values, so
/// rest thresholds read as percent of the range.
const PROGRESS_SCALE: f64 = 100.0;

/// Lifecycle of a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Playback {
    Running,
    /// Ended on its own; `on_complete` has fired.
    Completed,
    /// Ended by [`AnimationControls::stop`]; `on_stop` has fired.
    Stopped,
}

/// Handle to a running animation. Clones refer to the same run.
#[derive(Clone)]
pub struct AnimationControls {
    run: Rc<Run>,
}

impl AnimationControls {
    /// Stops the run if it is still going: no further ticks are processed and `on_stop` fires.
    /// Has no effect on a run that already ended.
    pub fn stop(&self) {
        self.run.stop();
    }

    pub fn playback(&self) -> Playback {
        self.run.playback.get()
    }

    pub fn is_running(&self) -> bool {
        self.playback() == Playback::Running
    }

    /// Which generator this run selected.
    pub fn kind(&self) -> GeneratorKind {
        self.run.motion.forward.kind()
    }
}

impl fmt::Debug for AnimationControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationControls")
            .field("kind", &self.kind())
            .field("playback", &self.playback())
            .finish()
    }
}

/// Starts an animation.
///
/// All configuration errors are reported here, before the driver is subscribed. If the driver
/// ticks synchronously from inside `subscribe`, callbacks may already have fired by the time this
/// returns.
pub fn animate(config: AnimationConfig) -> Result<AnimationControls> {
    config.validate()?;
    let motion = Motion::new(&config)?;
    let AnimationConfig {
        elapsed,
        repeat,
        repeat_type,
        repeat_delay,
        driver,
        callbacks,
        ..
    } = config;
    let driver = driver.ok_or(ConfigError::MissingDriver)?;
    let resolved = motion
        .forward
        .fixed_duration()
        .map(|duration| TimeScale::new(duration, repeat, repeat_type, repeat_delay));
    debug!(
        kind = %motion.forward.kind(),
        duration = ?resolved.map(|scale| scale.duration()),
        ?repeat,
        ?repeat_type,
        "starting animation"
    );

    let run = Rc::new(Run {
        motion,
        timing: RefCell::new(Timing {
            start: None,
            elapsed,
            resolved,
            boundaries: 0,
        }),
        repeat,
        repeat_type,
        repeat_delay,
        playback: Cell::new(Playback::Running),
        subscription: RefCell::new(None),
        on_update: RefCell::new(callbacks.on_update),
        on_repeat: RefCell::new(callbacks.on_repeat),
        on_complete: RefCell::new(callbacks.on_complete),
        on_stop: RefCell::new(callbacks.on_stop),
    });

    let ticking = run.clone();
    let mut subscription = driver.subscribe(Box::new(move |timestamp| ticking.tick(timestamp)))?;
    if run.playback.get() == Playback::Running {
        *run.subscription.borrow_mut() = Some(subscription);
    } else {
        // Already finished during a synchronous first tick.
        subscription.stop();
    }
    Ok(AnimationControls { run })
}

/// The generators of one run, built once at start.
struct Motion {
    forward: Generator,
    /// Generator for odd cycles of a mirrored repeat.
    mirrored: Option<Generator>,
    /// Maps a 0..PROGRESS_SCALE generator output back onto non-numeric endpoints.
    projection: Option<Interpolator>,
}

impl Motion {
    fn new(config: &AnimationConfig) -> Result<Self> {
        let (forward, projection) = match config.resolve_kind() {
            GeneratorKind::Keyframes => (Self::keyframes(config)?, None),
            GeneratorKind::Spring => Self::spring(config)?,
            GeneratorKind::Decay => (Self::decay(config)?, None),
        };
        let mirrored = match config.repeat_type {
            RepeatType::Mirror if config.repeat != Repeat::None => Some(forward.mirrored()?),
            _ => None,
        };
        Ok(Self {
            forward,
            mirrored,
            projection,
        })
    }

    fn keyframes(config: &AnimationConfig) -> Result<Generator> {
        let values = config.keyframe_values();
        if values.len() < 2 {
            return Err(ConfigError::TooFewKeyframes(values.len()).into());
        }
        let duration = config.duration.unwrap_or(DEFAULT_DURATION);
        let mut keyframes = Keyframes::new(values, duration)?;
        if let Some(ease) = &config.ease {
            keyframes = keyframes.with_easing(ease.clone())?;
        }
        if let Some(offsets) = &config.offsets {
            keyframes = keyframes.with_offsets(offsets.clone())?;
        }
        Ok(keyframes.into())
    }

    fn spring(config: &AnimationConfig) -> Result<(Generator, Option<Interpolator>)> {
        let (from, to) = (config.from_value(), config.single_target());
        match (&from, &to) {
            (Value::Number(from), Value::Number(to)) => {
                let params = config.spring_params(to - from);
                Ok((Spring::new(*from, *to, params).into(), None))
            }
            _ => {
                let projection = Interpolator::new(&[from, to])?.unclamped();
                let params = config.spring_params(PROGRESS_SCALE);
                let spring = Spring::new(0.0, PROGRESS_SCALE, params);
                Ok((spring.into(), Some(projection)))
            }
        }
    }

    fn decay(config: &AnimationConfig) -> Result<Generator> {
        let from = config
            .from_value()
            .as_number()
            .ok_or(ConfigError::NonNumericDecay)?;
        let decay = Decay::new(from, config.decay_params(), config.modify_target.as_deref());
        Ok(decay.into())
    }

    fn sample(&self, phase: Phase, local_time: f64) -> GeneratorState {
        let generator = match (phase, &self.mirrored) {
            (Phase::Mirrored, Some(mirrored)) => mirrored,
            _ => &self.forward,
        };
        let mut state = generator.evaluate(local_time);
        if let Some(projection) = &self.projection {
            let progress = state.value.as_number().unwrap_or(0.0) / PROGRESS_SCALE;
            state.value = projection.at(progress);
        }
        state
    }
}

struct Timing {
    /// Driver timestamp of the first tick.
    start: Option<f64>,
    elapsed: f64,
    /// Known from the start for keyframes; for physical generators, set once the first cycle
    /// comes to rest.
    resolved: Option<TimeScale>,
    /// Cycle boundaries already reported through `on_repeat`.
    boundaries: u64,
}

struct Frame {
    real: f64,
    local: f64,
    state: GeneratorState,
    boundaries: u64,
    complete: bool,
}

struct Run {
    motion: Motion,
    timing: RefCell<Timing>,
    repeat: Repeat,
    repeat_type: RepeatType,
    repeat_delay: f64,
    playback: Cell<Playback>,
    subscription: RefCell<Option<Box<dyn Subscription>>>,
    on_update: RefCell<Option<UpdateFn>>,
    on_repeat: RefCell<Option<RepeatFn>>,
    on_complete: RefCell<Option<DoneFn>>,
    on_stop: RefCell<Option<DoneFn>>,
}

impl Run {
    fn tick(&self, timestamp: f64) {
        if self.playback.get() != Playback::Running {
            return;
        }
        let (frame, previous_boundaries) = {
            let mut timing = self.timing.borrow_mut();
            let start = *timing.start.get_or_insert(timestamp);
            let real = timestamp - start + timing.elapsed;
            let frame = self.frame(&mut timing, real);
            let previous = std::mem::replace(&mut timing.boundaries, frame.boundaries);
            (frame, previous)
        };
        trace!(
            real = frame.real,
            local = frame.local,
            done = frame.state.done,
            "animation tick"
        );

        if let Some(on_update) = self.on_update.borrow_mut().as_mut() {
            on_update(frame.state.value);
        }
        for boundary in previous_boundaries..frame.boundaries {
            if self.playback.get() != Playback::Running {
                return;
            }
            debug!(cycle = boundary + 1, "animation repeating");
            if let Some(on_repeat) = self.on_repeat.borrow_mut().as_mut() {
                on_repeat();
            }
        }
        if frame.complete && self.playback.get() == Playback::Running {
            self.finish();
        }
    }

    fn frame(&self, timing: &mut Timing, real: f64) -> Frame {
        if let Some(scale) = timing.resolved {
            let position = scale.position(real);
            let state = self.motion.sample(position.phase, position.local_time);
            // Physical generators may also come to rest in the final cycle, unless that cycle
            // runs backward and "done" marks its start.
            let reversed = self.repeat_type == RepeatType::Reverse && position.cycle % 2 == 1;
            let rested = self.motion.forward.fixed_duration().is_none()
                && state.done
                && !reversed
                && scale.in_final_cycle(real);
            return Frame {
                real,
                local: position.local_time,
                state,
                boundaries: position.boundaries,
                complete: position.complete || rested,
            };
        }

        let local = real.max(0.0);
        let state = self.motion.sample(Phase::Forward, local);
        if !state.done || real < 0.0 {
            return Frame {
                real,
                local,
                state,
                boundaries: 0,
                complete: false,
            };
        }
        let scale = TimeScale::new(real, self.repeat, self.repeat_type, self.repeat_delay);
        debug!(duration = real, "resolved animation cycle duration");
        timing.resolved = Some(scale);
        let position = scale.position(real);
        Frame {
            real,
            local,
            state,
            boundaries: position.boundaries,
            complete: position.complete,
        }
    }

    fn release(&self) {
        if let Some(mut subscription) = self.subscription.borrow_mut().take() {
            subscription.stop();
        }
    }

    fn finish(&self) {
        self.playback.set(Playback::Completed);
        self.release();
        debug!("animation complete");
        if let Some(on_complete) = self.on_complete.borrow_mut().take() {
            on_complete();
        }
    }

    fn stop(&self) {
        if self.playback.get() != Playback::Running {
            return;
        }
        self.playback.set(Playback::Stopped);
        self.release();
        debug!("animation stopped");
        if let Some(on_stop) = self.on_stop.borrow_mut().take() {
            on_stop();
        }
    }
}
