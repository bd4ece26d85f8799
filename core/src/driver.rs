//! Frame sources that advance animations.
//!
//! A [`Driver`] invokes a tick callback with a monotonically non-decreasing timestamp (ms) once
//! per frame until the returned [`Subscription`] is stopped. Animations never read a clock
//! themselves, so the same animation can be driven by a display's refresh loop, a game loop, or a
//! deterministic test harness.

use crate::error::DriverError;
use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::mem;
use std::rc::Rc;
use tracing::trace;

/// Per-frame callback, receiving the current timestamp in milliseconds.
pub type TickFn = Box<dyn FnMut(f64)>;

/// A source of frame ticks.
pub trait Driver {
    /// Starts invoking `tick` once per frame.
    ///
    /// Implementations may invoke `tick` synchronously before returning.
    fn subscribe(&self, tick: TickFn) -> Result<Box<dyn Subscription>, DriverError>;
}

/// Handle to an active stream of ticks.
pub trait Subscription {
    /// Stops the stream. No tick is delivered after this returns. Stopping twice is harmless.
    fn stop(&mut self);
}

struct Subscriber {
    tick: TickFn,
    active: Rc<Cell<bool>>,
}

/// Subscription that flips a shared flag checked before every tick.
#[derive(Debug)]
struct FlagSubscription(Rc<Cell<bool>>);

impl Subscription for FlagSubscription {
    fn stop(&mut self) {
        self.0.set(false);
    }
}

/// A driver ticked by hand.
///
/// Clones share the same subscriber list, so one clone can be handed to
/// [`animate`](crate::animator::animate) and another kept to call [`ManualDriver::tick`].
#[derive(Clone, Default)]
pub struct ManualDriver {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl Debug for ManualDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualDriver")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers one frame at `timestamp` to every active subscriber.
    ///
    /// Subscribers may stop themselves or subscribe new callbacks from inside their tick; new
    /// subscribers first receive the following frame.
    pub fn tick(&self, timestamp: f64) {
        let mut current = mem::take(&mut *self.subscribers.borrow_mut());
        trace!(timestamp, subscribers = current.len(), "manual driver tick");
        for subscriber in current.iter_mut() {
            if subscriber.active.get() {
                (subscriber.tick)(timestamp);
            }
        }
        current.retain(|subscriber| subscriber.active.get());
        let mut subscribers = self.subscribers.borrow_mut();
        let added = mem::replace(&mut *subscribers, current);
        subscribers.extend(added.into_iter().filter(|s| s.active.get()));
    }

    /// Whether any subscriber would receive the next tick.
    pub fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|subscriber| subscriber.active.get())
            .count()
    }
}

impl Driver for ManualDriver {
    fn subscribe(&self, tick: TickFn) -> Result<Box<dyn Subscription>, DriverError> {
        let active = Rc::new(Cell::new(true));
        self.subscribers.borrow_mut().push(Subscriber {
            tick,
            active: active.clone(),
        });
        Ok(Box::new(FlagSubscription(active)))
    }
}

/// Default frame interval, approximating a 60 Hz display.
pub const DEFAULT_FRAME_INTERVAL: f64 = 1000.0 / 60.0;

/// Upper bound on frames [`SyncDriver::run`] delivers, so an infinitely repeating animation
/// cannot hang the caller.
pub const DEFAULT_MAX_FRAMES: usize = 100_000;

/// Runs animations to completion synchronously, with evenly spaced timestamps starting at 0.
///
/// Useful for tests and for precomputing values offline.
#[derive(Clone, Debug)]
pub struct SyncDriver {
    interval: f64,
    max_frames: usize,
    inner: ManualDriver,
}

impl Default for SyncDriver {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

impl SyncDriver {
    /// Creates a driver advancing `interval` ms per frame.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            max_frames: DEFAULT_MAX_FRAMES,
            inner: ManualDriver::new(),
        }
    }

    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Ticks at `0, interval, 2·interval, ...` until nothing is subscribed or the frame limit is
    /// reached. Returns the number of frames delivered.
    pub fn run(&self) -> usize {
        let mut frame = 0;
        while self.inner.has_subscribers() && frame < self.max_frames {
            self.inner.tick(frame as f64 * self.interval);
            frame += 1;
        }
        frame
    }
}

impl Driver for SyncDriver {
    fn subscribe(&self, tick: TickFn) -> Result<Box<dyn Subscription>, DriverError> {
        self.inner.subscribe(tick)
    }
}
