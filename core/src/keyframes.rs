//! Duration-based interpolation through a list of keyframes.

use crate::easing::Easing;
use crate::error::Result;
use crate::generator::GeneratorState;
use crate::interpolation::Interpolator;
use crate::value::Value;

/// Default length of a keyframes run, in milliseconds.
pub const DEFAULT_DURATION: f64 = 300.0;

/// Easing applied to every segment unless the caller picks one.
pub const DEFAULT_EASING: Easing = Easing::InOut;

/// Easing for a keyframes run.
#[derive(Clone, Debug)]
pub enum KeyframeEasing {
    /// The same easing for every segment.
    All(Easing),
    /// One easing per segment, in order.
    Each(Vec<Easing>),
}

impl From<Easing> for KeyframeEasing {
    fn from(easing: Easing) -> Self {
        KeyframeEasing::All(easing)
    }
}

impl From<Vec<Easing>> for KeyframeEasing {
    fn from(easings: Vec<Easing>) -> Self {
        KeyframeEasing::Each(easings)
    }
}

/// Interpolates across `values` over a fixed duration.
///
/// Progress is `t / duration`, clamped to `0..=1`, and the run is done once `t >= duration`.
#[derive(Clone, Debug)]
pub struct Keyframes {
    values: Vec<Value>,
    easings: Vec<Easing>,
    offsets: Option<Vec<f64>>,
    duration: f64,
    interpolator: Interpolator,
}

impl Keyframes {
    /// Creates a keyframes generator with evenly spaced keyframes and the default easing.
    pub fn new(values: Vec<Value>, duration: f64) -> Result<Self> {
        let interpolator = Interpolator::new(&values)?;
        let easings = vec![DEFAULT_EASING; values.len() - 1];
        let interpolator = interpolator.with_easings(easings.clone())?;
        Ok(Self {
            values,
            easings,
            offsets: None,
            duration,
            interpolator,
        })
    }

    pub fn with_easing(mut self, easing: KeyframeEasing) -> Result<Self> {
        self.easings = match easing {
            KeyframeEasing::All(easing) => vec![easing; self.values.len() - 1],
            KeyframeEasing::Each(easings) => easings,
        };
        self.rebuild()
    }

    /// Places keyframes at explicit normalized times instead of spacing them evenly.
    pub fn with_offsets(mut self, offsets: Vec<f64>) -> Result<Self> {
        self.offsets = Some(offsets);
        self.rebuild()
    }

    fn rebuild(mut self) -> Result<Self> {
        let mut interpolator =
            Interpolator::new(&self.values)?.with_easings(self.easings.clone())?;
        if let Some(offsets) = &self.offsets {
            interpolator = interpolator.with_offsets(offsets.clone())?;
        }
        self.interpolator = interpolator;
        Ok(self)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn evaluate(&self, t: f64) -> GeneratorState {
        let progress = if self.duration > 0.0 {
            (t / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        GeneratorState {
            value: self.interpolator.at(progress),
            velocity: None,
            done: t >= self.duration,
        }
    }

    /// The same run with the keyframe order reversed. Easings and offsets keep their positions.
    pub fn mirrored(&self) -> Result<Self> {
        let mut mirrored = self.clone();
        mirrored.values.reverse();
        mirrored.rebuild()
    }
}
