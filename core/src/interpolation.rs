//! Interpolation of animatable values.
//!
//! [`Mixer`] blends two values of the same shape; [`Interpolator`] strings mixers together across
//! any number of keyframes, each segment with its own easing.

use crate::easing::{Easing, EasingFunction};
use crate::error::{AnimationError, ConfigError};
use crate::value::{Channel, Decomposed, Segment, Template, Value};
use num_traits::Float;

/// Trait for a type that supports the standard `lerp` (**l**inear int**erp**olation) operation.
///
/// `Lerp` assumes a normalized `x` value, such that _x0_ = 0 and _x1_ = 1, which reduces the
/// equation to:
///
/// `lerp(y0, y1, x) = y0 + x(y1 - y0)`
///
/// `x` is not restricted to `0..=1`; values outside extrapolate along the same line, which is what
/// lets overshooting easings and springs move past their endpoints.
pub trait Lerp {
    /// Computes the linear interpolation between this value (`y0`) and a second (`y1`) value of the
    /// same type, at normalized position `x`.
    ///
    /// # Example
    ///
    /// ```
    /// use impetus_core::interpolation::Lerp;
    ///
    /// let y0: f64 = 5.0;
    /// let y1: f64 = 15.0;
    ///
    /// assert_eq!(y0.lerp(&y1, 0.0), 5.0);
    /// assert_eq!(y0.lerp(&y1, 0.25), 7.5);
    /// assert_eq!(y0.lerp(&y1, 0.5), 10.0);
    /// assert_eq!(y0.lerp(&y1, 1.0), 15.0);
    /// ```
    fn lerp(&self, y1: &Self, x: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, y1: &Self, x: f64) -> Self {
        self * (1.0 - x) + y1 * x
    }
}

impl Lerp for f32 {
    fn lerp(&self, y1: &Self, x: f64) -> Self {
        (*self as f64).lerp(&(*y1 as f64), x) as f32
    }
}

/// Position of `value` between `from` and `to`, where `from` maps to 0 and `to` to 1.
///
/// An empty range counts as already finished.
pub fn progress<T: Float>(from: T, to: T, value: T) -> T {
    let range = to - from;
    if range == T::zero() {
        T::one()
    } else {
        (value - from) / range
    }
}

/// Blends two values that decompose into the same channel layout.
#[derive(Clone, Debug)]
pub struct Mixer {
    from: Vec<f64>,
    to: Vec<f64>,
    kinds: Vec<Channel>,
    template: Template,
}

impl Mixer {
    /// Creates a mixer between `from` and `to`.
    ///
    /// Fails with [`AnimationError::ShapeMismatch`] if the values do not have the same channels in
    /// the same order, e.g. a color and a number, or `"10px"` and `"10px 20px"`. Strings must also
    /// agree on the text around their numbers (`"10px"` and `"20em"` do not mix) unless one side
    /// is bare numbers only.
    pub fn new(from: &Value, to: &Value) -> Result<Self, AnimationError> {
        let start = Decomposed::of(from);
        let end = Decomposed::of(to);
        let mismatch = |reason: String| AnimationError::ShapeMismatch {
            from: from.to_string(),
            to: to.to_string(),
            reason,
        };
        if start.kinds != end.kinds {
            return Err(mismatch(format!(
                "{} channel(s) {:?} vs {} channel(s) {:?}",
                start.kinds.len(),
                start.kinds,
                end.kinds.len(),
                end.kinds
            )));
        }
        if let (Template::Complex(start_segments), Template::Complex(end_segments)) =
            (&start.template, &end.template)
        {
            if start_segments != end_segments
                && has_literals(start_segments)
                && has_literals(end_segments)
            {
                return Err(mismatch(format!(
                    "text {start_segments:?} vs {end_segments:?}"
                )));
            }
        }
        // A bare number can stand in for a single-number string ("0" -> "100px"); the string's
        // template wins so units are not lost.
        let template = match (&start.template, end.template) {
            (Template::Number, Template::Number) => Template::Number,
            (other, Template::Number) => other.clone(),
            (Template::Complex(start_segments), Template::Complex(end_segments))
                if !has_literals(&end_segments) && has_literals(start_segments) =>
            {
                start.template.clone()
            }
            (_, template) => template,
        };
        Ok(Self {
            from: start.channels,
            to: end.channels,
            kinds: end.kinds,
            template,
        })
    }

    /// Value at progress `x`; `x` outside `0..=1` extrapolates.
    pub fn mix(&self, x: f64) -> Value {
        let channels: Vec<f64> = self
            .kinds
            .iter()
            .zip(self.from.iter().zip(&self.to))
            .map(|(kind, (from, to))| match kind {
                Channel::Linear | Channel::Alpha => from.lerp(to, x),
                Channel::Rgb => mix_rgb(*from, *to, x),
            })
            .collect();
        self.template.compose(&channels)
    }
}

fn has_literals(segments: &[Segment]) -> bool {
    segments
        .iter()
        .any(|segment| matches!(segment, Segment::Literal(_)))
}

fn mix_rgb(from: f64, to: f64, x: f64) -> f64 {
    let (from_sq, to_sq) = (from * from, to * to);
    (x * (to_sq - from_sq) + from_sq).max(0.0).sqrt()
}

/// Maps overall progress in `0..=1` onto a sequence of keyframe values.
///
/// Keyframes sit at ascending `offsets` (evenly spaced unless given); progress is located within
/// its segment, eased with that segment's easing, then mixed between the segment's two values.
#[derive(Clone, Debug)]
pub struct Interpolator {
    offsets: Vec<f64>,
    mixers: Vec<Mixer>,
    easings: Vec<Easing>,
    clamp: bool,
}

impl Interpolator {
    /// Creates a linear interpolator over `values` with evenly spaced keyframes.
    pub fn new(values: &[Value]) -> Result<Self, AnimationError> {
        if values.len() < 2 {
            return Err(ConfigError::TooFewKeyframes(values.len()).into());
        }
        let mixers = values
            .windows(2)
            .map(|pair| Mixer::new(&pair[0], &pair[1]))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            offsets: even_offsets(values.len()),
            easings: vec![Easing::Linear; mixers.len()],
            mixers,
            clamp: true,
        })
    }

    /// Uses one easing per segment. Must have exactly one fewer entry than there are values.
    pub fn with_easings(mut self, easings: Vec<Easing>) -> Result<Self, AnimationError> {
        if easings.len() != self.mixers.len() {
            return Err(ConfigError::EasingCount {
                expected: self.mixers.len(),
                actual: easings.len(),
            }
            .into());
        }
        self.easings = easings;
        Ok(self)
    }

    /// Places keyframes at explicit normalized positions, one per value, ascending from 0 to 1.
    pub fn with_offsets(mut self, offsets: Vec<f64>) -> Result<Self, AnimationError> {
        if offsets.len() != self.offsets.len() {
            return Err(ConfigError::OffsetCount {
                expected: self.offsets.len(),
                actual: offsets.len(),
            }
            .into());
        }
        let ascending = offsets.windows(2).all(|pair| pair[0] <= pair[1]);
        let in_range = offsets.iter().all(|offset| (0.0..=1.0).contains(offset));
        if !ascending || !in_range {
            return Err(ConfigError::OffsetsNotAscending.into());
        }
        self.offsets = offsets;
        Ok(self)
    }

    /// Lets progress outside `0..=1` extrapolate the first/last segment instead of clamping.
    pub fn unclamped(mut self) -> Self {
        self.clamp = false;
        self
    }

    /// Value at overall progress `x`.
    pub fn at(&self, x: f64) -> Value {
        let first = self.offsets[0];
        let last = self.offsets[self.offsets.len() - 1];
        let x = if self.clamp { x.clamp(first, last) } else { x };
        let index = self.segment_index(x);
        let local = progress(self.offsets[index], self.offsets[index + 1], x);
        self.mixers[index].mix(self.easings[index].calc(local))
    }

    fn segment_index(&self, x: f64) -> usize {
        let last_segment = self.mixers.len() - 1;
        // Index of the first offset strictly greater than `x`, minus one, is the segment that
        // starts at or before `x`.
        let after = self.offsets.partition_point(|offset| *offset <= x);
        after.saturating_sub(1).min(last_segment)
    }
}

fn even_offsets(count: usize) -> Vec<f64> {
    let segments = (count - 1) as f64;
    (0..count).map(|i| i as f64 / segments).collect()
}
