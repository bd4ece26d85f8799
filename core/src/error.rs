//! Error types for animation setup and driving.

use thiserror::Error;

/// Errors that abort an animation before any frame is produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnimationError {
    /// The configuration was malformed.
    #[error("invalid animation configuration: {0}")]
    Config(#[from] ConfigError),

    /// Two values could not be decomposed into the same set of channels.
    #[error("cannot interpolate between {from:?} and {to:?}: {reason}")]
    ShapeMismatch {
        from: String,
        to: String,
        reason: String,
    },

    /// The driver refused the subscription.
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Malformed animation input, reported synchronously by [`animate`](crate::animator::animate).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A keyframe sequence needs at least two values.
    #[error("keyframe animations need at least 2 values, got {0}")]
    TooFewKeyframes(usize),

    /// An animation type name that is not `keyframes`, `spring` or `decay`.
    #[error("unrecognized animation type {0:?}")]
    UnknownType(String),

    /// Decay only integrates plain numbers.
    #[error("decay animations require a numeric start value")]
    NonNumericDecay,

    /// An easing list must name one easing per keyframe segment.
    #[error("expected {expected} easing functions (one per segment), got {actual}")]
    EasingCount { expected: usize, actual: usize },

    /// Explicit offsets must name one position per keyframe.
    #[error("expected {expected} keyframe offsets, got {actual}")]
    OffsetCount { expected: usize, actual: usize },

    /// Offsets must ascend within `0..=1`.
    #[error("keyframe offsets must ascend from 0 to 1")]
    OffsetsNotAscending,

    /// A numeric parameter outside its legal range.
    #[error("invalid value {value} for {name}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// No driver was supplied, so nothing could advance the animation.
    #[error("an animation driver is required")]
    MissingDriver,
}

/// Failure reported by a [`Driver`](crate::driver::Driver) when subscribing.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("driver failed to subscribe: {0}")]
pub struct DriverError(pub String);

/// Result type for animation operations.
pub type Result<T> = std::result::Result<T, AnimationError>;
