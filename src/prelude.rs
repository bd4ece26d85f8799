//! Includes the types commonly used for building animations.

pub use crate::{
    animate, AnimationConfig, AnimationControls, Driver, Easing, GeneratorKind, ManualDriver,
    Playback, Repeat, RepeatType, SyncDriver, Value,
};
