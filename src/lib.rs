pub mod prelude;

pub use impetus_core::{
    animator::{animate, AnimationControls, Playback},
    config::AnimationConfig,
    driver::{Driver, ManualDriver, Subscription, SyncDriver, TickFn},
    easing::{Easing, EasingFunction},
    error::{AnimationError, ConfigError, DriverError, Result},
    generator::{Generator, GeneratorKind, GeneratorState},
    interpolation::{Interpolator, Lerp, Mixer},
    time_scale::{Repeat, RepeatType, TimeScale},
    value::{Target, Value},
};
