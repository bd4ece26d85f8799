//! The three kinds of motion an animation can follow.

use crate::decay::Decay;
use crate::error::{ConfigError, Result};
use crate::keyframes::Keyframes;
use crate::spring::Spring;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Output of a generator at one point in local time.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorState {
    pub value: Value,
    /// Instantaneous velocity in units per second, for physical generators.
    pub velocity: Option<f64>,
    /// Whether the motion has finished at this time.
    pub done: bool,
}

/// Names a generator, as accepted in configuration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GeneratorKind {
    Keyframes,
    Spring,
    Decay,
}

impl GeneratorKind {
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::Keyframes => "keyframes",
            GeneratorKind::Spring => "spring",
            GeneratorKind::Decay => "decay",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "keyframes" => Ok(GeneratorKind::Keyframes),
            "spring" => Ok(GeneratorKind::Spring),
            "decay" => Ok(GeneratorKind::Decay),
            _ => Err(ConfigError::UnknownType(s.to_string())),
        }
    }
}

/// A pure function of local time: the same `t` always yields the same state.
#[derive(Clone, Debug)]
pub enum Generator {
    Keyframes(Keyframes),
    Spring(Spring),
    Decay(Decay),
}

impl Generator {
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::Keyframes(_) => GeneratorKind::Keyframes,
            Generator::Spring(_) => GeneratorKind::Spring,
            Generator::Decay(_) => GeneratorKind::Decay,
        }
    }

    pub fn evaluate(&self, t: f64) -> GeneratorState {
        match self {
            Generator::Keyframes(keyframes) => keyframes.evaluate(t),
            Generator::Spring(spring) => spring.evaluate(t),
            Generator::Decay(decay) => decay.evaluate(t),
        }
    }

    /// The generator run on mirrored repeat cycles: keyframes reversed, springs released back
    /// toward their origin. Decay has no meaningful reverse and mirrors to itself.
    pub fn mirrored(&self) -> Result<Generator> {
        Ok(match self {
            Generator::Keyframes(keyframes) => Generator::Keyframes(keyframes.mirrored()?),
            Generator::Spring(spring) => Generator::Spring(spring.mirrored()),
            Generator::Decay(decay) => Generator::Decay(decay.clone()),
        })
    }

    /// The duration in milliseconds when it is known up front, `None` when the generator only
    /// learns it by running until done.
    pub fn fixed_duration(&self) -> Option<f64> {
        match self {
            Generator::Keyframes(keyframes) => Some(keyframes.duration()),
            Generator::Spring(spring) => spring.duration(),
            Generator::Decay(_) => None,
        }
    }
}

impl From<Keyframes> for Generator {
    fn from(keyframes: Keyframes) -> Self {
        Generator::Keyframes(keyframes)
    }
}

impl From<Spring> for Generator {
    fn from(spring: Spring) -> Self {
        Generator::Spring(spring)
    }
}

impl From<Decay> for Generator {
    fn from(decay: Decay) -> Self {
        Generator::Decay(decay)
    }
}
