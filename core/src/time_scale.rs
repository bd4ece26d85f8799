//! Mapping of real elapsed time onto a generator's local time.

/// Describes the looping behavior of an animation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Repeat {
    /// Animation does not repeat; it plays once and then ends.
    #[default]
    None,
    /// Animation plays once and then repeats the given number of additional times.
    Times(u32),
    /// Animation repeats forever and never completes on its own.
    Infinite,
}

impl Repeat {
    /// Number of additional cycles, as a float so that [`Repeat::Infinite`] is representable.
    pub fn count(&self) -> f64 {
        match self {
            Repeat::None => 0.0,
            Repeat::Times(times) => *times as f64,
            Repeat::Infinite => f64::INFINITY,
        }
    }
}

impl From<u32> for Repeat {
    fn from(times: u32) -> Self {
        match times {
            0 => Repeat::None,
            times => Repeat::Times(times),
        }
    }
}

/// How each repeated cycle relates to the one before it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RepeatType {
    /// Every cycle plays forward from the start.
    #[default]
    Loop,
    /// Odd cycles play the same motion backward in time, easing included.
    Reverse,
    /// Odd cycles play a mirrored motion forward in time: keyframes reversed but eased in the
    /// original order, springs released back toward their origin.
    Mirror,
}

/// Which generator a cycle samples.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Forward,
    Mirrored,
}

/// Where a real time lands on the time scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CyclePosition {
    /// Time to evaluate the generator at, in `0..=duration`.
    pub local_time: f64,
    /// Zero-based index of the cycle containing this time.
    pub cycle: u64,
    pub phase: Phase,
    /// Number of cycle boundaries crossed so far, never more than the repeat count.
    pub boundaries: u64,
    /// Whether the final cycle has played out.
    pub complete: bool,
}

impl CyclePosition {
    fn at_start(local_time: f64) -> Self {
        Self {
            local_time,
            cycle: 0,
            phase: Phase::Forward,
            boundaries: 0,
            complete: false,
        }
    }
}

/// Repeat timing for one animation.
///
/// Each cycle lasts `duration + repeat_delay`; during the delay the cycle holds its end state. The
/// delay only sits between cycles, so the whole animation takes
/// `(duration + repeat_delay) · repeat + duration`.
///
/// A tick exactly on a cycle boundary belongs to the cycle that is ending, so that cycle's final
/// frame is always observed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    duration: f64,
    repeat: Repeat,
    repeat_type: RepeatType,
    repeat_delay: f64,
}

impl TimeScale {
    pub fn new(duration: f64, repeat: Repeat, repeat_type: RepeatType, repeat_delay: f64) -> Self {
        Self {
            duration,
            repeat,
            repeat_type,
            repeat_delay,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn repeat_type(&self) -> RepeatType {
        self.repeat_type
    }

    pub fn cycle_length(&self) -> f64 {
        self.duration + self.repeat_delay
    }

    /// Time at which the last cycle ends, or `None` if the animation repeats forever.
    pub fn total_duration(&self) -> Option<f64> {
        match self.repeat {
            Repeat::Infinite => None,
            repeat => Some(self.cycle_length() * repeat.count() + self.duration),
        }
    }

    /// Locates `real` time (ms since the animation started) on the time scale.
    pub fn position(&self, real: f64) -> CyclePosition {
        if real < 0.0 {
            return CyclePosition::at_start(0.0);
        }
        let cycle_length = self.cycle_length();
        if cycle_length <= 0.0 {
            return CyclePosition {
                local_time: self.duration.max(0.0),
                complete: true,
                ..CyclePosition::at_start(0.0)
            };
        }
        let repeat = self.repeat.count();
        let cycle = ((real / cycle_length).ceil() - 1.0).clamp(0.0, repeat);
        let within = (real - cycle * cycle_length).clamp(0.0, self.duration);
        let odd = cycle % 2.0 == 1.0;
        let (local_time, phase) = match self.repeat_type {
            RepeatType::Reverse if odd => (self.duration - within, Phase::Forward),
            RepeatType::Mirror if odd => (within, Phase::Mirrored),
            _ => (within, Phase::Forward),
        };
        let boundaries = (real / cycle_length).floor().min(repeat);
        CyclePosition {
            local_time,
            cycle: cycle as u64,
            phase,
            boundaries: boundaries as u64,
            complete: self.total_duration().is_some_and(|total| real >= total),
        }
    }

    /// Whether `real` falls inside the final cycle, where a generator finishing means the whole
    /// animation finishes.
    pub fn in_final_cycle(&self, real: f64) -> bool {
        match self.repeat {
            Repeat::Infinite => false,
            repeat => self.position(real).cycle as f64 >= repeat.count(),
        }
    }
}
