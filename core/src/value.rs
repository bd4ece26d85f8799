//! Animatable values and their decomposition into independent numeric channels.
//!
//! Every [`Value`] is broken down into a flat list of `f64` channels plus a [`Template`] that knows
//! how to put them back together. Numbers are a single channel, colors are four (red, green, blue,
//! alpha), and arbitrary strings contribute one channel per embedded number and four per embedded
//! color. Interpolation only ever touches channels, so numbers, colors and strings share one mixer.

use crate::color::Rgba;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// A value produced or consumed by an animation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A plain number.
    Number(f64),
    /// A color (`#f00`, `rgba(...)`, `hsl(...)`) or any string with numbers in it (`"10px"`,
    /// `"0px 2px #000"`).
    Text(String),
}

impl Value {
    /// Returns the number if this is a [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Returns the string if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(text) => Some(text),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(text) => f.write_str(text),
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $( impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::Number(value as f64)
            }
        }) *
    }
}

impl_from_number! { f32, f64, i8, i16, i32, i64, u8, u16, u32 }

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// The `to` side of an animation: either one target value or an explicit keyframe sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Single(Value),
    Sequence(Vec<Value>),
}

macro_rules! impl_single_target {
    ($($t:ty),*) => {
        $( impl From<$t> for Target {
            fn from(value: $t) -> Self {
                Target::Single(value.into())
            }
        }) *
    }
}

impl_single_target! { Value, f32, f64, i8, i16, i32, i64, u8, u16, u32, &str, String }

impl<T: Into<Value>> From<Vec<T>> for Target {
    fn from(values: Vec<T>) -> Self {
        Target::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Target {
    fn from(values: [T; N]) -> Self {
        Target::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// How a single channel is mixed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channel {
    /// Straight linear interpolation.
    Linear,
    /// A red, green or blue color channel, mixed in squared space so that the midpoint between
    /// two saturated colors does not turn muddy.
    Rgb,
    /// A color's alpha channel; linear.
    Alpha,
}

const COLOR_CHANNELS: [Channel; 4] = [Channel::Rgb, Channel::Rgb, Channel::Rgb, Channel::Alpha];

/// One piece of a decomposed string.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// Text carried through verbatim.
    Literal(String),
    /// One numeric channel.
    Number,
    /// Four color channels.
    Color,
}

/// Rebuilds a [`Value`] from channels.
#[derive(Clone, Debug, PartialEq)]
pub enum Template {
    Number,
    Color,
    Complex(Vec<Segment>),
}

impl Template {
    /// Rebuilds a value. `channels` must have the length this template was decomposed with.
    pub fn compose(&self, channels: &[f64]) -> Value {
        match self {
            Template::Number => Value::Number(channels[0]),
            Template::Color => Value::Text(Rgba::from_channels(channels).to_string()),
            Template::Complex(segments) => {
                let mut text = String::new();
                let mut cursor = 0;
                for segment in segments {
                    match segment {
                        Segment::Literal(literal) => text.push_str(literal),
                        Segment::Number => {
                            text.push_str(&format_number(channels[cursor]));
                            cursor += 1;
                        }
                        Segment::Color => {
                            let color = Rgba::from_channels(&channels[cursor..cursor + 4]);
                            text.push_str(&color.to_string());
                            cursor += 4;
                        }
                    }
                }
                Value::Text(text)
            }
        }
    }
}

/// A value broken down into mixable channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Decomposed {
    pub channels: Vec<f64>,
    pub kinds: Vec<Channel>,
    pub template: Template,
}

lazy_static! {
    static ref COLOR_PATTERN: Regex = Regex::new(
        r"(?i)#(?:[0-9a-f]{8}|[0-9a-f]{6}|[0-9a-f]{3,4})\b|(?:rgb|hsl)a?\([^)]*\)"
    )
    .unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new(r"-?(?:\d*\.\d+|\d+)").unwrap();
}

impl Decomposed {
    /// Splits a value into channels.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Number(n) => Self {
                channels: vec![*n],
                kinds: vec![Channel::Linear],
                template: Template::Number,
            },
            Value::Text(text) => match Rgba::parse(text) {
                Some(color) => Self {
                    channels: color.channels().to_vec(),
                    kinds: COLOR_CHANNELS.to_vec(),
                    template: Template::Color,
                },
                None => decompose_complex(text),
            },
        }
    }
}

fn decompose_complex(text: &str) -> Decomposed {
    let mut decomposed = Decomposed {
        channels: Vec::new(),
        kinds: Vec::new(),
        template: Template::Complex(Vec::new()),
    };
    let mut segments = Vec::new();
    let mut last = 0;
    for found in COLOR_PATTERN.find_iter(text) {
        // Anything matching the pattern but failing to parse stays text and gets scanned for
        // numbers like the rest.
        let Some(color) = Rgba::parse(found.as_str()) else {
            continue;
        };
        push_numbers(&text[last..found.start()], &mut segments, &mut decomposed);
        segments.push(Segment::Color);
        decomposed.channels.extend(color.channels());
        decomposed.kinds.extend(COLOR_CHANNELS);
        last = found.end();
    }
    push_numbers(&text[last..], &mut segments, &mut decomposed);
    decomposed.template = Template::Complex(segments);
    decomposed
}

fn push_numbers(text: &str, segments: &mut Vec<Segment>, decomposed: &mut Decomposed) {
    let mut last = 0;
    for found in NUMBER_PATTERN.find_iter(text) {
        let Ok(number) = found.as_str().parse::<f64>() else {
            continue;
        };
        push_literal(&text[last..found.start()], segments);
        segments.push(Segment::Number);
        decomposed.channels.push(number);
        decomposed.kinds.push(Channel::Linear);
        last = found.end();
    }
    push_literal(&text[last..], segments);
}

fn push_literal(text: &str, segments: &mut Vec<Segment>) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(Segment::Literal(previous)) => previous.push_str(text),
        _ => segments.push(Segment::Literal(text.to_string())),
    }
}

/// Formats a number for display inside a string value, rounded to 5 decimal places.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100_000.0).round() / 100_000.0;
    // Folds -0 into 0.
    format!("{}", rounded + 0.0)
}
