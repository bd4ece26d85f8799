//! Parsing and serialization of CSS-style colors.
//!
//! Every accepted notation is normalized to [`Rgba`] so that colors written in different notations
//! can still be interpolated against each other. Output is always `rgba(r, g, b, a)`.

use crate::value::format_number;
use std::fmt;

/// A color with red, green and blue channels in `0..=255` and alpha in `0..=1`.
///
/// Channels are stored unrounded while animating; rounding and clamping happen on display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()` or `hsla()`.
    ///
    /// Returns `None` for anything else, including malformed functional notation.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = text.to_ascii_lowercase();
        let (name, args) = lower.strip_suffix(')')?.split_once('(')?;
        let args = split_args(args)?;
        match name.trim() {
            "rgb" | "rgba" => parse_rgb_args(&args),
            "hsl" | "hsla" => parse_hsl_args(&args),
            _ => None,
        }
    }

    /// The channels in interpolation order: red, green, blue, alpha.
    pub fn channels(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn from_channels(channels: &[f64]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `+ 0.0` folds negative zero so it never renders as "-0".
        let unit = |v: f64| v.clamp(0.0, 255.0).round() + 0.0;
        write!(
            f,
            "rgba({}, {}, {}, {})",
            unit(self.red),
            unit(self.green),
            unit(self.blue),
            format_number(self.alpha.clamp(0.0, 1.0))
        )
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b, a) = match hex.len() {
        3 => (digit(0)?, digit(1)?, digit(2)?, 255),
        4 => (digit(0)?, digit(1)?, digit(2)?, digit(3)?),
        6 => (pair(0)?, pair(2)?, pair(4)?, 255),
        8 => (pair(0)?, pair(2)?, pair(4)?, pair(6)?),
        _ => return None,
    };
    Some(Rgba::new(
        r as f64,
        g as f64,
        b as f64,
        a as f64 / 255.0,
    ))
}

// Accepts both the legacy comma syntax and the space/slash syntax.
fn split_args(args: &str) -> Option<Vec<&str>> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    matches!(parts.len(), 3 | 4).then_some(parts)
}

fn parse_component(text: &str, percent_scale: f64) -> Option<f64> {
    match text.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok().map(|v| v / 100.0 * percent_scale),
        None => text.parse::<f64>().ok(),
    }
}

fn parse_alpha(args: &[&str]) -> Option<f64> {
    match args.get(3) {
        Some(alpha) => parse_component(alpha, 1.0),
        None => Some(1.0),
    }
}

fn parse_rgb_args(args: &[&str]) -> Option<Rgba> {
    Some(Rgba::new(
        parse_component(args[0], 255.0)?,
        parse_component(args[1], 255.0)?,
        parse_component(args[2], 255.0)?,
        parse_alpha(args)?,
    ))
}

fn parse_hsl_args(args: &[&str]) -> Option<Rgba> {
    let hue = args[0].trim_end_matches("deg").parse::<f64>().ok()?;
    let saturation = parse_component(args[1], 1.0)?;
    let lightness = parse_component(args[2], 1.0)?;
    let [red, green, blue] = hsl_to_rgb(hue, saturation, lightness);
    Some(Rgba::new(red, green, blue, parse_alpha(args)?))
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [f64; 3] {
    let hue = hue.rem_euclid(360.0) / 360.0;
    if saturation == 0.0 {
        let gray = lightness * 255.0;
        return [gray, gray, gray];
    }
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    let channel = |offset: f64| {
        let mut t = hue + offset;
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        v * 255.0
    };
    [channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_hex_notations() {
        assert_eq!(Rgba::parse("#f00"), Some(Rgba::new(255.0, 0.0, 0.0, 1.0)));
        assert_eq!(Rgba::parse("#00ff00"), Some(Rgba::new(0.0, 255.0, 0.0, 1.0)));
        assert_eq!(Rgba::parse("#0000ff00"), Some(Rgba::new(0.0, 0.0, 255.0, 0.0)));
        let short_alpha = Rgba::parse("#fff8").unwrap();
        assert_relative_eq!(short_alpha.alpha, 136.0 / 255.0);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(Rgba::parse("#12345"), None);
        assert_eq!(Rgba::parse("#ggg"), None);
        assert_eq!(Rgba::parse("rgb(1, 2)"), None);
        assert_eq!(Rgba::parse("cmyk(1, 2, 3, 4)"), None);
        assert_eq!(Rgba::parse("10px"), None);
    }

    #[test]
    fn parses_functional_notations() {
        assert_eq!(
            Rgba::parse("rgba(10, 20, 30, 0.5)"),
            Some(Rgba::new(10.0, 20.0, 30.0, 0.5))
        );
        assert_eq!(
            Rgba::parse("rgb(100% 0% 0% / 50%)"),
            Some(Rgba::new(255.0, 0.0, 0.0, 0.5))
        );
        let blue = Rgba::parse("hsl(240, 100%, 50%)").unwrap();
        assert_relative_eq!(blue.red, 0.0);
        assert_relative_eq!(blue.green, 0.0);
        assert_relative_eq!(blue.blue, 255.0);
        assert_eq!(blue.alpha, 1.0);
    }

    #[test]
    fn displays_rounded_and_clamped() {
        assert_eq!(
            Rgba::new(300.0, -4.0, 127.6, 1.0).to_string(),
            "rgba(255, 0, 128, 1)"
        );
        assert_eq!(
            Rgba::new(0.0, 0.0, 0.0, 0.333333333).to_string(),
            "rgba(0, 0, 0, 0.33333)"
        );
    }
}
