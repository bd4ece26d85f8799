//! Contains the [`Easing`] enum which defines many standard easing types available for animations,
//! as well as an [`EasingFunction`] trait for defining custom easings.

use dyn_clone::{clone_trait_object, DynClone};
use lazy_static::lazy_static;
use lyon_geom::{CubicBezierSegment, Point};
use std::fmt::Debug;

/// Provides an easing function, AKA animation timing function, for non-linear interpolation of
/// values, typically along some curve.
///
/// Easings and [`Lerp`](crate::interpolation::Lerp) are complementary: the easing decides which
/// progress value a mixer receives, and the mixer decides what that progress means for the value.
pub trait EasingFunction: Debug + DynClone {
    /// Computes the `y` value along the curve for a given `x` position.
    ///
    /// Expects `x` to be normalized (from 0 to 1) and returns a normalized y-value which is
    /// typically between 0 and 1, but may be outside that range (e.g. [Easing::OutBack]).
    fn calc(&self, x: f64) -> f64;
}

clone_trait_object!(EasingFunction);

/// Specifies a standard or custom [`EasingFunction`].
///
/// Available easings include:
/// - CSS standard: `Ease`, `In`, `Out`, `InOut` corresponding to `ease`, `ease-in`, `ease-out` and
///   `ease-in-out`
/// - Exact polynomial curves (`Quad` through `Quint`).
/// - Common curves from <https://easings.net> approximated with cubic beziers.
/// - User-defined functions via [`Custom`](Easing::Custom) or [`Easing::custom`].
#[derive(Clone, Debug, Default)]
pub enum Easing {
    /// Linear easing, i.e. no easing or curve, only straight-line interpolation.
    #[default]
    Linear,
    /// Curve equivalent to CSS
    /// [`ease`](https://developer.mozilla.org/en-US/docs/Web/CSS/easing-function#ease).
    Ease,
    /// Curve equivalent to CSS
    /// [`ease-in`](https://developer.mozilla.org/en-US/docs/Web/CSS/easing-function#ease-in).
    In,
    /// Curve equivalent to CSS
    /// [`ease-out`](https://developer.mozilla.org/en-US/docs/Web/CSS/easing-function#ease-out).
    Out,
    /// Curve equivalent to CSS
    /// [`ease-in-out`](https://developer.mozilla.org/en-US/docs/Web/CSS/easing-function#ease-in-out).
    InOut,
    /// Sinusoidal easing that starts slowly and ends quickly.
    InSine,
    /// Sinusoidal easing that starts quickly and ends slowly.
    OutSine,
    /// Sinusoidal easing that starts slowly, speeds up, and then ends slowly.
    InOutSine,
    /// `x^2`.
    InQuad,
    /// `1 - (1 - x)^2`.
    OutQuad,
    /// Quadratic in the first half, mirrored in the second.
    InOutQuad,
    /// `x^3`.
    InCubic,
    /// `1 - (1 - x)^3`.
    OutCubic,
    /// Cubic in the first half, mirrored in the second.
    InOutCubic,
    /// `x^4`.
    InQuart,
    /// `1 - (1 - x)^4`.
    OutQuart,
    /// Quartic in the first half, mirrored in the second.
    InOutQuart,
    /// `x^5`.
    InQuint,
    /// `1 - (1 - x)^5`.
    OutQuint,
    /// Quintic in the first half, mirrored in the second.
    InOutQuint,
    /// Exponential easing that starts slowly and ends quickly. Generally only suitable for long
    /// animations.
    InExpo,
    /// Exponential easing that starts quickly and ends slowly.
    OutExpo,
    /// Exponential easing that starts slowly, speeds up, and then ends slowly.
    InOutExpo,
    /// A curve that looks like the lower-right quarter of a circle.
    InCirc,
    /// A curve that looks like the upper-left quarter of a circle.
    OutCirc,
    /// Lower-right quarter circle joined to an upper-left quarter circle.
    InOutCirc,
    /// Moves slightly backward (negative) before accelerating forward.
    InBack,
    /// Overshoots the terminal value (i.e. goes above 1.0) before settling.
    OutBack,
    /// Dips below 0.0 at the start and overshoots 1.0 at the end.
    InOutBack,
    /// User-defined easing, such as an ad-hoc [CubicBezierEasing].
    Custom(Box<dyn EasingFunction>),
}

impl Easing {
    /// Wraps a plain function as a [`Custom`](Easing::Custom) easing.
    pub fn custom(f: fn(f64) -> f64) -> Self {
        Self::Custom(Box::new(FnEasing(f)))
    }
}

impl EasingFunction for Easing {
    fn calc(&self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Ease => EASE_WEB.calc(x),
            Self::In => EASE_IN.calc(x),
            Self::Out => EASE_OUT.calc(x),
            Self::InOut => EASE_IN_OUT.calc(x),
            Self::InSine => EASE_IN_SINE.calc(x),
            Self::OutSine => EASE_OUT_SINE.calc(x),
            Self::InOutSine => EASE_IN_OUT_SINE.calc(x),
            Self::InQuad => PowerEasing::new(2, Ends::In).calc(x),
            Self::OutQuad => PowerEasing::new(2, Ends::Out).calc(x),
            Self::InOutQuad => PowerEasing::new(2, Ends::InOut).calc(x),
            Self::InCubic => PowerEasing::new(3, Ends::In).calc(x),
            Self::OutCubic => PowerEasing::new(3, Ends::Out).calc(x),
            Self::InOutCubic => PowerEasing::new(3, Ends::InOut).calc(x),
            Self::InQuart => PowerEasing::new(4, Ends::In).calc(x),
            Self::OutQuart => PowerEasing::new(4, Ends::Out).calc(x),
            Self::InOutQuart => PowerEasing::new(4, Ends::InOut).calc(x),
            Self::InQuint => PowerEasing::new(5, Ends::In).calc(x),
            Self::OutQuint => PowerEasing::new(5, Ends::Out).calc(x),
            Self::InOutQuint => PowerEasing::new(5, Ends::InOut).calc(x),
            Self::InExpo => EASE_IN_EXPO.calc(x),
            Self::OutExpo => EASE_OUT_EXPO.calc(x),
            Self::InOutExpo => EASE_IN_OUT_EXPO.calc(x),
            Self::InCirc => EASE_IN_CIRC.calc(x),
            Self::OutCirc => EASE_OUT_CIRC.calc(x),
            Self::InOutCirc => EASE_IN_OUT_CIRC.calc(x),
            Self::InBack => EASE_IN_BACK.calc(x),
            Self::OutBack => EASE_OUT_BACK.calc(x),
            Self::InOutBack => EASE_IN_OUT_BACK.calc(x),
            Self::Custom(custom) => custom.calc(x),
        }
    }
}

lazy_static! {
    static ref EASE_WEB: CubicBezierEasing = cubic_bezier(0.25, 0.1, 0.25, 1.0);
    static ref EASE_IN: CubicBezierEasing = cubic_bezier(0.42, 0.0, 1.0, 1.0);
    static ref EASE_OUT: CubicBezierEasing = cubic_bezier(0.0, 0.0, 0.58, 1.0);
    static ref EASE_IN_OUT: CubicBezierEasing = cubic_bezier(0.42, 0.0, 0.58, 1.0);
    static ref EASE_IN_SINE: CubicBezierEasing = cubic_bezier(0.12, 0.0, 0.39, 0.0);
    static ref EASE_OUT_SINE: CubicBezierEasing = cubic_bezier(0.61, 1.0, 0.88, 1.0);
    static ref EASE_IN_OUT_SINE: CubicBezierEasing = cubic_bezier(0.37, 0.0, 0.63, 1.0);
    static ref EASE_IN_EXPO: CubicBezierEasing = cubic_bezier(0.7, 0.0, 0.84, 0.0);
    static ref EASE_OUT_EXPO: CubicBezierEasing = cubic_bezier(0.16, 1.0, 0.3, 1.0);
    static ref EASE_IN_OUT_EXPO: CubicBezierEasing = cubic_bezier(0.87, 0.0, 0.13, 1.0);
    static ref EASE_IN_CIRC: CubicBezierEasing = cubic_bezier(0.55, 0.0, 1.0, 0.45);
    static ref EASE_OUT_CIRC: CubicBezierEasing = cubic_bezier(0.0, 0.55, 0.45, 1.0);
    static ref EASE_IN_OUT_CIRC: CubicBezierEasing = cubic_bezier(0.85, 0.0, 0.15, 1.0);
    static ref EASE_IN_BACK: CubicBezierEasing = cubic_bezier(0.36, 0.0, 0.66, -0.56);
    static ref EASE_OUT_BACK: CubicBezierEasing = cubic_bezier(0.34, 1.56, 0.64, 1.0);
    static ref EASE_IN_OUT_BACK: CubicBezierEasing = cubic_bezier(0.68, -0.6, 0.32, 1.6);
}

/// Which end(s) of a [`PowerEasing`] curve are slow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ends {
    /// Slow start.
    In,
    /// Slow finish.
    Out,
    /// Slow start and finish.
    InOut,
}

/// Exact polynomial easing `x^n`, optionally reversed (`Out`) or mirrored around the midpoint
/// (`InOut`).
#[derive(Clone, Copy, Debug)]
pub struct PowerEasing {
    exponent: i32,
    ends: Ends,
}

impl PowerEasing {
    /// Creates a power curve with the given integer `exponent`.
    pub fn new(exponent: i32, ends: Ends) -> Self {
        Self { exponent, ends }
    }
}

impl EasingFunction for PowerEasing {
    fn calc(&self, x: f64) -> f64 {
        let ease_in = |x: f64| x.powi(self.exponent);
        match self.ends {
            Ends::In => ease_in(x),
            Ends::Out => 1.0 - ease_in(1.0 - x),
            Ends::InOut if x <= 0.5 => ease_in(x * 2.0) / 2.0,
            Ends::InOut => 1.0 - ease_in((1.0 - x) * 2.0) / 2.0,
        }
    }
}

/// Easing function defined by a cubic bezier curve with the start and end points fixed at `(0, 0)`
/// and `(1, 1)`, i.e. only the control points are specified.
///
/// Instances of this may be used in [Easing::Custom] in cases where the standard easings do not
/// suffice.
#[derive(Clone, Debug)]
pub struct CubicBezierEasing {
    segment: CubicBezierSegment<f64>,
}

impl CubicBezierEasing {
    /// Creates a new [CubicBezierEasing] with control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// To experiment with different curves, see: <https://cubic-bezier.com/>
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            segment: CubicBezierSegment {
                from: Point::new(0.0, 0.0),
                to: Point::new(1.0, 1.0),
                ctrl1: Point::new(x1, y1),
                ctrl2: Point::new(x2, y2),
            },
        }
    }

    // The curve is parameterized by `t`, not `x`; invert x(t) first. Newton converges in a few
    // steps for all curves whose x control points lie in 0..=1, with bisection as the fallback
    // when the slope flattens out.
    fn solve_t_for_x(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;
        let mut t = x;
        for _ in 0..8 {
            let error = self.segment.x(t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = self.segment.dx(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }
        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let current = self.segment.x(t);
            if (current - x).abs() < EPSILON {
                break;
            }
            if current < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }
}

impl EasingFunction for CubicBezierEasing {
    fn calc(&self, x: f64) -> f64 {
        if x <= 0.0 || x >= 1.0 {
            return x.clamp(0.0, 1.0);
        }
        self.segment.y(self.solve_t_for_x(x))
    }
}

/// Adapter that lets a plain function pointer act as an [`EasingFunction`].
#[derive(Clone, Copy, Debug)]
pub struct FnEasing(pub fn(f64) -> f64);

impl EasingFunction for FnEasing {
    fn calc(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> CubicBezierEasing {
    CubicBezierEasing::new(x1, y1, x2, y2)
}
