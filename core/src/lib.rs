//! Core types for impetus.
//!
//! Generators, interpolation and the animation controller live here. Most users should depend on
//! `impetus`, which re-exports everything important.

pub mod animator;
pub mod color;
pub mod config;
pub mod decay;
pub mod driver;
pub mod easing;
pub mod error;
pub mod generator;
pub mod interpolation;
pub mod keyframes;
pub mod spring;
pub mod time_scale;
pub mod value;
