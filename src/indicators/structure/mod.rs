//! Market structure: swing extremes, pivot support/resistance

pub mod support_resistance;
pub mod swing;

pub use support_resistance::*;
pub use swing::*;
