//! Trend classification

pub mod classifier;

pub use classifier::*;
