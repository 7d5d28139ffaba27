//! Analysis orchestration.

pub mod engine;

pub use engine::*;
