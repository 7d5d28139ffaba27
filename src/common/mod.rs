//! Small numeric and presentation helpers shared across modules.

pub mod format;
pub mod jalali;
pub mod math;
