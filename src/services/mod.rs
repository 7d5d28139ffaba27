//! Price history sources feeding the analysis endpoints.

pub mod market_data;
pub mod synthetic;

pub use market_data::*;
pub use synthetic::*;
