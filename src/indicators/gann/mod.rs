//! Gann angle levels and Square of 9

pub mod angles;
pub mod square_of_nine;

pub use angles::*;
pub use square_of_nine::*;
