pub mod error;

pub mod fibonacci;
pub mod gann;
pub mod prz;
pub mod structure;
pub mod trend;

pub use error::AnalysisError;
pub use fibonacci::*;
pub use gann::*;
pub use prz::*;
pub use structure::*;
pub use trend::*;
