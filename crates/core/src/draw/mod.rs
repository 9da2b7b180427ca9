//! Draw results: the normalized data model, candidate validation and
//! partitioning, and the example dataset used as a last resort.

mod demo;
mod partition;
mod types;

pub use demo::*;
pub use partition::*;
pub use types::*;
