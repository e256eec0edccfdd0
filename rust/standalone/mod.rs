//! Free functions with no shared state: circle area and Fibonacci generation.

mod geometry;
mod sequences;
#[cfg(feature = "python")]
pub(crate) mod standalone_py;

pub use crate::standalone::geometry::compute_area;
pub use crate::standalone::sequences::generate_fibonacci;
