//! Simple polygon type and the algorithms that operate on it.
mod poly;
mod poly_ops;
mod poly_types;
mod simplify;
mod spatial;

pub mod internal;

pub use poly::*;
pub use poly_types::*;
pub use simplify::simplify;
