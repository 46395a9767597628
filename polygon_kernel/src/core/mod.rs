//! Core module has common/shared math and numeric traits used by the polygon algorithms.
pub mod math;
pub mod traits;
