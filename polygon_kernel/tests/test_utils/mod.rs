#![allow(dead_code)]

mod debug;
mod polygon_modifiers;
mod polygon_test_properties;

pub use debug::*;
pub use polygon_modifiers::*;
pub use polygon_test_properties::*;
