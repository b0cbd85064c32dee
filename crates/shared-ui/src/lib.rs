pub mod components;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use components::*;
