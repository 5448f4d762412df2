pub mod core;
pub mod distributions;
pub mod sources;
pub mod tasks;
pub mod ui;
pub mod utils;
pub mod visualization;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
