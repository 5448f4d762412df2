pub mod failing_source;
pub mod scripted_driver;

pub use failing_source::FailingSource;
pub use scripted_driver::{Answer, ScriptedDriver};
