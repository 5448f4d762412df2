mod error;
mod sources;
mod tasks;

pub use error::BuildError;

pub use sources::build_source;
pub use tasks::build_task;
