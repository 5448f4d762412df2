pub mod cli;
pub mod types;
