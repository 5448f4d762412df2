pub mod distribution;
pub mod error;

pub use distribution::{Distribution, read_samples};
pub use error::DistributionError;
