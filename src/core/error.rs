use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistributionError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("record {record}: '{value}' is not an integer")]
    Parse {
        record: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot estimate parameters from an empty sample")]
    EmptySample,

    #[error("sample-corrected standard deviation needs at least two samples, got {len}")]
    DegenerateSample { len: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
