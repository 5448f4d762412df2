mod samples;

pub use samples::{FIVE_SAMPLES, sample_file};
