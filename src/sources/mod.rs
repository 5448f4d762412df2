mod file_source;
mod sample_source;
mod text_source;

pub use file_source::FileSampleSource;
pub use sample_source::SampleSource;
pub use text_source::TextSampleSource;
