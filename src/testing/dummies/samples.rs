use std::io::Write;
use tempfile::NamedTempFile;

/// `1..=5`, one per line: mean 3, sample standard deviation `sqrt(2.5)`.
pub const FIVE_SAMPLES: &str = "1\n2\n3\n4\n5\n";

/// Writes `contents` to a fresh temporary file.
pub fn sample_file(contents: &str) -> NamedTempFile {
    let mut tf = NamedTempFile::new().expect("create temp sample file");
    tf.write_all(contents.as_bytes())
        .expect("write temp sample file");
    tf.flush().expect("flush temp sample file");
    tf
}
