use std::io::Error;

/// Pull-based interface for anything that yields sample records.
///
/// A record is the raw text of one sample (e.g. one line of a file). Parsing
/// is left to the consumer so every source reports malformed data the same
/// way.
pub trait SampleSource {
    /// Produces the next record, or `None` once the source is exhausted.
    ///
    /// A read failure is returned as `Some(Err(..))`. Callers should stop
    /// pulling after an error.
    fn next_record(&mut self) -> Option<Result<String, Error>>;

    /// Rewinds the source to its first record.
    ///
    /// Returns an error if the underlying source cannot be reopened.
    fn restart(&mut self) -> Result<(), Error>;
}
