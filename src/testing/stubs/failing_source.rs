use crate::sources::SampleSource;
use std::io::{Error, ErrorKind};

/// Yields its records, then fails with a read error instead of ending.
pub struct FailingSource {
    pub records: Vec<String>,
    idx: usize,
}

impl FailingSource {
    pub fn new(records: Vec<&str>) -> Self {
        Self {
            records: records.into_iter().map(str::to_string).collect(),
            idx: 0,
        }
    }
}

impl SampleSource for FailingSource {
    fn next_record(&mut self) -> Option<Result<String, Error>> {
        let out = match self.records.get(self.idx) {
            Some(r) => Ok(r.clone()),
            None => Err(Error::new(ErrorKind::UnexpectedEof, "source went away")),
        };
        self.idx += 1;
        Some(out)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
