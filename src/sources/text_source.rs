use crate::sources::SampleSource;
use std::io::Error;

/// In-memory records.
#[derive(Debug, Clone, Default)]
pub struct TextSampleSource {
    records: Vec<String>,
    idx: usize,
}

impl TextSampleSource {
    /// One record per line of `text`, same as reading it from a file.
    pub fn from_text(text: &str) -> Self {
        Self::from_records(text.lines())
    }

    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
            idx: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SampleSource for TextSampleSource {
    fn next_record(&mut self) -> Option<Result<String, Error>> {
        let record = self.records.get(self.idx)?.clone();
        self.idx += 1;
        Some(Ok(record))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
