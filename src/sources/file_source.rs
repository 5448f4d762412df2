use crate::sources::SampleSource;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, Lines};
use std::path::{Path, PathBuf};

/// Text file with one sample per line.
#[derive(Debug)]
pub struct FileSampleSource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl FileSampleSource {
    /// Opens `path`. Fails if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let lines = Self::open_lines(&path)?;
        Ok(Self { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>, Error> {
        Ok(BufReader::new(File::open(path)?).lines())
    }
}

impl SampleSource for FileSampleSource {
    fn next_record(&mut self) -> Option<Result<String, Error>> {
        self.lines.next()
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.lines = Self::open_lines(&self.path)?;
        Ok(())
    }
}
