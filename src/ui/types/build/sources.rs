use crate::core::read_samples;
use crate::sources::{FileSampleSource, SampleSource, TextSampleSource};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{FileSourceParameters, InlineSourceParameters, SourceChoice};
use crate::utils::file_parsing::split_inline_records;

impl TryFrom<FileSourceParameters> for FileSampleSource {
    type Error = BuildError;

    fn try_from(p: FileSourceParameters) -> Result<Self, Self::Error> {
        FileSampleSource::open(p.path).map_err(BuildError::from)
    }
}

impl TryFrom<InlineSourceParameters> for TextSampleSource {
    type Error = BuildError;

    fn try_from(p: InlineSourceParameters) -> Result<Self, Self::Error> {
        let records = split_inline_records(&p.values);
        if records.is_empty() {
            return Err(BuildError::InvalidParameter("no inline values given".into()));
        }
        let source = TextSampleSource::from_records(records);
        // typed values are checked up front so a typo fails before the task runs
        read_samples(&mut source.clone())?;
        Ok(source)
    }
}

pub fn build_source(choice: SourceChoice) -> Result<Box<dyn SampleSource>, BuildError> {
    match choice {
        SourceChoice::File(p) => {
            let s = FileSampleSource::try_from(p)?;
            Ok(Box::new(s))
        }
        SourceChoice::Inline(p) => {
            let s = TextSampleSource::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
