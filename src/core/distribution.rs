use crate::core::error::DistributionError;
use crate::sources::SampleSource;
use crate::utils::file_parsing::parse_integer_record;

/// Shared contract of every distribution family fitted from raw samples.
///
/// Implementors own their samples exclusively. Loading replaces the sample
/// set but never recomputes parameters; estimation is family specific.
pub trait Distribution {
    /// Current location parameter.
    fn mean(&self) -> f64;

    /// Current spread parameter.
    fn standard_deviation(&self) -> f64;

    /// Loaded samples, in the order the source produced them.
    fn samples(&self) -> &[f64];

    /// Replaces the sample set with every record of `source`.
    ///
    /// On error the previous samples are kept.
    fn load_samples(&mut self, source: &mut dyn SampleSource) -> Result<(), DistributionError>;
}

/// Drains `source`, parsing each record as an integer.
///
/// Records are numbered from 1 in [`DistributionError::Parse`].
pub fn read_samples(source: &mut dyn SampleSource) -> Result<Vec<f64>, DistributionError> {
    let mut out = Vec::new();
    while let Some(record) = source.next_record() {
        let record = record?;
        let value =
            parse_integer_record(&record).map_err(|source| DistributionError::Parse {
                record: out.len() + 1,
                value: record.trim().to_string(),
                source,
            })?;
        out.push(value as f64);
    }
    Ok(out)
}
