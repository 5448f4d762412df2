use crate::core::{Distribution, DistributionError};
use crate::distributions::GaussianModel;
use crate::sources::SampleSource;
use crate::visualization::{CurveFormat, DensityCurve, Histogram, MAX_BINS, MAX_N_SPACES};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

/// Outcome of a fit: the model plus the plot data derived from it.
#[derive(Debug, Clone)]
pub struct FitReport {
    pub model: GaussianModel,
    pub curve: DensityCurve,
    pub histogram: Histogram,
    pub exported_to: Option<PathBuf>,
}

/// Fits a Gaussian to one sample source and builds its plot data.
pub struct FitTask {
    source: Box<dyn SampleSource>,
    sample_correction: bool,
    n_spaces: usize,
    bins: usize,
    normalize_histogram: bool,
    export: Option<(PathBuf, CurveFormat)>,
}

impl FitTask {
    pub fn new(
        source: Box<dyn SampleSource>,
        sample_correction: bool,
        n_spaces: usize,
        bins: usize,
        normalize_histogram: bool,
    ) -> Result<Self, Error> {
        if n_spaces == 0 || n_spaces > MAX_N_SPACES {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("n_spaces must be in [1, {MAX_N_SPACES}]"),
            ));
        }
        if bins == 0 || bins > MAX_BINS {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("bins must be in [1, {MAX_BINS}]"),
            ));
        }

        Ok(Self {
            source,
            sample_correction,
            n_spaces,
            bins,
            normalize_histogram,
            export: None,
        })
    }

    pub fn with_export(mut self, path: PathBuf, format: CurveFormat) -> Self {
        self.export = Some((path, format));
        self
    }

    pub fn run(&mut self) -> Result<FitReport, DistributionError> {
        self.source.restart()?;

        let mut model = GaussianModel::default();
        model.load_and_estimate(self.source.as_mut(), self.sample_correction)?;

        let curve = DensityCurve::from_model(&model, self.n_spaces)?;
        let histogram =
            Histogram::from_samples(model.samples(), self.bins, self.normalize_histogram)?;

        let exported_to = match &self.export {
            Some((path, format)) => {
                curve.export(path, *format)?;
                Some(path.clone())
            }
            None => None,
        };

        Ok(FitReport {
            model,
            curve,
            histogram,
            exported_to,
        })
    }
}
