use crate::core::DistributionError;
use std::fmt::{Display, Formatter, Result};

pub const DEFAULT_BINS: usize = 10;
pub const MAX_BINS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// `count`, or `count / (len * width)` when normalized.
    pub value: f64,
}

impl Display for HistogramBin {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "[{:.3}, {:.3}) count={}, value={:.6}",
            self.lower, self.upper, self.count, self.value
        )
    }
}

/// Equal-width histogram over `[min, max]` of a sample set.
///
/// Bins are half-open except the last, which also holds `max`. A constant
/// sample set is centred in `[v - 0.5, v + 0.5]`.
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    normalized: bool,
}

impl Histogram {
    pub fn from_samples(
        samples: &[f64],
        bins: usize,
        normalize: bool,
    ) -> std::result::Result<Self, DistributionError> {
        if bins == 0 || bins > MAX_BINS {
            return Err(DistributionError::InvalidParameter(format!(
                "bins must be in [1, {MAX_BINS}], got {bins}"
            )));
        }
        if samples.is_empty() {
            return Err(DistributionError::EmptySample);
        }

        let mut lo = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &x in samples {
            let idx = (((x - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let total = samples.len() as f64;
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let value = if normalize {
                    count as f64 / (total * width)
                } else {
                    count as f64
                };
                HistogramBin {
                    lower: lo + width * i as f64,
                    upper: lo + width * (i + 1) as f64,
                    count,
                    value,
                }
            })
            .collect();

        Ok(Self {
            bins,
            normalized: normalize,
        })
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}
