use crate::core::{Distribution, DistributionError, read_samples};
use crate::sources::{FileSampleSource, SampleSource};
use crate::utils::math::{normal_probability, standard_normal_density, sum_squared_deviations};
use std::path::Path;

/// Univariate Gaussian `N(mean, standard_deviation^2)` fitted from samples.
///
/// Parameters are set at construction and overwritten by the `estimate_*`
/// calls. Estimation updates a parameter only when it succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianModel {
    mean: f64,
    standard_deviation: f64,
    samples: Vec<f64>,
}

impl GaussianModel {
    /// Parameter-only model with no samples.
    pub fn new(mean: f64, standard_deviation: f64) -> Self {
        Self {
            mean,
            standard_deviation,
            samples: Vec::new(),
        }
    }

    pub fn with_samples(mut self, samples: Vec<f64>) -> Self {
        self.samples = samples;
        self
    }

    pub fn set_samples(&mut self, samples: Vec<f64>) {
        self.samples = samples;
    }

    pub fn set_mean(&mut self, mean: f64) {
        self.mean = mean;
    }

    pub fn set_standard_deviation(&mut self, standard_deviation: f64) {
        self.standard_deviation = standard_deviation;
    }

    /// Arithmetic mean of the samples; stored as the model mean.
    pub fn estimate_mean(&mut self) -> Result<f64, DistributionError> {
        self.mean = self.sample_mean()?;
        Ok(self.mean)
    }

    /// Standard deviation of the samples around the *current* mean.
    ///
    /// The mean is not recomputed: call [`estimate_mean`](Self::estimate_mean)
    /// (or [`set_mean`](Self::set_mean)) first. With `sample_correction` the
    /// divisor is `len - 1` (unbiased sample estimator, the usual choice),
    /// otherwise `len` (population estimator).
    pub fn estimate_standard_deviation(
        &mut self,
        sample_correction: bool,
    ) -> Result<f64, DistributionError> {
        self.standard_deviation = self.deviation_about(self.mean, sample_correction)?;
        Ok(self.standard_deviation)
    }

    /// Loads `source`, then estimates the mean and the standard deviation,
    /// in that order.
    ///
    /// Both parameters are written only if both estimates succeed; the new
    /// samples stay loaded either way.
    pub fn load_and_estimate(
        &mut self,
        source: &mut dyn SampleSource,
        sample_correction: bool,
    ) -> Result<(), DistributionError> {
        self.load_samples(source)?;
        let mean = self.sample_mean()?;
        let standard_deviation = self.deviation_about(mean, sample_correction)?;
        self.mean = mean;
        self.standard_deviation = standard_deviation;
        Ok(())
    }

    /// [`load_and_estimate`](Self::load_and_estimate) over a text file with
    /// one integer per line.
    pub fn load_and_estimate_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        sample_correction: bool,
    ) -> Result<(), DistributionError> {
        let mut source = FileSampleSource::open(path)?;
        self.load_and_estimate(&mut source, sample_correction)
    }

    /// Probability density at `x`.
    pub fn density(&self, x: f64) -> Result<f64, DistributionError> {
        let sd = self.checked_standard_deviation()?;
        Ok(standard_normal_density((x - self.mean) / sd) / sd)
    }

    /// Cumulative probability `P(X <= x)`.
    pub fn cumulative(&self, x: f64) -> Result<f64, DistributionError> {
        let sd = self.checked_standard_deviation()?;
        Ok(normal_probability((x - self.mean) / sd))
    }

    /// Distribution of `X + Y` for independent `X ~ self`, `Y ~ other`.
    ///
    /// Means add, variances add. The result carries no samples.
    pub fn combine(&self, other: &GaussianModel) -> GaussianModel {
        GaussianModel::new(
            self.mean + other.mean,
            self.standard_deviation.hypot(other.standard_deviation),
        )
    }

    pub fn describe(&self) -> String {
        format!(
            "Mean {}, Standard Deviation {}",
            self.mean, self.standard_deviation
        )
    }

    fn sample_mean(&self) -> Result<f64, DistributionError> {
        if self.samples.is_empty() {
            return Err(DistributionError::EmptySample);
        }
        let sum: f64 = self.samples.iter().sum();
        Ok(sum / self.samples.len() as f64)
    }

    fn deviation_about(&self, mean: f64, sample_correction: bool) -> Result<f64, DistributionError> {
        let len = self.samples.len();
        if len == 0 {
            return Err(DistributionError::EmptySample);
        }
        let dof = if sample_correction { len - 1 } else { len };
        if dof == 0 {
            return Err(DistributionError::DegenerateSample { len });
        }
        let ss = sum_squared_deviations(&self.samples, mean);
        Ok((ss / dof as f64).sqrt())
    }

    fn checked_standard_deviation(&self) -> Result<f64, DistributionError> {
        let sd = self.standard_deviation;
        // NaN fails this comparison too
        if sd > 0.0 {
            Ok(sd)
        } else {
            Err(DistributionError::InvalidParameter(format!(
                "standard deviation must be > 0, got {sd}"
            )))
        }
    }
}

impl Default for GaussianModel {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Distribution for GaussianModel {
    #[inline]
    fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    #[inline]
    fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn load_samples(&mut self, source: &mut dyn SampleSource) -> Result<(), DistributionError> {
        self.samples = read_samples(source)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::TextSampleSource;
    use crate::testing::dummies::{FIVE_SAMPLES, sample_file};
    use crate::testing::stubs::FailingSource;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn random_samples(rng: &mut StdRng, len: usize) -> Vec<f64> {
        (0..len).map(|_| rng.random_range(-1_000.0..1_000.0)).collect()
    }

    #[test]
    fn default_is_standard_normal_without_samples() {
        let g = GaussianModel::default();
        assert_eq!(g.mean(), 0.0);
        assert_eq!(g.standard_deviation(), 1.0);
        assert!(g.samples().is_empty());
    }

    #[test]
    fn five_samples_from_file() {
        let tf = sample_file(FIVE_SAMPLES);
        let mut g = GaussianModel::default();
        g.load_and_estimate_file(tf.path(), true).unwrap();

        assert_eq!(g.samples(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(approx_eq(g.mean(), 3.0, EPS));
        assert!(approx_eq(g.standard_deviation(), 2.5f64.sqrt(), EPS));
    }

    #[test]
    fn population_estimator_divides_by_len() {
        let mut g = GaussianModel::default();
        let mut src = TextSampleSource::from_text(FIVE_SAMPLES);
        g.load_and_estimate(&mut src, false).unwrap();
        assert!(approx_eq(g.standard_deviation(), 2.0f64.sqrt(), EPS));
    }

    #[test]
    fn loading_does_not_estimate() {
        let mut g = GaussianModel::new(10.0, 4.0);
        let mut src = TextSampleSource::from_text(FIVE_SAMPLES);
        g.load_samples(&mut src).unwrap();
        assert_eq!(g.samples().len(), 5);
        assert_eq!(g.mean(), 10.0);
        assert_eq!(g.standard_deviation(), 4.0);
    }

    #[test]
    fn mean_matches_sum_over_len_for_random_samples() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [1usize, 2, 7, 100, 1_000] {
            let xs = random_samples(&mut rng, len);
            let expected = xs.iter().sum::<f64>() / len as f64;
            let mut g = GaussianModel::default().with_samples(xs);
            let got = g.estimate_mean().unwrap();
            assert!(approx_eq(got, expected, 1e-9));
            assert_eq!(g.mean(), got);
        }
    }

    #[test]
    fn corrected_sd_matches_formula_for_random_samples() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [2usize, 3, 50, 500] {
            let xs = random_samples(&mut rng, len);
            let mean = xs.iter().sum::<f64>() / len as f64;
            let ss: f64 = xs.iter().map(|x| (x - mean) * (x - mean)).sum();
            let expected = (ss / (len - 1) as f64).sqrt();

            let mut g = GaussianModel::default().with_samples(xs);
            g.estimate_mean().unwrap();
            let got = g.estimate_standard_deviation(true).unwrap();
            assert!(approx_eq(got, expected, 1e-9 * expected.max(1.0)));
        }
    }

    #[test]
    fn sd_uses_current_mean_without_recomputing() {
        let mut g = GaussianModel::default().with_samples(vec![1.0, 3.0]);
        g.set_mean(0.0);
        // (1 + 9) / 1
        let sd = g.estimate_standard_deviation(true).unwrap();
        assert!(approx_eq(sd, 10.0f64.sqrt(), EPS));
        assert_eq!(g.mean(), 0.0);
    }

    #[test]
    fn single_sample_sd() {
        let mut g = GaussianModel::default().with_samples(vec![4.0]);
        g.estimate_mean().unwrap();

        match g.estimate_standard_deviation(true) {
            Err(DistributionError::DegenerateSample { len }) => assert_eq!(len, 1),
            other => panic!("expected degenerate sample, got {other:?}"),
        }
        assert_eq!(g.standard_deviation(), 1.0);

        assert_eq!(g.estimate_standard_deviation(false).unwrap(), 0.0);
    }

    #[test]
    fn empty_sample_is_rejected_and_leaves_parameters() {
        let mut g = GaussianModel::new(2.0, 3.0);
        assert!(matches!(
            g.estimate_mean(),
            Err(DistributionError::EmptySample)
        ));
        assert!(matches!(
            g.estimate_standard_deviation(false),
            Err(DistributionError::EmptySample)
        ));
        assert_eq!(g.mean(), 2.0);
        assert_eq!(g.standard_deviation(), 3.0);
    }

    #[test]
    fn estimate_mean_is_idempotent() {
        let mut g = GaussianModel::default().with_samples(vec![0.1, 0.2, 0.7, 9.0]);
        let first = g.estimate_mean().unwrap();
        let second = g.estimate_mean().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn load_and_estimate_on_empty_source_fails_after_loading() {
        let mut g = GaussianModel::new(1.0, 2.0).with_samples(vec![9.0, 9.0]);
        let mut src = TextSampleSource::from_text("");
        assert!(matches!(
            g.load_and_estimate(&mut src, true),
            Err(DistributionError::EmptySample)
        ));
        assert!(g.samples().is_empty());
        assert_eq!(g.mean(), 1.0);
        assert_eq!(g.standard_deviation(), 2.0);
    }

    #[test]
    fn load_and_estimate_single_sample_keeps_both_parameters() {
        let mut g = GaussianModel::new(100.0, 7.0);
        let mut src = TextSampleSource::from_text("8\n");
        assert!(matches!(
            g.load_and_estimate(&mut src, true),
            Err(DistributionError::DegenerateSample { len: 1 })
        ));
        assert_eq!(g.samples(), &[8.0]);
        assert_eq!(g.mean(), 100.0);
        assert_eq!(g.standard_deviation(), 7.0);
    }

    #[test]
    fn failed_load_keeps_previous_samples() {
        let mut g = GaussianModel::default().with_samples(vec![1.0, 2.0]);

        let mut bad = TextSampleSource::from_text("1\nfive\n");
        assert!(matches!(
            g.load_samples(&mut bad),
            Err(DistributionError::Parse { record: 2, .. })
        ));
        assert_eq!(g.samples(), &[1.0, 2.0]);

        let mut broken = FailingSource::new(vec!["3"]);
        assert!(matches!(
            g.load_and_estimate(&mut broken, true),
            Err(DistributionError::Io(_))
        ));
        assert_eq!(g.samples(), &[1.0, 2.0]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut g = GaussianModel::default();
        assert!(matches!(
            g.load_and_estimate_file(dir.path().join("nope.txt"), true),
            Err(DistributionError::Io(_))
        ));
    }

    #[test]
    fn density_peaks_at_mean() {
        for (mean, sd) in [(0.0, 1.0), (3.0, 2.5), (-40.0, 0.01), (1e3, 250.0)] {
            let g = GaussianModel::new(mean, sd);
            let peak = 1.0 / (sd * (2.0 * PI).sqrt());
            let got = g.density(mean).unwrap();
            assert!(approx_eq(got, peak, 1e-12 * peak.max(1.0)));
            assert!(g.density(mean + sd).unwrap() < got);
            assert!(g.density(mean - sd).unwrap() < got);
        }
    }

    #[test]
    fn density_matches_closed_form() {
        let g = GaussianModel::new(1.0, 2.0);
        let x = 2.5;
        let expected =
            (1.0 / (2.0 * (2.0 * PI).sqrt())) * (-0.5 * ((x - 1.0) / 2.0f64).powi(2)).exp();
        assert!(approx_eq(g.density(x).unwrap(), expected, 1e-15));
        assert!(approx_eq(
            g.density(1.0 + 0.7).unwrap(),
            g.density(1.0 - 0.7).unwrap(),
            1e-15
        ));
    }

    #[test]
    fn density_rejects_non_positive_sd() {
        for sd in [0.0, -1.0, f64::NAN] {
            let g = GaussianModel::new(0.0, sd);
            assert!(matches!(
                g.density(0.0),
                Err(DistributionError::InvalidParameter(_))
            ));
            assert!(matches!(
                g.cumulative(0.0),
                Err(DistributionError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn cumulative_is_half_at_mean_and_monotonic() {
        let g = GaussianModel::new(5.0, 2.0);
        assert!(approx_eq(g.cumulative(5.0).unwrap(), 0.5, EPS));
        assert!(g.cumulative(3.0).unwrap() < g.cumulative(7.0).unwrap());
        assert!(approx_eq(
            g.cumulative(7.0).unwrap() - g.cumulative(3.0).unwrap(),
            0.682_689_492_137_086,
            1e-12
        ));
    }

    #[test]
    fn combine_adds_means_and_variances() {
        let a = GaussianModel::new(0.0, 1.0);
        let b = GaussianModel::new(2.0, 3.0);
        let sum = a.combine(&b);
        assert!(approx_eq(sum.mean(), 2.0, EPS));
        assert!(approx_eq(sum.standard_deviation(), 10.0f64.sqrt(), EPS));
        assert!(sum.samples().is_empty());
    }

    #[test]
    fn combine_leaves_operands_untouched() {
        let tf = sample_file(FIVE_SAMPLES);
        let mut a = GaussianModel::default();
        a.load_and_estimate_file(tf.path(), true).unwrap();
        let before = a.clone();
        let b = GaussianModel::new(1.0, 1.0);

        let sum = a.combine(&b);
        assert_eq!(a, before);
        assert_eq!(b, GaussianModel::new(1.0, 1.0));
        assert!(sum.samples().is_empty());
        assert!(approx_eq(sum.mean(), 4.0, EPS));
        assert!(approx_eq(sum.standard_deviation(), 3.5f64.sqrt(), EPS));
    }

    #[test]
    fn combine_from_many_threads() {
        let a = GaussianModel::new(1.0, 3.0);
        let b = GaussianModel::new(2.0, 4.0);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| a.combine(&b))).collect();
            for h in handles {
                let c = h.join().unwrap();
                assert_eq!(c.mean(), 3.0);
                assert!(approx_eq(c.standard_deviation(), 5.0, EPS));
            }
        });
    }

    #[test]
    fn describe_renders_both_parameters() {
        assert_eq!(
            GaussianModel::new(3.5, 0.25).describe(),
            "Mean 3.5, Standard Deviation 0.25"
        );
        assert_eq!(
            GaussianModel::default().describe(),
            "Mean 0, Standard Deviation 1"
        );
    }
}
