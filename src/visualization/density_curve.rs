use crate::core::{Distribution, DistributionError};
use crate::distributions::GaussianModel;
use crate::visualization::CurveFormat;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

pub const DEFAULT_N_SPACES: usize = 50;
pub const MAX_N_SPACES: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub density: f64,
}

/// Density of a fitted model sampled over the range of its own data.
///
/// The grid starts at `min(samples)` and advances by
/// `(max - min) / n_spaces`, giving `n_spaces` points.
#[derive(Debug, Clone, Default)]
pub struct DensityCurve {
    points: Vec<CurvePoint>,
}

impl DensityCurve {
    pub fn from_model(model: &GaussianModel, n_spaces: usize) -> Result<Self, DistributionError> {
        if n_spaces == 0 || n_spaces > MAX_N_SPACES {
            return Err(DistributionError::InvalidParameter(format!(
                "n_spaces must be in [1, {MAX_N_SPACES}], got {n_spaces}"
            )));
        }
        let samples = model.samples();
        if samples.is_empty() {
            return Err(DistributionError::EmptySample);
        }
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let interval = (max - min) / n_spaces as f64;

        let points = (0..n_spaces)
            .map(|i| {
                let x = min + interval * i as f64;
                model.density(x).map(|density| CurvePoint { x, density })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.density).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "x{d}density", d = delimiter)?;
        for p in &self.points {
            writeln!(w, "{:.12}{d}{:.12}", p.x, p.density, d = delimiter)?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.points)?;
        writeln!(w)?;
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::NamedTempFile;

    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn fitted(samples: Vec<f64>) -> GaussianModel {
        let mut g = GaussianModel::default().with_samples(samples);
        g.estimate_mean().unwrap();
        g.estimate_standard_deviation(true).unwrap();
        g
    }

    #[test]
    fn grid_starts_at_min_and_steps_towards_max() {
        let g = fitted(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let curve = DensityCurve::from_model(&g, 4).unwrap();
        assert_eq!(curve.len(), 4);
        assert_eq!(curve.xs(), vec![1.0, 2.0, 3.0, 4.0]);
        for p in curve.points() {
            assert!(approx_eq(p.density, g.density(p.x).unwrap(), EPS));
        }
    }

    #[test]
    fn default_grid_has_fifty_points() {
        let g = fitted(vec![0.0, 10.0, 5.0]);
        let curve = DensityCurve::from_model(&g, DEFAULT_N_SPACES).unwrap();
        assert_eq!(curve.len(), 50);
        let xs = curve.xs();
        assert_eq!(xs[0], 0.0);
        assert!(approx_eq(xs[1], 0.2, EPS));
        assert!(xs[49] < 10.0);
    }

    #[test]
    fn peak_sits_near_the_mean() {
        let g = fitted(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let curve = DensityCurve::from_model(&g, 4).unwrap();
        let ys = curve.ys();
        assert!(ys[2] > ys[1] && ys[2] > ys[3]);
    }

    #[test]
    fn rejects_empty_model_and_zero_spaces() {
        let g = GaussianModel::default();
        assert!(matches!(
            DensityCurve::from_model(&g, 10),
            Err(DistributionError::EmptySample)
        ));

        let g = fitted(vec![1.0, 2.0]);
        assert!(matches!(
            DensityCurve::from_model(&g, 0),
            Err(DistributionError::InvalidParameter(_))
        ));
        assert!(matches!(
            DensityCurve::from_model(&g, MAX_N_SPACES + 1),
            Err(DistributionError::InvalidParameter(_))
        ));
    }

    #[test]
    fn constant_samples_have_no_valid_density() {
        let mut g = GaussianModel::default().with_samples(vec![3.0, 3.0, 3.0]);
        g.estimate_mean().unwrap();
        g.estimate_standard_deviation(true).unwrap();
        assert!(matches!(
            DensityCurve::from_model(&g, 5),
            Err(DistributionError::InvalidParameter(_))
        ));
    }

    #[test]
    fn export_csv_and_tsv() {
        let g = GaussianModel::new(0.0, 1.0).with_samples(vec![0.0, 2.0]);
        let curve = DensityCurve::from_model(&g, 2).unwrap();

        let tf = NamedTempFile::new().unwrap();
        curve.export(tf.path(), CurveFormat::Csv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
x,density
0.000000000000,0.398942280401
1.000000000000,0.241970724519
";
        assert_eq!(got, exp);

        let tf = NamedTempFile::new().unwrap();
        curve.export(tf.path(), CurveFormat::Tsv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert!(got.starts_with("x\tdensity\n0.000000000000\t0.398942280401\n"));
        assert_eq!(got.lines().count(), 3);
    }

    #[test]
    fn export_json_array_of_points() {
        let g = GaussianModel::new(0.0, 1.0).with_samples(vec![0.0, 2.0]);
        let curve = DensityCurve::from_model(&g, 2).unwrap();

        let tf = NamedTempFile::new().unwrap();
        curve.export(tf.path(), CurveFormat::Json).unwrap();
        let v: Value = serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();

        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["x"].as_f64().unwrap(), 1.0);
        assert!(approx_eq(
            arr[0]["density"].as_f64().unwrap(),
            0.398_942_280_401_432_7,
            EPS
        ));
    }

    #[test]
    fn export_empty_curve_writes_header_only() {
        let curve = DensityCurve::default();
        assert!(curve.is_empty());

        let tf = NamedTempFile::new().unwrap();
        curve.export(tf.path(), CurveFormat::Csv).unwrap();
        assert_eq!(fs::read_to_string(tf.path()).unwrap(), "x,density\n");

        let tf = NamedTempFile::new().unwrap();
        curve.export(tf.path(), CurveFormat::Json).unwrap();
        assert_eq!(fs::read_to_string(tf.path()).unwrap(), "[]\n");
    }
}
