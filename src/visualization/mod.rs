mod curve_format;
mod density_curve;
mod histogram;

pub use curve_format::CurveFormat;
pub use density_curve::{CurvePoint, DEFAULT_N_SPACES, DensityCurve, MAX_N_SPACES};
pub use histogram::{DEFAULT_BINS, Histogram, HistogramBin, MAX_BINS};
