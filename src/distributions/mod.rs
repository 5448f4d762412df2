mod gaussian;

pub use gaussian::GaussianModel;
