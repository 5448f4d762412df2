use std::f64::consts::PI;

/// Standard normal CDF, `Phi(z)`.
pub fn normal_probability(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z / (2.0f64).sqrt()))
}

/// Standard normal PDF, `phi(z)`.
#[inline]
pub fn standard_normal_density(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
}

/// Sum of squared deviations from `center`.
pub fn sum_squared_deviations(values: &[f64], center: f64) -> f64 {
    values.iter().map(|x| (x - center).powi(2)).sum()
}
