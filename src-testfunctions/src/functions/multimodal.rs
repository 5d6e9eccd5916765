use ndarray::Array1;
use std::f64::consts::{E, PI};

/// Rastrigin function - regularly spaced local minima
/// Global minimum: f(x) = 0 at x = (0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n + x.iter().map(|&v| v * v - 10.0 * (2.0 * PI * v).cos()).sum::<f64>()
}

/// Ackley function - nearly flat outer region, deep central hole
/// Global minimum: f(x) = 0 at x = (0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let mean_sq = x.iter().map(|&v| v * v).sum::<f64>() / n;
    let mean_cos = x.iter().map(|&v| (2.0 * PI * v).cos()).sum::<f64>() / n;
    -20.0 * (-0.2 * mean_sq.sqrt()).exp() - mean_cos.exp() + 20.0 + E
}

/// Griewank function
/// Global minimum: f(x) = 0 at x = (0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> f64 {
    let sum = x.iter().map(|&v| v * v).sum::<f64>() / 4000.0;
    let prod: f64 = x.iter().enumerate().map(|(i, &v)| (v / ((i + 1) as f64).sqrt()).cos()).product();
    sum - prod + 1.0
}

/// Styblinski-Tang function
/// Global minimum: f(x) = -39.16617 * n at x_i = -2.903534
/// Bounds: x_i in [-5, 5]
pub fn styblinski_tang(x: &Array1<f64>) -> f64 {
    0.5 * x.iter().map(|&v| v.powi(4) - 16.0 * v * v + 5.0 * v).sum::<f64>()
}

/// Schwefel function - best minimum far from the next best ones
/// Global minimum: f(x) = 0 at x_i = 420.9687
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    418.9829 * n - x.iter().map(|&v| v * v.abs().sqrt().sin()).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_multimodal_minima() {
        assert!(rastrigin(&array![0.0, 0.0]).abs() < 1e-12);
        assert!(ackley(&array![0.0, 0.0, 0.0]).abs() < 1e-12);
        assert!(griewank(&array![0.0, 0.0]).abs() < 1e-12);
        assert!((styblinski_tang(&array![-2.903534, -2.903534]) + 2.0 * 39.16617).abs() < 1e-4);
        assert!(schwefel(&array![420.9687, 420.9687]).abs() < 1e-3);
    }

    #[test]
    fn test_rastrigin_local_minimum() {
        // integer lattice points are local minima worth x^2 each
        assert!((rastrigin(&array![1.0, 0.0]) - 1.0).abs() < 1e-9);
    }
}
