use ndarray::Array1;

/// Sphere function
/// Global minimum: f(x) = 0 at x = (0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&v| v * v).sum()
}

/// Sum of squares (axis-parallel hyper-ellipsoid)
/// Global minimum: f(x) = 0 at x = (0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn sum_squares(x: &Array1<f64>) -> f64 {
    x.iter().enumerate().map(|(i, &v)| (i + 1) as f64 * v * v).sum()
}

/// Rosenbrock valley, N-dimensional
/// Global minimum: f(x) = 0 at x = (1, ..., 1)
/// Bounds: x_i in [-5, 10]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// Zakharov function, N-dimensional
/// Global minimum: f(x) = 0 at x = (0, ..., 0)
/// Bounds: x_i in [-5, 10]
pub fn zakharov(x: &Array1<f64>) -> f64 {
    let sum_sq: f64 = x.iter().map(|&v| v * v).sum();
    let weighted: f64 = x.iter().enumerate().map(|(i, &v)| 0.5 * (i + 1) as f64 * v).sum();
    sum_sq + weighted.powi(2) + weighted.powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_unimodal_minima() {
        assert_eq!(sphere(&array![0.0, 0.0, 0.0]), 0.0);
        assert_eq!(sum_squares(&array![0.0, 0.0]), 0.0);
        assert_eq!(rosenbrock(&array![1.0, 1.0, 1.0]), 0.0);
        assert_eq!(zakharov(&array![0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_unimodal_values() {
        assert_eq!(sphere(&array![1.0, -2.0]), 5.0);
        assert_eq!(sum_squares(&array![1.0, 1.0]), 3.0);
        // 100 * (1 - 0)^2 + (1 - 0)^2
        assert_eq!(rosenbrock(&array![0.0, 1.0]), 101.0);
        // 1 + (0.5)^2 + (0.5)^4
        assert_eq!(zakharov(&array![1.0]), 1.3125);
    }
}
