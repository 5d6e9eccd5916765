//! Random deviates used by the optimizers.
//!
//! All generators take the random source explicitly so that a seeded
//! `StdRng` reproduces a run bit for bit.

use std::f64::consts::PI;

use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};
use statrs::function::gamma::gamma;

use crate::error::{FpaError, Result};

/// One real number drawn uniformly from `[low, high)`.
///
/// `low == high` returns `low`.
pub fn uniform<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.random::<f64>();
    low + u * (high - low)
}

/// `size` uniform deviates in `[low, high)`.
pub fn uniform_vec<R: Rng + ?Sized>(size: usize, low: f64, high: f64, rng: &mut R) -> Array1<f64> {
    Array1::from_shape_fn(size, |_| uniform(low, high, rng))
}

/// `size` normal deviates with the given mean and standard deviation.
pub fn gaussian_vec<R: Rng + ?Sized>(
    size: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Array1<f64>> {
    let normal = Normal::new(mean, std_dev)
        .map_err(|e| FpaError::configuration("std_dev", e.to_string()))?;
    Ok(Array1::from_shape_fn(size, |_| normal.sample(rng)))
}

/// Mantegna scale of the numerator deviate for tail index `beta`.
pub fn mantegna_sigma(beta: f64) -> Result<f64> {
    check_beta(beta)?;
    let num = gamma(1.0 + beta) * (PI * beta / 2.0).sin();
    let den = gamma((1.0 + beta) / 2.0) * beta * 2f64.powf((beta - 1.0) / 2.0);
    let sigma = (num / den).powf(1.0 / beta);
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(FpaError::LevyScaleOverflow { beta });
    }
    Ok(sigma)
}

fn check_beta(beta: f64) -> Result<()> {
    if !beta.is_finite() || beta <= 0.0 || beta > 2.0 {
        return Err(FpaError::DegenerateDistribution { beta });
    }
    Ok(())
}

/// Levy-stable-like step vector using Mantegna's algorithm.
///
/// Each component is `u / |v|^(1/beta)` with `u ~ N(0, sigma_u)` and
/// `v ~ N(0, 1)` drawn independently, `u` before `v`. A zero-length request
/// yields an empty vector. For small `beta` a component may be infinite when
/// `|v|^(1/beta)` underflows.
pub fn levy_step<R: Rng + ?Sized>(dimensions: usize, beta: f64, rng: &mut R) -> Result<Array1<f64>> {
    let sigma_u = mantegna_sigma(beta)?;
    let numerator = Normal::new(0.0, sigma_u)
        .map_err(|_| FpaError::LevyScaleOverflow { beta })?;
    let exponent = 1.0 / beta;

    let mut step = Array1::<f64>::zeros(dimensions);
    for s in step.iter_mut() {
        let u: f64 = numerator.sample(rng);
        let v: f64 = StandardNormal.sample(rng);
        *s = u / v.abs().powf(exponent);
    }
    Ok(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Hill estimator of the tail index over the `k` largest magnitudes.
    fn hill_tail_index(samples: &[f64], k: usize) -> f64 {
        let mut mags: Vec<f64> = samples.iter().map(|x| x.abs()).collect();
        mags.sort_by(|a, b| b.partial_cmp(a).unwrap());
        let threshold = mags[k].ln();
        let mean_log_excess = mags[..k].iter().map(|x| x.ln() - threshold).sum::<f64>() / k as f64;
        1.0 / mean_log_excess
    }

    fn levy_samples(beta: f64, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        levy_step(n, beta, &mut rng).unwrap().to_vec()
    }

    #[test]
    fn test_uniform_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let u = uniform(-2.0, 3.0, &mut rng);
            assert!((-2.0..3.0).contains(&u), "{u} outside [-2, 3)");
        }
        assert_eq!(uniform(4.0, 4.0, &mut rng), 4.0);
    }

    #[test]
    fn test_uniform_and_gaussian_shapes() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(uniform_vec(5, 0.0, 1.0, &mut rng).len(), 5);
        assert_eq!(gaussian_vec(3, 0.0, 1.0, &mut rng).unwrap().len(), 3);
        assert!(gaussian_vec(3, 0.0, -1.0, &mut rng).is_err());
    }

    #[test]
    fn test_mantegna_sigma_reference_values() {
        // beta = 1 reduces to a ratio of standard normals (Cauchy)
        assert!((mantegna_sigma(1.0).unwrap() - 1.0).abs() < 1e-10);
        let s = mantegna_sigma(1.5).unwrap();
        assert!((s - 0.696_574_5).abs() < 1e-4, "sigma_u(1.5) = {s}");
    }

    #[test]
    fn test_levy_step_empty_dimension() {
        let mut rng = StdRng::seed_from_u64(3);
        let step = levy_step(0, 1.5, &mut rng).unwrap();
        assert!(step.is_empty());
    }

    #[test]
    fn test_levy_step_rejects_degenerate_beta() {
        let mut rng = StdRng::seed_from_u64(4);
        for beta in [0.0, -0.5, 2.01, f64::NAN, f64::INFINITY] {
            let err = levy_step(3, beta, &mut rng).unwrap_err();
            assert!(matches!(err, FpaError::DegenerateDistribution { .. }), "beta={beta}");
        }
        assert!(levy_step(3, 2.0, &mut rng).is_ok());
    }

    #[test]
    fn test_tiny_beta_reports_scale_overflow() {
        let err = mantegna_sigma(1e-4).unwrap_err();
        assert!(matches!(err, FpaError::LevyScaleOverflow { beta } if beta == 1e-4));

        let mut rng = StdRng::seed_from_u64(5);
        let err = levy_step(2, 1e-4, &mut rng).unwrap_err();
        assert!(matches!(err, FpaError::LevyScaleOverflow { .. }));

        // still representable
        assert!(mantegna_sigma(0.01).unwrap().is_finite());
    }

    #[test]
    fn test_levy_step_is_reproducible() {
        let a = levy_samples(1.5, 16, 99);
        let b = levy_samples(1.5, 16, 99);
        assert_eq!(a, b);
        assert!(a.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_levy_tail_index_tracks_beta() {
        let n = 50_000;
        let k = 500;
        let cauchy = hill_tail_index(&levy_samples(1.0, n, 7), k);
        let gaussian_like = hill_tail_index(&levy_samples(2.0, n, 7), k);

        assert!(cauchy > 0.7 && cauchy < 1.4, "beta=1 tail index {cauchy}");
        assert!(gaussian_like > 1.5, "beta=2 tail index {gaussian_like}");
        assert!(gaussian_like > cauchy + 0.4);
    }
}
