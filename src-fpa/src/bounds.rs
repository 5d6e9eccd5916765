use ndarray::Array1;

use crate::agent::Agent;
use crate::error::{FpaError, Result};

/// Saturate `x` into `[lower, upper]` component-wise. NaN goes to `lower`.
pub(crate) fn clip_inplace(x: &mut Array1<f64>, lower: &Array1<f64>, upper: &Array1<f64>) {
    for i in 0..x.len() {
        if x[i].is_nan() || x[i] < lower[i] {
            x[i] = lower[i];
        } else if x[i] > upper[i] {
            x[i] = upper[i];
        }
    }
}

/// Clamp every agent back inside the box `[lb, ub]`.
///
/// Shapes are checked for the whole population before any position is
/// touched, so a mismatch leaves the agents unchanged.
pub fn check_bound_limits(agents: &mut [Agent], lb: &Array1<f64>, ub: &Array1<f64>) -> Result<()> {
    if lb.len() != ub.len() {
        return Err(FpaError::DimensionMismatch { expected: lb.len(), got: ub.len() });
    }
    if let Some(bad) = agents.iter().find(|a| a.position.len() != lb.len()) {
        return Err(FpaError::DimensionMismatch { expected: lb.len(), got: bad.position.len() });
    }
    for agent in agents.iter_mut() {
        clip_inplace(&mut agent.position, lb, ub);
    }
    Ok(())
}
