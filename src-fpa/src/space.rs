//! Bounded population container shared by every optimizer.

use ndarray::Array1;
use rand::Rng;

use crate::agent::Agent;
use crate::error::{FpaError, Result};
use crate::random::uniform;

/// Population of agents living in the box `[lb, ub]`.
///
/// The space owns the best agent found so far as an independent copy:
/// moving a live agent afterwards never changes the recorded best.
#[derive(Debug, Clone)]
pub struct Space {
    pub(crate) agents: Vec<Agent>,
    pub(crate) lb: Array1<f64>,
    pub(crate) ub: Array1<f64>,
    pub(crate) n_iterations: usize,
    pub(crate) best_agent: Agent,
}

/// Split `(lower, upper)` pairs into the two bound vectors.
pub fn bounds_to_arrays(bounds: &[(f64, f64)]) -> (Array1<f64>, Array1<f64>) {
    let lb = bounds.iter().map(|(lo, _)| *lo).collect::<Array1<f64>>();
    let ub = bounds.iter().map(|(_, hi)| *hi).collect::<Array1<f64>>();
    (lb, ub)
}

fn validate_bounds(lb: &Array1<f64>, ub: &Array1<f64>) -> Result<()> {
    if lb.len() != ub.len() {
        return Err(FpaError::DimensionMismatch { expected: lb.len(), got: ub.len() });
    }
    for (index, (&lower, &upper)) in lb.iter().zip(ub.iter()).enumerate() {
        if !(lower <= upper) {
            return Err(FpaError::InvalidBounds { index, lower, upper });
        }
    }
    Ok(())
}

impl Space {
    /// Sample `n_agents` positions uniformly inside `[lb, ub]`.
    pub fn new<R: Rng + ?Sized>(
        n_agents: usize,
        lb: Array1<f64>,
        ub: Array1<f64>,
        n_iterations: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate_bounds(&lb, &ub)?;
        if n_agents == 0 {
            return Err(FpaError::EmptyPopulation);
        }
        let n = lb.len();
        let agents = (0..n_agents)
            .map(|_| Agent::new(Array1::from_shape_fn(n, |j| uniform(lb[j], ub[j], rng))))
            .collect();
        log::debug!("Space: {} agents, {} variables, {} iterations", n_agents, n, n_iterations);
        Ok(Self::assemble(agents, lb, ub, n_iterations))
    }

    /// Build a space from explicit initial positions.
    ///
    /// Positions are taken as given; they are clamped into the box after the
    /// first update like any other.
    pub fn from_positions(
        positions: Vec<Array1<f64>>,
        lb: Array1<f64>,
        ub: Array1<f64>,
        n_iterations: usize,
    ) -> Result<Self> {
        validate_bounds(&lb, &ub)?;
        if positions.is_empty() {
            return Err(FpaError::EmptyPopulation);
        }
        if let Some(bad) = positions.iter().find(|p| p.len() != lb.len()) {
            return Err(FpaError::DimensionMismatch { expected: lb.len(), got: bad.len() });
        }
        let agents = positions.into_iter().map(Agent::new).collect();
        Ok(Self::assemble(agents, lb, ub, n_iterations))
    }

    fn assemble(agents: Vec<Agent>, lb: Array1<f64>, ub: Array1<f64>, n_iterations: usize) -> Self {
        let best_agent = Agent::new(lb.clone());
        Self { agents, lb, ub, n_iterations, best_agent }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Direct access to the population; shapes are re-checked at the next clamp.
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn n_agents(&self) -> usize {
        self.agents.len()
    }

    pub fn n_variables(&self) -> usize {
        self.lb.len()
    }

    pub fn lb(&self) -> &Array1<f64> {
        &self.lb
    }

    pub fn ub(&self) -> &Array1<f64> {
        &self.ub
    }

    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Best agent observed across all evaluation passes so far.
    pub fn best_agent(&self) -> &Agent {
        &self.best_agent
    }

    /// Replace the recorded best with a copy of agent `index` if it is strictly better.
    pub(crate) fn promote_if_better(&mut self, index: usize) -> bool {
        let candidate = &self.agents[index];
        if candidate.fit < self.best_agent.fit {
            self.best_agent = candidate.clone();
            true
        } else {
            false
        }
    }
}
