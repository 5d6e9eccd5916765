use ndarray::Array1;

/// One candidate solution of the population.
///
/// `fit` is only meaningful right after an evaluation pass: an update moves
/// `position` without touching it.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Decision variables, one per bound pair
    pub position: Array1<f64>,
    /// Objective value at `position` after the last evaluation
    pub fit: f64,
    /// Lowest objective value this agent ever reached
    pub best_fit: f64,
}

impl Agent {
    /// Create an agent at `position` that has not been evaluated yet.
    pub fn new(position: Array1<f64>) -> Self {
        Self { position, fit: f64::MAX, best_fit: f64::MAX }
    }

    pub fn n_variables(&self) -> usize {
        self.position.len()
    }

    /// Store a freshly evaluated objective value, keeping the personal best.
    pub(crate) fn record_fitness(&mut self, fit: f64) {
        self.fit = fit;
        if fit < self.best_fit {
            self.best_fit = fit;
        }
    }
}
