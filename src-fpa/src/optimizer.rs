//! The optimizer contract: a fixed evaluate, update, clamp, re-evaluate loop
//! where each algorithm only supplies its update rule.

use rand::RngCore;

use crate::agent::Agent;
use crate::bounds::check_bound_limits;
use crate::error::{FpaError, Result};
use crate::function::Function;
use crate::history::History;
use crate::hyperparams::Hyperparams;
use crate::space::Space;

/// A population-based metaheuristic applied to a [`Space`].
///
/// Implementors hold only their tunables; agents and the best solution live
/// in the space, so one optimizer can drive any number of runs.
pub trait Optimizer {
    /// Algorithm name used in logs.
    fn algorithm(&self) -> &str;

    /// Whether `build` has completed.
    fn is_built(&self) -> bool;

    /// Mapping used by the last successful `build`, if any was given.
    fn hyperparams(&self) -> Option<&Hyperparams>;

    /// Reset tunables to their defaults, then override the ones present in
    /// `hyperparams`. Unknown keys are ignored.
    fn build(&mut self, hyperparams: Option<&Hyperparams>) -> Result<()>;

    /// Move every agent according to the algorithm's rule.
    ///
    /// Must not touch fitness values: they are refreshed by [`Optimizer::evaluate`].
    fn update(&self, agents: &mut [Agent], best_agent: &Agent, rng: &mut dyn RngCore) -> Result<()>;

    /// Evaluate every agent and promote a copy of any agent beating the best.
    ///
    /// An objective failure aborts the pass and is returned as is.
    fn evaluate(&self, space: &mut Space, function: &Function) -> Result<()> {
        for i in 0..space.agents.len() {
            let fit = function.evaluate(&space.agents[i].position)?;
            space.agents[i].record_fitness(fit);
            space.promote_if_better(i);
        }
        Ok(())
    }

    /// Run the optimization pipeline on `space`.
    ///
    /// On return `space.best_agent()` holds the answer and the history has
    /// `n_iterations + 1` records, the first one for the initial evaluation.
    fn run(&self, space: &mut Space, function: &Function, rng: &mut dyn RngCore) -> Result<History> {
        if !self.is_built() {
            return Err(FpaError::NotBuilt { algorithm: self.algorithm().to_string() });
        }

        let mut history = History::new();
        self.evaluate(space, function)?;
        history.record(0, &space.best_agent);
        log::debug!(
            "{} on {}: initial best fitness {:.6e}",
            self.algorithm(),
            function.name(),
            space.best_agent.fit
        );

        let n_iterations = space.n_iterations;
        for t in 0..n_iterations {
            log::info!("Iteration {}/{}", t + 1, n_iterations);

            self.update(&mut space.agents, &space.best_agent, rng)?;

            // Checking if agents meet the bound limits
            check_bound_limits(&mut space.agents, &space.lb, &space.ub)?;

            self.evaluate(space, function)?;

            log::info!("Fitness: {}", space.best_agent.fit);
            log::info!("Position: {}", space.best_agent.position);
            history.record(t + 1, &space.best_agent);
        }

        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ObjectiveError;
    use ndarray::{Array1, array};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;

    /// Shifts every agent by a fixed offset and counts its calls.
    struct Drift {
        offset: f64,
        built: bool,
        calls: Cell<usize>,
    }

    impl Drift {
        fn new(offset: f64) -> Self {
            Self { offset, built: true, calls: Cell::new(0) }
        }
    }

    impl Optimizer for Drift {
        fn algorithm(&self) -> &str {
            "Drift"
        }

        fn is_built(&self) -> bool {
            self.built
        }

        fn hyperparams(&self) -> Option<&Hyperparams> {
            None
        }

        fn build(&mut self, hyperparams: Option<&Hyperparams>) -> Result<()> {
            self.offset = 1.0;
            if let Some(hp) = hyperparams {
                if let Some(v) = hp.get_f64("offset")? {
                    self.offset = v;
                }
            }
            self.built = true;
            Ok(())
        }

        fn update(&self, agents: &mut [Agent], _best: &Agent, _rng: &mut dyn RngCore) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            for agent in agents.iter_mut() {
                agent.position += self.offset;
            }
            Ok(())
        }
    }

    fn square(x: &Array1<f64>) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn test_zero_iterations_only_evaluates() {
        let drift = Drift::new(1.0);
        let mut space =
            Space::from_positions(vec![array![3.0], array![-1.0]], array![-5.0], array![5.0], 0)
                .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let history = drift.run(&mut space, &Function::new("square", square), &mut rng).unwrap();

        assert_eq!(drift.calls.get(), 0);
        assert_eq!(history.len(), 1);
        assert_eq!(space.best_agent().fit, 1.0);
        assert_eq!(space.best_agent().position, array![-1.0]);
        assert_eq!(space.agents()[0].fit, 9.0);
    }

    #[test]
    fn test_run_clamps_and_tracks_best() {
        let drift = Drift::new(2.0);
        let mut space =
            Space::from_positions(vec![array![-4.0], array![-3.0]], array![-5.0], array![1.0], 4)
                .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let history = drift.run(&mut space, &Function::new("square", square), &mut rng).unwrap();

        assert_eq!(drift.calls.get(), 4);
        assert_eq!(history.len(), 5);
        // -4 -> -2 -> 0 hits the optimum at iteration 2, then both agents saturate at 1
        assert_eq!(space.best_agent().fit, 0.0);
        assert_eq!(space.best_agent().position, array![0.0]);
        for agent in space.agents() {
            assert_eq!(agent.position, array![1.0]);
            assert_eq!(agent.fit, 1.0);
        }
        assert_eq!(space.agents()[0].best_fit, 0.0);
        assert_eq!(space.agents()[1].best_fit, 1.0);
        let curve = history.fitness_curve();
        assert!(curve.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_objective_failure_propagates() {
        let drift = Drift::new(1.0);
        let mut space =
            Space::from_positions(vec![array![0.0], array![0.5]], array![-5.0], array![5.0], 10)
                .unwrap();
        let failing = Function::try_new("pole", |x: &Array1<f64>| {
            if x[0] >= 2.0 {
                Err(ObjectiveError::new("pole at x >= 2"))
            } else {
                Ok(x[0])
            }
        });
        let mut rng = StdRng::seed_from_u64(0);
        let err = drift.run(&mut space, &failing, &mut rng).unwrap_err();
        assert!(matches!(err, FpaError::Objective(_)));
        assert_eq!(drift.calls.get(), 2);
    }

    #[test]
    fn test_run_requires_build() {
        let mut drift = Drift::new(1.0);
        drift.built = false;
        let mut space = Space::from_positions(vec![array![0.0]], array![-1.0], array![1.0], 1).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let err = drift.run(&mut space, &Function::new("square", square), &mut rng).unwrap_err();
        assert!(matches!(err, FpaError::NotBuilt { .. }));

        drift.build(Some(&Hyperparams::new().with("offset", 0.5))).unwrap();
        assert_eq!(drift.offset, 0.5);
        assert!(drift.run(&mut space, &Function::new("square", square), &mut rng).is_ok());
    }

    #[test]
    fn test_clamp_reports_dimension_mismatch() {
        let drift = Drift::new(0.0);
        let mut space =
            Space::from_positions(vec![array![0.0], array![0.5]], array![-1.0], array![1.0], 3)
                .unwrap();
        space.agents_mut()[1].position = array![0.5, 0.5];
        let mut rng = StdRng::seed_from_u64(0);
        let f = Function::new("first", |x: &Array1<f64>| x[0]);
        let err = drift.run(&mut space, &f, &mut rng).unwrap_err();
        assert!(err.is_dimension_error());
    }
}
