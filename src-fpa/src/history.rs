use serde::Serialize;

use crate::agent::Agent;

/// Best solution after one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationRecord {
    /// 0 for the initial evaluation, then 1..=n_iterations
    pub iteration: usize,
    pub best_fit: f64,
    pub best_position: Vec<f64>,
    /// Whether this pass lowered the best fitness
    pub is_improvement: bool,
}

/// Trace of a run, one record per evaluation pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct History {
    records: Vec<IterationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, iteration: usize, best: &Agent) {
        let is_improvement = match self.records.last() {
            Some(last) => best.fit < last.best_fit,
            None => true,
        };
        self.records.push(IterationRecord {
            iteration,
            best_fit: best.fit,
            best_position: best.position.to_vec(),
            is_improvement,
        });
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Final record, if any pass happened.
    pub fn best(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Best fitness after each pass.
    pub fn fitness_curve(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.best_fit).collect()
    }

    pub fn improvements(&self) -> usize {
        self.records.iter().filter(|r| r.is_improvement).count()
    }
}
