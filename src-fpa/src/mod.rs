//! Flower Pollination Algorithm (FPA) global optimizer in pure Rust using ndarray
//!
//! A population of flowers (agents) lives in a box `[lb, ub]`. At every
//! iteration each flower either performs a Levy flight toward the best flower
//! found so far or a local pollination step along the difference of two
//! random flowers; positions are then clamped back into the box and
//! re-evaluated.
//!
//! Supported features:
//! - Box constraints (lower/upper bounds), saturating clamp
//! - Levy steps via Mantegna's algorithm with tail index `beta` in (0, 2]
//! - Hyperparameters from a string-keyed map or a JSON file
//! - Reproducible runs from an explicit, seedable random source
//! - Per-iteration history, exportable to CSV
//!
//! ```no_run
//! use ndarray::Array1;
//! use pollinate_fpa::{FpaConfigBuilder, Function, flower_pollination};
//!
//! let sphere = Function::new("sphere", |x: &Array1<f64>| x.iter().map(|v| v * v).sum());
//! let config = FpaConfigBuilder::new().seed(42).n_agents(25).n_iterations(200).build();
//! let report = flower_pollination(&sphere, &[(-5.0, 5.0); 3], config)?;
//! println!("f = {:.3e} at {}", report.fun, report.x);
//! # Ok::<(), pollinate_fpa::FpaError>(())
//! ```

use std::fmt;

use ndarray::Array1;

pub mod agent;
pub mod bounds;
pub mod error;
pub mod flower_pollination;
pub mod fpa;
pub mod function;
pub mod history;
pub mod hyperparams;
pub mod optimizer;
pub mod random;
pub mod recorder;
pub mod space;

pub use agent::Agent;
pub use bounds::check_bound_limits;
pub use error::{FpaError, ObjectiveError, Result};
pub use flower_pollination::flower_pollination;
pub use fpa::{Fpa, PollenSource, PositionUpdate};
pub use function::Function;
pub use history::{History, IterationRecord};
pub use hyperparams::Hyperparams;
pub use optimizer::Optimizer;
pub use recorder::OptimizationRecorder;
pub use space::Space;

/// Configuration for [`flower_pollination`]
#[derive(Debug, Clone)]
pub struct FpaConfig {
	pub n_agents: usize,
	pub n_iterations: usize,
	pub seed: Option<u64>,
	/// `beta`, `eta` and `p` overrides; `None` keeps the defaults
	pub hyperparams: Option<Hyperparams>,
	pub position_update: PositionUpdate,
	pub pollen_source: PollenSource,
	/// Print a summary on stderr
	pub disp: bool,
}

impl Default for FpaConfig {
	fn default() -> Self {
		Self {
			n_agents: 20,
			n_iterations: 100,
			seed: None,
			hyperparams: None,
			position_update: PositionUpdate::default(),
			pollen_source: PollenSource::default(),
			disp: false,
		}
	}
}

/// Fluent builder for `FpaConfig`.
#[derive(Default)]
pub struct FpaConfigBuilder {
	cfg: FpaConfig,
}
impl FpaConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: FpaConfig::default() }
	}
	pub fn n_agents(mut self, v: usize) -> Self {
		self.cfg.n_agents = v;
		self
	}
	pub fn n_iterations(mut self, v: usize) -> Self {
		self.cfg.n_iterations = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn hyperparams(mut self, v: Hyperparams) -> Self {
		self.cfg.hyperparams = Some(v);
		self
	}
	pub fn beta(self, v: f64) -> Self {
		self.hyperparam("beta", v)
	}
	pub fn eta(self, v: f64) -> Self {
		self.hyperparam("eta", v)
	}
	pub fn p(self, v: f64) -> Self {
		self.hyperparam("p", v)
	}
	fn hyperparam(mut self, key: &str, v: f64) -> Self {
		self.cfg.hyperparams.get_or_insert_with(Hyperparams::new).insert(key, v);
		self
	}
	pub fn position_update(mut self, v: PositionUpdate) -> Self {
		self.cfg.position_update = v;
		self
	}
	pub fn pollen_source(mut self, v: PollenSource) -> Self {
		self.cfg.pollen_source = v;
		self
	}
	pub fn disp(mut self, v: bool) -> Self {
		self.cfg.disp = v;
		self
	}
	pub fn build(self) -> FpaConfig {
		self.cfg
	}
}

/// Result/Report of an FPA optimization run
#[derive(Clone)]
pub struct FpaReport {
	pub x: Array1<f64>,
	pub fun: f64,
	pub nit: usize,
	pub nfev: usize,
	pub history: History,
}

impl fmt::Debug for FpaReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FpaReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("history", &format!("len={}", self.history.len()))
			.finish()
	}
}
