//! Flower Pollination Algorithm.
//!
//! Yang, Xin-She. "Flower pollination algorithm for global optimization",
//! Unconventional Computation and Natural Computation (2012).
//!
//! Every agent either takes a Levy-flight step toward the best flower
//! (global pollination) or moves along the difference of two flowers picked
//! at random from the population (local pollination).

use ndarray::{Array1, Zip};
use rand::RngCore;
use rand::seq::index;

use crate::agent::Agent;
use crate::error::{FpaError, Result};
use crate::hyperparams::Hyperparams;
use crate::optimizer::Optimizer;
use crate::random::{levy_step, uniform};

pub const DEFAULT_BETA: f64 = 1.5;
pub const DEFAULT_ETA: f64 = 0.2;
pub const DEFAULT_P: f64 = 0.8;

/// How a pollination step is written back into the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionUpdate {
	/// `x <- x + (x + delta)`: the step result is added onto the current
	/// position. This is the historical FPA rule and the default.
	#[default]
	Accumulate,
	/// `x <- x + delta`
	Displace,
}

impl std::str::FromStr for PositionUpdate {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"accumulate" => Ok(PositionUpdate::Accumulate),
			"displace" => Ok(PositionUpdate::Displace),
			_ => Err(format!("unknown position update: {}", s)),
		}
	}
}

/// Which positions local pollination reads for the other flowers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollenSource {
	/// Positions as they were when the sweep started.
	#[default]
	Snapshot,
	/// Current positions: flowers moved earlier in the sweep are seen at
	/// their new place, as in the historical FPA.
	Live,
}

impl std::str::FromStr for PollenSource {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"snapshot" => Ok(PollenSource::Snapshot),
			"live" => Ok(PollenSource::Live),
			_ => Err(format!("unknown pollen source: {}", s)),
		}
	}
}

/// Flower Pollination Algorithm optimizer.
#[derive(Debug, Clone)]
pub struct Fpa {
	hyperparams: Option<Hyperparams>,
	built: bool,
	/// Levy flight control parameter (tail index)
	beta: f64,
	/// Levy flight scaling factor
	eta: f64,
	/// Probability of local pollination
	p: f64,
	position_update: PositionUpdate,
	pollen_source: PollenSource,
}

impl Default for Fpa {
	fn default() -> Self {
		Self {
			hyperparams: None,
			built: true,
			beta: DEFAULT_BETA,
			eta: DEFAULT_ETA,
			p: DEFAULT_P,
			position_update: PositionUpdate::default(),
			pollen_source: PollenSource::default(),
		}
	}
}

impl Fpa {
	/// Create and build an FPA optimizer; `None` keeps every default.
	pub fn new(hyperparams: Option<&Hyperparams>) -> Result<Self> {
		let mut fpa = Self { built: false, ..Self::default() };
		fpa.build(hyperparams)?;
		Ok(fpa)
	}

	pub fn with_position_update(mut self, mode: PositionUpdate) -> Self {
		self.position_update = mode;
		self
	}

	pub fn with_pollen_source(mut self, source: PollenSource) -> Self {
		self.pollen_source = source;
		self
	}

	pub fn beta(&self) -> f64 {
		self.beta
	}

	pub fn eta(&self) -> f64 {
		self.eta
	}

	pub fn p(&self) -> f64 {
		self.p
	}

	pub fn position_update(&self) -> PositionUpdate {
		self.position_update
	}

	pub fn pollen_source(&self) -> PollenSource {
		self.pollen_source
	}

	/// Levy-flight step toward the best flower: `x + eta * L * (best - x)`.
	fn global_pollination(
		&self,
		position: &Array1<f64>,
		best_position: &Array1<f64>,
		rng: &mut dyn RngCore,
	) -> Result<Array1<f64>> {
		let step = levy_step(position.len(), self.beta, rng)?;
		let eta = self.eta;
		// a component already on the best stays there, even for an infinite step
		let delta = Zip::from(&step)
			.and(best_position)
			.and(position)
			.map_collect(|&l, &b, &x| if b == x { 0.0 } else { l * eta * (b - x) });
		Ok(position + &delta)
	}
}

/// `epsilon` and two distinct flower indices for a local step.
///
/// The pair is drawn from the whole population, the moving agent included.
fn local_draw(n_flowers: usize, rng: &mut dyn RngCore) -> (f64, usize, usize) {
	let epsilon = uniform(0.0, 1.0, rng);
	let pair = index::sample(rng, n_flowers, 2);
	(epsilon, pair.index(0), pair.index(1))
}

/// Step along the difference of two flowers: `x + eps * (x_j - x_k)`.
fn local_pollination(
	position: &Array1<f64>,
	x_j: &Array1<f64>,
	x_k: &Array1<f64>,
	epsilon: f64,
) -> Array1<f64> {
	position + &((x_j - x_k) * epsilon)
}

impl Optimizer for Fpa {
	fn algorithm(&self) -> &str {
		"FPA"
	}

	fn is_built(&self) -> bool {
		self.built
	}

	fn hyperparams(&self) -> Option<&Hyperparams> {
		self.hyperparams.as_ref()
	}

	fn build(&mut self, hyperparams: Option<&Hyperparams>) -> Result<()> {
		log::debug!("Running method: build()");

		let mut beta = DEFAULT_BETA;
		let mut eta = DEFAULT_ETA;
		let mut p = DEFAULT_P;
		if let Some(hp) = hyperparams {
			if let Some(v) = hp.get_f64("beta")? {
				beta = v;
			}
			if let Some(v) = hp.get_f64("eta")? {
				eta = v;
			}
			if let Some(v) = hp.get_f64("p")? {
				p = v;
			}
		}

		self.beta = beta;
		self.eta = eta;
		self.p = p;
		self.hyperparams = hyperparams.cloned();
		self.built = true;

		log::debug!(
			"Algorithm: {} | Hyperparameters: beta = {}, eta = {}, p = {} | Built: {}",
			self.algorithm(),
			self.beta,
			self.eta,
			self.p,
			self.built
		);
		Ok(())
	}

	/// One pollination sweep.
	///
	/// With [`PollenSource::Snapshot`] local pollination reads the positions
	/// as they were when the sweep started; with [`PollenSource::Live`] it
	/// sees agents already moved earlier in the sweep.
	fn update(&self, agents: &mut [Agent], best_agent: &Agent, rng: &mut dyn RngCore) -> Result<()> {
		if agents.len() < 2 {
			return Err(FpaError::PopulationTooSmall { required: 2, got: agents.len() });
		}
		let n = best_agent.position.len();
		if let Some(bad) = agents.iter().find(|a| a.position.len() != n) {
			return Err(FpaError::DimensionMismatch { expected: n, got: bad.position.len() });
		}

		let snapshot: Option<Vec<Array1<f64>>> = match self.pollen_source {
			PollenSource::Snapshot => Some(agents.iter().map(|a| a.position.clone()).collect()),
			PollenSource::Live => None,
		};

		for i in 0..agents.len() {
			let pollinated = if uniform(0.0, 1.0, rng) > self.p {
				self.global_pollination(&agents[i].position, &best_agent.position, rng)?
			} else {
				let (epsilon, j, k) = local_draw(agents.len(), rng);
				let (x_j, x_k) = match &snapshot {
					Some(flowers) => (&flowers[j], &flowers[k]),
					None => (&agents[j].position, &agents[k].position),
				};
				local_pollination(&agents[i].position, x_j, x_k, epsilon)
			};
			let moved = match self.position_update {
				PositionUpdate::Accumulate => &agents[i].position + &pollinated,
				PositionUpdate::Displace => pollinated,
			};
			agents[i].position = moved;
		}
		Ok(())
	}
}
