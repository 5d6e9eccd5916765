use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::fpa::Fpa;
use crate::function::Function;
use crate::optimizer::Optimizer;
use crate::space::{Space, bounds_to_arrays};
use crate::{FpaConfig, FpaReport};

/// Convenience function mirroring the usual `minimize(func, bounds)` shape:
/// - `function`: objective mapping x -> f(x)
/// - `bounds`: vector of (lower, upper) pairs
/// - `config`: FPA configuration
pub fn flower_pollination(
	function: &Function,
	bounds: &[(f64, f64)],
	config: FpaConfig,
) -> Result<FpaReport> {
	let (lb, ub) = bounds_to_arrays(bounds);

	let mut rng: StdRng = match config.seed {
		Some(s) => StdRng::seed_from_u64(s),
		None => {
			let mut thread_rng = rand::rng();
			StdRng::from_rng(&mut thread_rng)
		}
	};

	let fpa = Fpa::new(config.hyperparams.as_ref())?
		.with_position_update(config.position_update)
		.with_pollen_source(config.pollen_source);
	let mut space = Space::new(config.n_agents, lb, ub, config.n_iterations, &mut rng)?;

	if config.disp {
		eprintln!(
			"FPA Init: {} dimensions, population={}, iterations={}",
			space.n_variables(),
			space.n_agents(),
			space.n_iterations()
		);
		eprintln!(
			"  beta={:.3}, eta={:.3}, p={:.3}, update={:?}, pollen={:?}",
			fpa.beta(),
			fpa.eta(),
			fpa.p(),
			fpa.position_update(),
			fpa.pollen_source()
		);
	}

	let history = fpa.run(&mut space, function, &mut rng)?;
	let best = space.best_agent();

	if config.disp {
		eprintln!("FPA finished: best_f={:.6e}", best.fit);
	}

	Ok(FpaReport {
		x: best.position.clone(),
		fun: best.fit,
		nit: space.n_iterations(),
		nfev: space.n_agents() * (space.n_iterations() + 1),
		history,
	})
}
