use clap::Parser;
use pollinate_env::get_records_dir;
use pollinate_fpa::{
	FpaConfigBuilder, Function, Hyperparams, OptimizationRecorder, PollenSource, PositionUpdate,
	flower_pollination,
};
use pollinate_testfunctions::{all_functions, get_function_metadata};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
	name = "run_fpa",
	about = "Minimize a benchmark function with the Flower Pollination Algorithm"
)]
struct Cli {
	/// Name of the benchmark function to optimize (use --list-functions to see available options)
	#[arg(long, default_value = "sphere")]
	function: String,

	/// Dimensionality of the problem (defaults to the function's recommended dimension)
	#[arg(long)]
	dim: Option<usize>,

	/// Number of flowers in the population
	#[arg(long, default_value_t = 20)]
	agents: usize,

	/// Number of iterations
	#[arg(long, default_value_t = 100)]
	iterations: usize,

	/// Optional random seed for reproducibility
	#[arg(long)]
	seed: Option<u64>,

	/// JSON file with hyperparameters, e.g. {"beta": 1.5, "eta": 0.2, "p": 0.8}
	#[arg(long)]
	hyperparams: Option<PathBuf>,

	/// Levy flight tail index in (0, 2] (overrides the JSON file)
	#[arg(long)]
	beta: Option<f64>,

	/// Levy flight scaling factor (overrides the JSON file)
	#[arg(long)]
	eta: Option<f64>,

	/// Local pollination probability threshold (overrides the JSON file)
	#[arg(long)]
	p: Option<f64>,

	/// Move agents by the pollination step alone instead of accumulating it onto the position
	#[arg(long)]
	corrected_update: bool,

	/// Let local pollination see flowers already moved in the current sweep
	#[arg(long)]
	live_pollen: bool,

	/// Save the per-iteration trace as CSV
	#[arg(long)]
	record: bool,

	/// Directory for the CSV trace (defaults to $POLLINATE_DIR/data_generated/records)
	#[arg(long)]
	output_dir: Option<PathBuf>,

	/// List all available functions and exit
	#[arg(long)]
	list_functions: bool,
}

fn list_functions() {
	println!("Available functions:");
	for meta in all_functions() {
		println!(
			"  {:<16} [{}, {}]  {}{}",
			meta.name,
			meta.lower,
			meta.upper,
			meta.description,
			if meta.multimodal { " (multimodal)" } else { "" }
		);
	}
}

fn build_hyperparams(cli: &Cli) -> Result<Option<Hyperparams>, Box<dyn std::error::Error>> {
	let mut hp = match &cli.hyperparams {
		Some(path) => Hyperparams::from_json_file(path)?,
		None => Hyperparams::new(),
	};
	for (key, value) in [("beta", cli.beta), ("eta", cli.eta), ("p", cli.p)] {
		if let Some(v) = value {
			hp.insert(key, v);
		}
	}
	Ok(if hp.is_empty() { None } else { Some(hp) })
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
	let meta = get_function_metadata(&cli.function).ok_or_else(|| {
		format!("unknown function '{}' (use --list-functions)", cli.function)
	})?;
	let dim = cli.dim.unwrap_or(meta.default_dim);
	let bounds = meta.bounds(dim);

	let mut builder = FpaConfigBuilder::new()
		.n_agents(cli.agents)
		.n_iterations(cli.iterations)
		.position_update(if cli.corrected_update {
			PositionUpdate::Displace
		} else {
			PositionUpdate::Accumulate
		})
		.pollen_source(if cli.live_pollen { PollenSource::Live } else { PollenSource::Snapshot });
	if let Some(seed) = cli.seed {
		builder = builder.seed(seed);
	}
	if let Some(hp) = build_hyperparams(&cli)? {
		builder = builder.hyperparams(hp);
	}

	let objective = Function::new(meta.name, meta.function);
	let start = Instant::now();
	let report = flower_pollination(&objective, &bounds, builder.build())?;
	let elapsed = start.elapsed();

	println!("function    : {} ({}D)", meta.name, dim);
	println!("best f(x)   : {:.6e} (known minimum {:.6e})", report.fun, meta.global_minimum(dim));
	println!("best x      : {}", report.x);
	println!("iterations  : {}", report.nit);
	println!("evaluations : {}", report.nfev);
	println!("elapsed     : {:.3} s", elapsed.as_secs_f64());

	if cli.record {
		let output_dir = match cli.output_dir {
			Some(dir) => dir,
			None => get_records_dir()?,
		};
		let path = OptimizationRecorder::new(meta.name).save_to_csv(&report.history, &output_dir)?;
		println!("trace       : {}", path.display());
	}
	Ok(())
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let cli = Cli::parse();
	if cli.list_functions {
		list_functions();
		return;
	}
	if let Err(e) = run(cli) {
		eprintln!("Error: {}", e);
		process::exit(1);
	}
}
