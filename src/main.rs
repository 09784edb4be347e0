//! u-tsp command-line solver.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use u_tsp::ga::{EvolutionConfig, EvolutionEngine, ProgressReporter};
use u_tsp::io::{read_cities, write_svg};

#[derive(Parser)]
#[command(name = "u-tsp")]
#[command(about = "Genetic algorithm solver for the planar Traveling Salesman Problem")]
struct Args {
    /// City file: "width height" header, then one "x y" pair per line
    file: PathBuf,

    /// Population size
    #[arg(short, long, default_value = "350")]
    population: usize,

    /// Number of generations
    #[arg(short, long, default_value = "10000")]
    generations: usize,

    /// Probability of a random swap per generation
    #[arg(short, long, default_value = "0.2")]
    mutation_rate: f64,

    /// Random seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Compute population lengths in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Write the best tour as SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Log the generation number every N generations (0 disables)
    #[arg(long, default_value = "100")]
    report_every: usize,

    /// Log the diversity histogram every N generations (0 disables)
    #[arg(long, default_value = "1000")]
    histogram_every: usize,

    /// Logging level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> u_tsp::Result<()> {
    let map = read_cities(&args.file)?;
    info!(
        cities = map.cities.len(),
        width = map.width,
        height = map.height,
        "loaded {}",
        args.file.display()
    );

    let mut config = EvolutionConfig::default()
        .with_population_size(args.population)
        .with_generations(args.generations)
        .with_mutation_rate(args.mutation_rate)
        .with_parallel(args.parallel);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let reporter = ProgressReporter::new()
        .with_generation_interval(args.report_every)
        .with_histogram_interval(args.histogram_every);

    let mut engine = EvolutionEngine::from_config(map.cities.clone(), config)?;
    let result = engine.run(reporter);

    info!(best_length = result.best_length, "best tour found");
    info!("order: {:?}", result.best.order());

    if let Some(path) = &args.svg {
        write_svg(path, &result.best, &map.cities, map.width, map.height)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}
