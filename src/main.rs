use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use fftbench::harness::run_bench;
use fftbench::{Options, Planner, TwiddleSource};

#[derive(Parser, Debug)]
#[command(name = "fftbench")]
#[command(about = "1024 point fixed-point FFT benchmark", long_about = None)]
struct Cli {
    /// Slices the first group of decimation levels is split into (power of two, at most 512)
    #[arg(long, default_value_t = 4)]
    slices: usize,
    /// Twiddle table to use
    #[arg(long, value_enum, default_value_t = Twiddles::Reference)]
    twiddles: Twiddles,
    /// Run every slice on the main thread
    #[arg(long)]
    sequential: bool,
    /// Worker threads for the parallel groups (defaults to one per core)
    #[cfg(feature = "parallel")]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    threads: Option<u16>,
    /// Number of timed runs
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    runs: u32,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Twiddles {
    Reference,
    Computed,
}

impl From<Twiddles> for TwiddleSource {
    fn from(value: Twiddles) -> Self {
        match value {
            Twiddles::Reference => TwiddleSource::Reference,
            Twiddles::Computed => TwiddleSource::Computed,
        }
    }
}

fn report(planner: &Planner, runs: usize) -> fftbench::Result<()> {
    let mut out = io::stdout().lock();
    run_bench(&mut out, planner, runs)?;
    out.flush()?;
    Ok(())
}

fn run(cli: &Cli) -> fftbench::Result<()> {
    let mut options = Options::with_initial_slices(cli.slices);
    options.twiddles = cli.twiddles.into();
    options.parallel = !cli.sequential;
    let planner = Planner::new(&options)?;
    let runs = cli.runs as usize;

    #[cfg(feature = "parallel")]
    {
        if let Some(threads) = cli.threads {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(usize::from(threads))
                .build()?;
            return pool.install(|| report(&planner, runs));
        }
    }

    report(&planner, runs)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
