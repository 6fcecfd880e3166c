use clap::Parser;
use log::{info, warn};
use rand::{rngs::SmallRng, SeedableRng};

use approximator::pairs::parse_pairs;
use approximator::{search, Outcome, Response, SearchParams};

/// Find a formula through the given samples and print it as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Samples as `x,y;x,y;...`
    key: String,

    /// Maximum number of candidates to try
    #[arg(short, long, default_value_t = SearchParams::default().iterations)]
    iterations: usize,

    /// Stop once the total absolute error is below this
    #[arg(short, long, default_value_t = SearchParams::default().threshold)]
    threshold: f64,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    colog::init();

    let args = Args::parse();
    let pairs = parse_pairs(&args.key)?;
    info!("Approximating {} samples", pairs.len());

    let params = SearchParams {
        iterations: args.iterations,
        threshold: args.threshold,
        ..SearchParams::default()
    };
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let approximation = search(&params, &pairs, &mut rng, |_| ());

    match approximation.outcome(params.threshold) {
        Outcome::Exact => info!(
            "Exact match after {} iterations",
            approximation.iterations_used
        ),
        Outcome::Approximate => info!(
            "Best error {} after {} iterations",
            approximation.error, approximation.iterations_used
        ),
        Outcome::NotFound => warn!("No candidate with a finite error was found"),
    }

    println!(
        "{}",
        serde_json::to_string(&Response::from(&approximation))?
    );
    Ok(())
}
