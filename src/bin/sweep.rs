use structopt::StructOpt;

use percolation::{estimate_threshold, sweep, SweepConfig};

#[derive(Debug, StructOpt)]
#[structopt(name = "sweep", about = "Estimate the percolation threshold by sweeping p")]
struct Args {
    #[structopt(short = "L", long, default_value = "64")]
    size: usize,
    #[structopt(long, default_value = "0.0")]
    p_min: f64,
    #[structopt(long, default_value = "1.0")]
    p_max: f64,
    /// number of probabilities in the range
    #[structopt(long, default_value = "101")]
    steps: usize,
    /// realizations per probability
    #[structopt(long, default_value = "20")]
    trials: usize,
    #[structopt(long, default_value = "0")]
    seed: u64,
    /// rayon worker threads, all cores when absent
    #[structopt(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::from_args();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let config = SweepConfig::default()
        .size(args.size)
        .range(args.p_min, args.p_max)
        .steps(args.steps)
        .trials(args.trials)
        .seed(args.seed);

    let points = sweep(&config)?;

    println!("p\tmean_mass\tpercolating");
    for point in &points {
        println!(
            "{:.4}\t{:.4}\t{:.3}",
            point.p, point.mean_mass, point.percolation_fraction
        );
    }

    if let Some(best) = estimate_threshold(&points) {
        println!("estimated threshold: p = {:.4}", best.p);
    }

    Ok(())
}
