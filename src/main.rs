use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use percolation::{label_clusters, GrowthConfig, GrowthStatus, LatticeGenerator};

#[derive(Debug, StructOpt)]
#[structopt(name = "percolation", about = "Site percolation on a square lattice")]
struct Args {
    /// lattice side length
    #[structopt(short = "L", long, default_value = "6")]
    size: usize,
    /// occupation probability
    #[structopt(short, long, default_value = "0.59725")]
    p: f64,
    /// random seed, drawn from the OS when absent
    #[structopt(long)]
    seed: Option<u64>,
    /// print the lattice
    #[structopt(long)]
    show: bool,
    #[structopt(subcommand)]
    mode: Mode,
}

#[derive(Debug, StructOpt)]
enum Mode {
    /// every site occupied independently
    Static,
    /// grow one cluster from the center
    Growth {
        /// safety bound on frontier passes
        #[structopt(long, default_value = "10000")]
        max_passes: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::from_args();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let lattice = match args.mode {
        Mode::Static => LatticeGenerator::uniform(args.size, args.p, &mut rng)?,
        Mode::Growth { max_passes } => {
            let config = GrowthConfig::default().max_passes(max_passes);
            let growth = LatticeGenerator::growth(args.size, args.p, &mut rng, config)?;

            println!(
                "growth: {:?} after {} passes, cluster mass {}, {} undefined sites",
                growth.status(),
                growth.passes(),
                growth.cluster_mass(),
                growth.undefined_count()
            );
            if growth.status() == GrowthStatus::BudgetExhausted {
                eprintln!("pass budget exhausted, rerun with a larger --max-passes");
            }
            growth.grown_cluster()
        }
    };

    if args.show {
        print!("{lattice}");
    }

    let analysis = label_clusters(&lattice).context("labeling failed")?;
    println!("clusters: {}", analysis.cluster_count());
    println!("vertical spanning: {:?}", analysis.spanning.vertical);
    println!("horizontal spanning: {:?}", analysis.spanning.horizontal);
    println!("mean finite mass: {}", analysis.mean_mass);

    Ok(())
}
