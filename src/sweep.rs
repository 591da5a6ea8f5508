use log::info;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::SweepConfig;
use crate::error::Result;
use crate::generators::LatticeGenerator;
use crate::labeling::label_clusters;

/// Averages over all realizations at one occupation probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub p: f64,
    pub mean_mass: f64,
    /// Fraction of realizations with at least one spanning cluster.
    pub percolation_fraction: f64,
}

#[derive(Debug, Clone, Copy)]
struct Realization {
    mean_mass: f64,
    percolates: bool,
}

fn realize(size: usize, p: f64, seed: u64) -> Result<Realization> {
    let mut rng = StdRng::seed_from_u64(seed);
    let lattice = LatticeGenerator::uniform(size, p, &mut rng)?;
    let analysis = label_clusters(&lattice)?;
    Ok(Realization {
        mean_mass: analysis.mean_mass,
        percolates: analysis.percolates(),
    })
}

/// Runs `trials` static realizations per probability, each on its own random stream.
pub fn sweep(config: &SweepConfig) -> Result<Vec<SweepPoint>> {
    config.validate()?;
    measure_time::info_time!(
        "sweep of {} probabilities x {} trials on {}x{}",
        config.steps,
        config.trials,
        config.size,
        config.size
    );

    let probabilities = config.probabilities();

    // Seeds are drawn up front so results do not depend on thread scheduling.
    let mut master = StdRng::seed_from_u64(config.seed);
    let runs: Vec<(usize, f64, u64)> = probabilities
        .iter()
        .enumerate()
        .flat_map(|(k, &p)| (0..config.trials).map(move |_| (k, p)))
        .map(|(k, p)| (k, p, master.gen()))
        .collect();

    let realizations = runs
        .into_par_iter()
        .map(|(k, p, seed)| realize(config.size, p, seed).map(|r| (k, r)))
        .collect::<Result<Vec<_>>>()?;

    let mut sums = vec![(0.0f64, 0usize); probabilities.len()];
    for (k, r) in realizations {
        sums[k].0 += r.mean_mass;
        if r.percolates {
            sums[k].1 += 1;
        }
    }

    let trials = config.trials as f64;
    let points: Vec<_> = probabilities
        .into_iter()
        .zip(sums)
        .map(|(p, (mass, spanning))| SweepPoint {
            p,
            mean_mass: mass / trials,
            percolation_fraction: spanning as f64 / trials,
        })
        .collect();

    if let Some(best) = estimate_threshold(&points) {
        info!(
            "largest mean finite mass {:.3} at p = {:.4}",
            best.mean_mass, best.p
        );
    }
    Ok(points)
}

/// The sweep point with the largest mean finite-cluster mass.
pub fn estimate_threshold(points: &[SweepPoint]) -> Option<SweepPoint> {
    points
        .iter()
        .copied()
        .max_by_key(|point| OrderedFloat(point.mean_mass))
}
