pub mod config;
pub mod error;
pub mod frontier;
pub mod generators;
pub mod labeling;
pub mod lattice;
pub mod matrix;
pub mod site;
pub mod sweep;
pub mod union_find;

use rand::Rng;

pub use config::{GrowthConfig, SweepConfig};
pub use error::{PercolationError, Result};
pub use generators::{Growth, GrowthStatus, LatticeGenerator};
pub use labeling::{label_clusters, ClusterAnalysis, LabelGrid, Spanning};
pub use lattice::Lattice;
pub use site::{Site, SiteGrid};
pub use sweep::{estimate_threshold, sweep, SweepPoint};

/// Static site percolation on a `size`×`size` lattice.
pub fn generate_static<R: Rng + ?Sized>(size: usize, p: f64, rng: &mut R) -> Result<Lattice> {
    LatticeGenerator::uniform(size, p, rng)
}

/// Invasion growth from the lattice center, bounded by `max_passes` frontier passes.
pub fn generate_growth<R: Rng + ?Sized>(
    size: usize,
    p: f64,
    rng: &mut R,
    max_passes: usize,
) -> Result<Growth> {
    LatticeGenerator::growth(size, p, rng, GrowthConfig::default().max_passes(max_passes))
}
