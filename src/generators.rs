use log::{debug, warn};
use rand::Rng;

use crate::config::GrowthConfig;
use crate::error::{check_probability, check_size, Result};
use crate::frontier::Frontier;
use crate::lattice::Lattice;
use crate::site::{neighbors, Site, SiteGrid};

pub struct LatticeGenerator;

impl LatticeGenerator {
    /// Static percolation: every site is occupied independently with probability `p`.
    ///
    /// Draws exactly `size * size` numbers from `rng`, row by row.
    pub fn uniform<R: Rng + ?Sized>(size: usize, p: f64, rng: &mut R) -> Result<Lattice> {
        check_size(size)?;
        check_probability(p)?;

        let sites = (0..size * size).map(|_| rng.gen::<f64>() < p).collect();
        let lattice = Lattice::from_sites(size, sites)?;

        debug!(
            "static lattice {}x{} at p = {}: {} occupied",
            size,
            size,
            p,
            lattice.occupied_count()
        );
        Ok(lattice)
    }

    /// Invasion growth of a single cluster from the lattice center.
    ///
    /// The border ring starts vacant, the center starts occupied and the
    /// frontier is worked off in passes until it drains or
    /// `config.max_passes` passes have run.
    pub fn growth<R: Rng + ?Sized>(
        size: usize,
        p: f64,
        rng: &mut R,
        config: GrowthConfig,
    ) -> Result<Growth> {
        check_size(size)?;
        check_probability(p)?;
        measure_time::debug_time!("growth {}x{} at p = {}", size, size, p);

        let mut grid = SiteGrid::new(size, Site::Undefined);
        for k in 0..size {
            grid[(0, k)] = Site::Vacant;
            grid[(k, 0)] = Site::Vacant;
            grid[(size - 1, k)] = Site::Vacant;
            grid[(k, size - 1)] = Site::Vacant;
        }

        let center = (size / 2, size / 2);
        grid[center] = Site::Occupied;

        let mut frontier = Frontier::with_capacity(4 * size);
        for site in seed_sites(size, center) {
            frontier.push(site);
        }

        let mut passes = 0;
        while !frontier.is_empty() && passes < config.max_passes {
            passes += 1;
            let pending = frontier.len();
            for _ in 0..pending {
                if let Some(site) = frontier.pop() {
                    resolve(&mut grid, &mut frontier, site, p, rng);
                }
            }
        }

        let undefined = grid.as_slice().iter().filter(|s| !s.is_resolved()).count();
        let status = if undefined == 0 {
            GrowthStatus::Complete
        } else if frontier.is_empty() {
            GrowthStatus::Enclosed
        } else {
            GrowthStatus::BudgetExhausted
        };

        if status == GrowthStatus::BudgetExhausted {
            warn!(
                "growth stopped after {} passes with {} frontier sites pending",
                passes,
                frontier.len()
            );
        }
        debug!(
            "growth finished: {:?} after {} passes, {} undefined sites, {} frontier insertions",
            status,
            passes,
            undefined,
            frontier.inserted()
        );

        Ok(Growth {
            grid,
            status,
            passes,
            frontier_insertions: frontier.inserted(),
        })
    }
}

/// In-bounds neighbors of the seed, in the order below, right, above, left.
fn seed_sites(size: usize, (i, j): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let candidates = [
        (i + 1 < size).then(|| (i + 1, j)),
        (j + 1 < size).then(|| (i, j + 1)),
        (i > 0).then(|| (i - 1, j)),
        (j > 0).then(|| (i, j - 1)),
    ];
    candidates.into_iter().flatten()
}

fn resolve<R: Rng + ?Sized>(
    grid: &mut SiteGrid,
    frontier: &mut Frontier,
    site: (usize, usize),
    p: f64,
    rng: &mut R,
) {
    if grid[site].is_resolved() {
        return;
    }

    if rng.gen::<f64>() < p {
        grid[site] = Site::Occupied;
        for neighbor in neighbors(grid.size(), site) {
            if grid[neighbor] == Site::Undefined {
                frontier.push(neighbor);
            }
        }
    } else {
        grid[site] = Site::Vacant;
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GrowthStatus {
    /// Every site is occupied or vacant.
    Complete,
    /// The frontier drained but sites never touched by the cluster are still undefined.
    Enclosed,
    /// The pass bound ran out with frontier sites still pending.
    BudgetExhausted,
}

#[derive(Debug, Clone)]
pub struct Growth {
    grid: SiteGrid,
    status: GrowthStatus,
    passes: usize,
    frontier_insertions: usize,
}

impl Growth {
    #[inline(always)]
    pub fn grid(&self) -> &SiteGrid {
        &self.grid
    }

    #[inline(always)]
    pub fn status(&self) -> GrowthStatus {
        self.status
    }

    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.status == GrowthStatus::Complete
    }

    #[inline(always)]
    pub fn passes(&self) -> usize {
        self.passes
    }

    #[inline(always)]
    pub fn frontier_insertions(&self) -> usize {
        self.frontier_insertions
    }

    pub fn undefined_count(&self) -> usize {
        self.grid
            .as_slice()
            .iter()
            .filter(|s| !s.is_resolved())
            .count()
    }

    pub fn cluster_mass(&self) -> usize {
        self.grid
            .as_slice()
            .iter()
            .filter(|s| s.is_occupied())
            .count()
    }

    /// The occupancy lattice, available only when no site is left undefined.
    pub fn to_lattice(&self) -> Option<Lattice> {
        self.is_complete().then(|| Lattice::occupied_of(&self.grid))
    }

    /// Occupied sites only, whatever the status.
    pub fn grown_cluster(&self) -> Lattice {
        Lattice::occupied_of(&self.grid)
    }

    pub fn into_grid(self) -> SiteGrid {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seed_sites_are_clipped_on_tiny_lattices() {
        assert_eq!(seed_sites(1, (0, 0)).count(), 0);
        assert_eq!(seed_sites(2, (1, 1)).collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_eq!(
            seed_sites(5, (2, 2)).collect::<Vec<_>>(),
            vec![(3, 2), (2, 3), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn resolve_skips_resolved_sites_without_drawing() {
        let mut grid = SiteGrid::new(3, Site::Vacant);
        let mut frontier = Frontier::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut control = rng.clone();

        resolve(&mut grid, &mut frontier, (1, 1), 1.0, &mut rng);
        assert_eq!(grid[(1, 1)], Site::Vacant);
        assert_eq!(rng.gen::<u64>(), control.gen::<u64>());
    }

    #[test]
    fn occupied_site_enqueues_undefined_neighbors() {
        let mut grid = SiteGrid::new(3, Site::Undefined);
        grid[(0, 1)] = Site::Vacant;
        let mut frontier = Frontier::new();
        let mut rng = StdRng::seed_from_u64(2);

        resolve(&mut grid, &mut frontier, (1, 1), 1.0, &mut rng);
        assert_eq!(grid[(1, 1)], Site::Occupied);
        let queued: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(queued, vec![(1, 2), (1, 0), (2, 1)]);
    }

    #[test]
    fn budget_of_zero_passes_leaves_frontier_pending() {
        let mut rng = StdRng::seed_from_u64(3);
        let growth =
            LatticeGenerator::growth(7, 0.5, &mut rng, GrowthConfig::default().max_passes(0))
                .unwrap();
        assert_eq!(growth.status(), GrowthStatus::BudgetExhausted);
        assert_eq!(growth.passes(), 0);
        assert_eq!(growth.cluster_mass(), 1);
        assert!(growth.to_lattice().is_none());
    }
}
