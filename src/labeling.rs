//! Hoshen-Kopelman cluster labeling.
//!
//! Occupied sites first receive provisional labels in row-major order, then
//! every pair of neighboring labels is merged through a [`UnionFind`] so that
//! each cluster ends up carrying the smallest of its provisional labels.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::error::{check_size, Result};
use crate::lattice::Lattice;
use crate::matrix::Matrix;
use crate::union_find::UnionFind;

/// 0 marks a vacant site; positive values identify clusters.
pub type LabelGrid = Matrix<u32>;

/// Every occupied site gets its own label, counting from 1 in row-major order.
///
/// Lattice constructors cap the side length so every site fits a `u32` label.
pub fn provisional_labels(lattice: &Lattice) -> LabelGrid {
    let mut next = 0;
    Matrix::from_fn(lattice.size(), |row, col| {
        if lattice.is_occupied((row, col)) {
            next += 1;
            next
        } else {
            0
        }
    })
}

/// Labels of neighboring occupied sites.
///
/// Each site is paired with its right and lower neighbor, so every edge of
/// the lattice is visited once.
pub fn adjacent_pairs(labels: &LabelGrid) -> Vec<(u32, u32)> {
    let size = labels.size();
    let mut pairs = Vec::new();
    for row in 0..size {
        for col in 0..size {
            let label = labels[(row, col)];
            if label == 0 {
                continue;
            }
            if col + 1 < size && labels[(row, col + 1)] != 0 {
                pairs.push((label, labels[(row, col + 1)]));
            }
            if row + 1 < size && labels[(row + 1, col)] != 0 {
                pairs.push((label, labels[(row + 1, col)]));
            }
        }
    }
    pairs
}

/// Rewrites every label to the smallest label it is connected to through `pairs`.
///
/// Running it again on its own output with the same or freshly discovered
/// pairs leaves the grid unchanged. Pairs may name labels that no longer
/// occur in the grid.
pub fn merge_labels(labels: &mut LabelGrid, pairs: &[(u32, u32)]) {
    let max = labels
        .as_slice()
        .iter()
        .copied()
        .chain(pairs.iter().flat_map(|&(a, b)| [a, b]))
        .max()
        .unwrap_or(0);
    let mut sets = UnionFind::new(max);
    for &(a, b) in pairs {
        sets.union(a, b);
    }
    for label in labels.as_mut_slice() {
        if *label != 0 {
            *label = sets.find(*label);
        }
    }
}

/// Labels of clusters connecting opposite borders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spanning {
    /// Clusters touching both the top and the bottom row.
    pub vertical: BTreeSet<u32>,
    /// Clusters touching both the left and the right column.
    pub horizontal: BTreeSet<u32>,
}

impl Spanning {
    pub fn from_labels(labels: &LabelGrid) -> Self {
        let size = labels.size();
        if size == 0 {
            return Self::default();
        }

        let top = occupied(labels.row(0).iter());
        let bottom = occupied(labels.row(size - 1).iter());
        let left = occupied(labels.col(0));
        let right = occupied(labels.col(size - 1));

        Self {
            vertical: top.intersection(&bottom).copied().collect(),
            horizontal: left.intersection(&right).copied().collect(),
        }
    }

    pub fn labels(&self) -> BTreeSet<u32> {
        self.vertical.union(&self.horizontal).copied().collect()
    }

    pub fn contains(&self, label: u32) -> bool {
        self.vertical.contains(&label) || self.horizontal.contains(&label)
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

fn occupied<'a>(border: impl Iterator<Item = &'a u32>) -> BTreeSet<u32> {
    border.copied().filter(|&l| l != 0).collect()
}

#[derive(Debug, Clone)]
pub struct ClusterAnalysis {
    pub labels: LabelGrid,
    /// Site count per canonical label.
    pub masses: BTreeMap<u32, usize>,
    pub spanning: Spanning,
    /// Mean mass of the clusters that do not span; 0 when there are none.
    pub mean_mass: f64,
}

impl ClusterAnalysis {
    pub fn from_labels(labels: LabelGrid) -> Self {
        let mut masses = BTreeMap::new();
        for &label in labels.as_slice().iter().filter(|&&l| l != 0) {
            *masses.entry(label).or_insert(0usize) += 1;
        }

        let spanning = Spanning::from_labels(&labels);

        let (count, total) = masses
            .iter()
            .filter(|(label, _)| !spanning.contains(**label))
            .fold((0usize, 0usize), |(count, total), (_, mass)| {
                (count + 1, total + mass)
            });
        let mean_mass = if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        };

        Self {
            labels,
            masses,
            spanning,
            mean_mass,
        }
    }

    pub fn cluster_count(&self) -> usize {
        self.masses.len()
    }

    pub fn percolates(&self) -> bool {
        !self.spanning.is_empty()
    }

    pub fn mass_of(&self, label: u32) -> Option<usize> {
        self.masses.get(&label).copied()
    }

    /// Clusters that do not span, with their masses.
    pub fn finite_clusters(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.masses
            .iter()
            .filter(move |(label, _)| !self.spanning.contains(**label))
            .map(|(label, mass)| (*label, *mass))
    }

    pub fn finite_mass(&self) -> usize {
        self.finite_clusters().map(|(_, mass)| mass).sum()
    }

    pub fn spanning_mass(&self) -> usize {
        self.spanning
            .labels()
            .iter()
            .filter_map(|label| self.mass_of(*label))
            .sum()
    }

    pub fn vacant_count(&self) -> usize {
        self.labels.as_slice().iter().filter(|&&l| l == 0).count()
    }
}

/// Labels the clusters of `lattice` and collects their statistics.
pub fn label_clusters(lattice: &Lattice) -> Result<ClusterAnalysis> {
    check_size(lattice.size())?;
    measure_time::debug_time!("labeling {}x{}", lattice.size(), lattice.size());

    let mut labels = provisional_labels(lattice);
    let pairs = adjacent_pairs(&labels);
    merge_labels(&mut labels, &pairs);

    let analysis = ClusterAnalysis::from_labels(labels);
    debug!(
        "{} clusters, {} spanning, mean finite mass {}",
        analysis.cluster_count(),
        analysis.spanning.labels().len(),
        analysis.mean_mass
    );
    Ok(analysis)
}
