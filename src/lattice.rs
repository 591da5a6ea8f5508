use bitvec::prelude::BitVec;
use itertools::iproduct;

use crate::error::{check_size, PercolationError, Result};
use crate::site::SiteGrid;

/// L×L occupancy lattice, row-major, one bit per site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    sites: BitVec,
    size: usize,
}

impl Lattice {
    pub fn vacant(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            sites: BitVec::repeat(false, size * size),
            size,
        })
    }

    pub fn from_sites(size: usize, sites: BitVec) -> Result<Self> {
        check_size(size)?;
        if sites.len() != size * size {
            return Err(PercolationError::ShapeMismatch {
                expected: size * size,
                actual: sites.len(),
            });
        }
        Ok(Self { sites, size })
    }

    /// Lattice with exactly the listed `(row, col)` sites occupied.
    pub fn from_occupied(size: usize, occupied: &[(usize, usize)]) -> Result<Self> {
        let mut lattice = Self::vacant(size)?;
        for &(row, col) in occupied {
            if row >= size || col >= size {
                return Err(PercolationError::SiteOutOfBounds { row, col, size });
            }
            lattice.set((row, col), true);
        }
        Ok(lattice)
    }

    /// Parses rows of `#` (occupied) and `.` (vacant).
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let size = rows.len();
        let mut lattice = Self::vacant(size)?;
        for (i, row) in rows.iter().enumerate() {
            let width = row.chars().count();
            if width != size {
                return Err(PercolationError::ShapeMismatch {
                    expected: size,
                    actual: width,
                });
            }
            for (j, c) in row.chars().enumerate() {
                lattice.set((i, j), c == '#');
            }
        }
        Ok(lattice)
    }

    /// Only the occupied sites of a growth grid; undefined and vacant both map to vacant.
    pub fn occupied_of(grid: &SiteGrid) -> Self {
        Self {
            sites: grid.as_slice().iter().map(|s| s.is_occupied()).collect(),
            size: grid.size(),
        }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn is_occupied(&self, (row, col): (usize, usize)) -> bool {
        self.sites[row * self.size + col]
    }

    #[inline(always)]
    pub fn set(&mut self, (row, col): (usize, usize), occupied: bool) {
        self.sites.set(row * self.size + col, occupied);
    }

    pub fn occupied_count(&self) -> usize {
        self.sites.count_ones()
    }

    pub fn vacant_count(&self) -> usize {
        self.sites.count_zeros()
    }

    pub fn occupied_sites(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        iproduct!(0..self.size, 0..self.size).filter(move |&site| self.is_occupied(site))
    }
}

impl std::fmt::Display for Lattice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let c = if self.is_occupied((row, col)) { '#' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Site;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            Lattice::vacant(0),
            Err(PercolationError::InvalidDimension { size: 0 })
        );
    }

    #[test]
    fn rows_round_through_display() {
        let rows = ["#..", ".#.", "..#"];
        let lattice = Lattice::from_rows(&rows).unwrap();
        assert_eq!(lattice.occupied_count(), 3);
        assert_eq!(lattice.vacant_count(), 6);
        assert_eq!(lattice.to_string(), "#..\n.#.\n..#\n");
        assert_eq!(
            lattice.occupied_sites().collect::<Vec<_>>(),
            vec![(0, 0), (1, 1), (2, 2)]
        );
    }

    #[test]
    fn bad_shapes_are_errors() {
        assert_eq!(
            Lattice::from_occupied(2, &[(0, 1), (5, 5)]),
            Err(PercolationError::SiteOutOfBounds {
                row: 5,
                col: 5,
                size: 2
            })
        );
        assert_eq!(
            Lattice::from_occupied(3, &[(1, 3)]),
            Err(PercolationError::SiteOutOfBounds {
                row: 1,
                col: 3,
                size: 3
            })
        );
        assert_eq!(
            Lattice::from_rows(&["#.", "#.#"]),
            Err(PercolationError::ShapeMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            Lattice::from_sites(3, BitVec::repeat(true, 8)),
            Err(PercolationError::ShapeMismatch {
                expected: 9,
                actual: 8
            })
        );
        assert_eq!(
            Lattice::from_rows(&[]),
            Err(PercolationError::InvalidDimension { size: 0 })
        );
    }

    #[test]
    fn occupied_of_drops_undefined_sites() {
        let mut grid = SiteGrid::new(2, Site::Undefined);
        grid[(0, 1)] = Site::Occupied;
        grid[(1, 0)] = Site::Vacant;
        let lattice = Lattice::occupied_of(&grid);
        assert_eq!(lattice.occupied_sites().collect::<Vec<_>>(), vec![(0, 1)]);
    }
}
