use crate::matrix::Matrix;

/// State of one lattice site during growth.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Site {
    #[default]
    Undefined,
    Vacant,
    Occupied,
}

impl Site {
    #[inline(always)]
    pub fn is_resolved(self) -> bool {
        self != Site::Undefined
    }

    #[inline(always)]
    pub fn is_occupied(self) -> bool {
        self == Site::Occupied
    }
}

impl From<bool> for Site {
    fn from(occupied: bool) -> Self {
        if occupied {
            Site::Occupied
        } else {
            Site::Vacant
        }
    }
}

pub type SiteGrid = Matrix<Site>;

/// Up to four in-bounds neighbors of `(i, j)` on a `size`×`size` lattice,
/// in the order right, left, down, up.
pub fn neighbors(size: usize, (i, j): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let candidates = [
        (j + 1 < size).then(|| (i, j + 1)),
        (j > 0).then(|| (i, j - 1)),
        (i + 1 < size).then(|| (i + 1, j)),
        (i > 0).then(|| (i - 1, j)),
    ];
    candidates.into_iter().flatten()
}
