use std::ops::{Index, IndexMut};

/// Square row-major matrix addressed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    memory: Vec<T>,
    size: usize,
}

impl<T: Clone> Matrix<T> {
    #[inline(always)]
    pub fn new(size: usize, value: T) -> Self {
        let memory = std::iter::repeat(value).take(size * size).collect();
        Self { memory, size }
    }
}

impl<T> Matrix<T> {
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut memory = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                memory.push(f(row, col));
            }
        }
        Self { memory, size }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn row(&self, row: usize) -> &[T] {
        &self.memory[row * self.size..(row + 1) * self.size]
    }

    pub fn col(&self, col: usize) -> impl Iterator<Item = &T> + '_ {
        self.memory.iter().skip(col).step_by(self.size.max(1))
    }

    #[inline(always)]
    pub fn get(&self, (row, col): (usize, usize)) -> Option<&T> {
        if row < self.size && col < self.size {
            self.memory.get(row * self.size + col)
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.memory
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.memory
    }

    /// Cells in row-major order together with their coordinates.
    pub fn indexed(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let size = self.size;
        self.memory
            .iter()
            .enumerate()
            .map(move |(k, v)| ((k / size, k % size), v))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.memory[index.0 * self.size + index.1]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.memory[index.0 * self.size + index.1]
    }
}
