use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PercolationError {
    #[error("lattice size must be positive, got {size}")]
    InvalidDimension { size: usize },
    #[error("occupation probability {p} must be between 0.0 and 1.0")]
    InvalidProbability { p: f64 },
    #[error("lattice size {size} has more sites than cluster labels can number")]
    LatticeTooLarge { size: usize },
    #[error("site ({row}, {col}) lies outside a {size}x{size} lattice")]
    SiteOutOfBounds { row: usize, col: usize, size: usize },
    #[error("expected {expected} sites, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("invalid sweep configuration: {0}")]
    InvalidSweep(&'static str),
}

pub type Result<T> = std::result::Result<T, PercolationError>;

/// Rejects empty lattices and lattices whose sites cannot all get a `u32` label.
pub(crate) fn check_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(PercolationError::InvalidDimension { size });
    }
    match size.checked_mul(size) {
        Some(sites) if u32::try_from(sites).is_ok() => Ok(()),
        _ => Err(PercolationError::LatticeTooLarge { size }),
    }
}

pub(crate) fn check_probability(p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(PercolationError::InvalidProbability { p });
    }
    Ok(())
}
