use approx::assert_relative_eq;

use percolation::{estimate_threshold, sweep, PercolationError, SweepConfig};

fn small() -> SweepConfig {
    SweepConfig::default().size(16).steps(11).trials(6).seed(42)
}

#[test]
fn sweep_is_reproducible() {
    let a = sweep(&small()).unwrap();
    let b = sweep(&small()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 11);
}

#[test]
fn sweep_ends_are_exact() {
    let points = sweep(&small()).unwrap();

    let first = points.first().unwrap();
    assert_relative_eq!(first.p, 0.0);
    assert_relative_eq!(first.mean_mass, 0.0);
    assert_relative_eq!(first.percolation_fraction, 0.0);

    let last = points.last().unwrap();
    assert_relative_eq!(last.p, 1.0);
    assert_relative_eq!(last.mean_mass, 0.0);
    assert_relative_eq!(last.percolation_fraction, 1.0);
}

#[test]
fn threshold_lies_inside_the_range() {
    let config = small().range(0.3, 0.9).steps(13);
    let points = sweep(&config).unwrap();
    let best = estimate_threshold(&points).unwrap();
    assert!(best.mean_mass > 1.0);
    assert!((0.3..=0.9).contains(&best.p));
    assert!(points.iter().all(|p| p.mean_mass <= best.mean_mass));
}

#[test]
fn invalid_config_is_rejected() {
    assert_eq!(
        sweep(&small().size(0)),
        Err(PercolationError::InvalidDimension { size: 0 })
    );
    assert!(matches!(
        sweep(&small().range(0.8, 0.2)),
        Err(PercolationError::InvalidSweep(_))
    ));
    assert!(matches!(
        sweep(&small().range(0.2, 1.2)),
        Err(PercolationError::InvalidProbability { .. })
    ));
}
