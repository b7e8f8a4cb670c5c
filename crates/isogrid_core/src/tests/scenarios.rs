//! Tests for reference explorations
//!
//! These tests verify:
//! - Axes and grids of complete numeric and label sweeps
//! - Shape checks on incomplete sweeps
//! - Missing metric values

use super::sweep;
use crate::axis::normalize;
use crate::builder::build_grid;
use crate::config::SampleOrdering;
use crate::error::{AxisId, GridError};
use crate::model::{CoordinateValue, MetricSet, Sample};
use crate::summary::extremes;

fn axes_of(samples: &[Sample]) -> Result<(crate::axis::Axis, crate::axis::Axis), GridError> {
    let xs: Vec<CoordinateValue> = samples.iter().map(|s| s.coordinate_x.clone()).collect();
    let ys: Vec<CoordinateValue> = samples.iter().map(|s| s.coordinate_y.clone()).collect();
    Ok((normalize(AxisId::X, &xs)?, normalize(AxisId::Y, &ys)?))
}

/// 2x2 numeric sweep lands in row-major order
#[test]
fn test_complete_numeric_sweep() {
    let samples = vec![
        Sample::new(0.0, 0.0, "a", MetricSet::new().with("m", Some(1.0))),
        Sample::new(0.0, 1.0, "b", MetricSet::new().with("m", Some(2.0))),
        Sample::new(1.0, 0.0, "c", MetricSet::new().with("m", Some(3.0))),
        Sample::new(1.0, 1.0, "d", MetricSet::new().with("m", Some(4.0))),
    ];
    let (ax, ay) = axes_of(&samples).unwrap();
    assert_eq!(ax.ticks(), &[0.0, 1.0]);
    assert_eq!(ay.ticks(), &[0.0, 1.0]);

    for ordering in [SampleOrdering::ByCoordinate, SampleOrdering::Upstream] {
        let grids = build_grid(&samples, &ax, &ay, ordering).unwrap();
        assert_eq!(
            grids.metric("m").unwrap().to_rows(),
            vec![vec![Some(1.0), Some(2.0)], vec![Some(3.0), Some(4.0)]]
        );
    }
}

/// Label coordinates are replaced by category indices
#[test]
fn test_label_sweep() {
    let samples = vec![
        Sample::new("A", 0.0, "a", MetricSet::new().with("m", Some(1.0))),
        Sample::new("A", 1.0, "b", MetricSet::new().with("m", Some(2.0))),
        Sample::new("B", 0.0, "c", MetricSet::new().with("m", Some(3.0))),
        Sample::new("B", 1.0, "d", MetricSet::new().with("m", Some(4.0))),
    ];
    let (ax, ay) = axes_of(&samples).unwrap();
    assert_eq!(ax.ticks(), &[0.0, 1.0]);
    assert!(ax.is_categorical());
    assert!(!ay.is_categorical());

    let grids = build_grid(&samples, &ax, &ay, SampleOrdering::ByCoordinate).unwrap();
    assert_eq!(
        grids.metric("m").unwrap().to_rows(),
        vec![vec![Some(1.0), Some(2.0)], vec![Some(3.0), Some(4.0)]]
    );
}

/// An m x n sweep gives m x n grids and axes of length m and n
#[test]
fn test_shape_follows_axes() {
    let xs = [0.5, 1.0, 1.5, 2.0, 2.5];
    let ys = [10.0, 20.0, 30.0];
    let samples = sweep(&xs, &ys, |i, j| Some((i * 10 + j) as f64));
    let (ax, ay) = axes_of(&samples).unwrap();
    assert_eq!((ax.len(), ay.len()), (5, 3));

    let grids = build_grid(&samples, &ax, &ay, SampleOrdering::ByCoordinate).unwrap();
    assert_eq!(grids.shape(), (5, 3));
    assert_eq!(grids.metric("m").unwrap().get(4, 2), Some(&Some(42.0)));
}

/// Three runs can't fill a 2x2 grid
#[test]
fn test_incomplete_sweep_is_shape_mismatch() {
    let samples = vec![
        Sample::new(0.0, 0.0, "a", MetricSet::new().with("m", Some(1.0))),
        Sample::new(0.0, 1.0, "b", MetricSet::new().with("m", Some(2.0))),
        Sample::new(1.0, 0.0, "c", MetricSet::new().with("m", Some(3.0))),
    ];
    let (ax, ay) = axes_of(&samples).unwrap();
    assert_eq!(
        build_grid(&samples, &ax, &ay, SampleOrdering::ByCoordinate).unwrap_err(),
        GridError::ShapeMismatch {
            rows: 2,
            cols: 2,
            samples: 3
        }
    );
}

/// Null metric values become empty cells and don't count towards the extremes
#[test]
fn test_null_metric_value() {
    let samples = sweep(&[0.0, 1.0], &[0.0, 1.0], |i, j| {
        if i == 1 && j == 1 {
            None
        } else {
            Some((i + j) as f64)
        }
    });
    let (ax, ay) = axes_of(&samples).unwrap();
    let grids = build_grid(&samples, &ax, &ay, SampleOrdering::ByCoordinate).unwrap();
    let grid = grids.metric("m").unwrap();
    assert_eq!(grid.get(1, 1), Some(&None));
    assert_eq!(extremes(grid), (0.0, 1.0));
}

/// No runs at all fails before any grid is attempted
#[test]
fn test_empty_exploration() {
    assert_eq!(
        axes_of(&[]).unwrap_err(),
        GridError::EmptyAxis { axis: AxisId::X }
    );
}
