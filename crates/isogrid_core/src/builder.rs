//! Grid filling: lays out sample metrics and result identifiers as dense 2D
//! grids over the normalized axes.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::axis::Axis;
use crate::config::SampleOrdering;
use crate::error::{AxisId, GridError, Result};
use crate::grid::Grid;
use crate::model::{ResultId, Sample};

/// Metric grids and the identifier grid for one exploration.
///
/// Metric cells are `None` where the run did not produce the metric.
#[derive(Debug, Clone, PartialEq)]
pub struct PseGrids {
    metric_names: Vec<String>,
    metric_grids: Vec<Grid<Option<f64>>>,
    ids: Grid<ResultId>,
    sample_at: Grid<usize>,
}

impl PseGrids {
    /// Metric names in the order of the first sample's metric set
    pub fn metric_names(&self) -> &[String] {
        &self.metric_names
    }

    /// Metric shown when the caller doesn't pick one
    pub fn default_metric(&self) -> Option<&str> {
        self.metric_names.first().map(String::as_str)
    }

    pub fn metric(&self, name: &str) -> Result<&Grid<Option<f64>>> {
        self.metric_names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.metric_grids[i])
            .ok_or_else(|| GridError::MissingMetric(name.to_string()))
    }

    /// `(name, grid)` pairs in metric order
    pub fn metrics(&self) -> impl Iterator<Item = (&str, &Grid<Option<f64>>)> {
        self.metric_names
            .iter()
            .map(String::as_str)
            .zip(self.metric_grids.iter())
    }

    pub fn ids(&self) -> &Grid<ResultId> {
        &self.ids
    }

    pub fn shape(&self) -> (usize, usize) {
        self.ids.shape()
    }

    /// Index into the input samples of the run occupying each cell
    pub fn sample_indices(&self) -> &Grid<usize> {
        &self.sample_at
    }
}

/// Build one grid per metric plus the identifier grid.
///
/// The sample count must equal `axis_x.len() * axis_y.len()`; a sweep with
/// missing or extra runs is rejected rather than reshaped.
pub fn build_grid(
    samples: &[Sample],
    axis_x: &Axis,
    axis_y: &Axis,
    ordering: SampleOrdering,
) -> Result<PseGrids> {
    let (rows, cols) = (axis_x.len(), axis_y.len());
    if samples.len() != rows * cols || samples.is_empty() {
        return Err(GridError::ShapeMismatch {
            rows,
            cols,
            samples: samples.len(),
        });
    }

    // sample_at[cell] = index of the sample occupying that cell
    let sample_at: Vec<usize> = match ordering {
        SampleOrdering::Upstream => (0..samples.len()).collect(),
        SampleOrdering::ByCoordinate => place_by_coordinate(samples, axis_x, axis_y)?,
    };

    let ids = Grid::from_fn(rows, cols, |r, c| {
        samples[sample_at[r * cols + c]].result_id.clone()
    });

    let metric_names: Vec<String> = samples[0].metrics.names().map(str::to_string).collect();

    let fill = |name: &String| -> Grid<Option<f64>> {
        Grid::from_fn(rows, cols, |r, c| {
            samples[sample_at[r * cols + c]].metrics.get(name)
        })
    };

    #[cfg(feature = "parallel")]
    let metric_grids: Vec<Grid<Option<f64>>> = metric_names.par_iter().map(fill).collect();

    #[cfg(not(feature = "parallel"))]
    let metric_grids: Vec<Grid<Option<f64>>> = metric_names.iter().map(fill).collect();

    Ok(PseGrids {
        metric_names,
        metric_grids,
        ids,
        sample_at: Grid::from_data(rows, cols, sample_at)?,
    })
}

/// Map every cell to the sample whose coordinates select it.
///
/// With the count already checked, rejecting duplicates guarantees every
/// cell is covered exactly once.
fn place_by_coordinate(samples: &[Sample], axis_x: &Axis, axis_y: &Axis) -> Result<Vec<usize>> {
    let cols = axis_y.len();
    let mut sample_at = vec![usize::MAX; samples.len()];

    for (i, sample) in samples.iter().enumerate() {
        let row = axis_x
            .position(&sample.coordinate_x)
            .ok_or_else(|| GridError::UnknownCoordinate {
                axis: AxisId::X,
                value: sample.coordinate_x.to_string(),
            })?;
        let col = axis_y
            .position(&sample.coordinate_y)
            .ok_or_else(|| GridError::UnknownCoordinate {
                axis: AxisId::Y,
                value: sample.coordinate_y.to_string(),
            })?;

        let cell = &mut sample_at[row * cols + col];
        if *cell != usize::MAX {
            return Err(GridError::DuplicateCell { row, col });
        }
        *cell = i;
    }

    Ok(sample_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::normalize;
    use crate::model::{CoordinateValue, MetricSet};

    fn sample(x: f64, y: f64, id: &str, m: Option<f64>) -> Sample {
        Sample::new(x, y, id, MetricSet::new().with("m", m))
    }

    fn axes(samples: &[Sample]) -> (Axis, Axis) {
        let xs: Vec<CoordinateValue> = samples.iter().map(|s| s.coordinate_x.clone()).collect();
        let ys: Vec<CoordinateValue> = samples.iter().map(|s| s.coordinate_y.clone()).collect();
        (
            normalize(AxisId::X, &xs).unwrap(),
            normalize(AxisId::Y, &ys).unwrap(),
        )
    }

    #[test]
    fn test_upstream_ordering_reshapes_as_given() {
        // enumerated y-first: upstream mode doesn't look at coordinates
        let samples = vec![
            sample(0.0, 0.0, "a", Some(1.0)),
            sample(1.0, 0.0, "b", Some(2.0)),
            sample(0.0, 1.0, "c", Some(3.0)),
            sample(1.0, 1.0, "d", Some(4.0)),
        ];
        let (ax, ay) = axes(&samples);
        let grids = build_grid(&samples, &ax, &ay, SampleOrdering::Upstream).unwrap();
        assert_eq!(
            grids.metric("m").unwrap().to_rows(),
            vec![vec![Some(1.0), Some(2.0)], vec![Some(3.0), Some(4.0)]]
        );

        let grids = build_grid(&samples, &ax, &ay, SampleOrdering::ByCoordinate).unwrap();
        assert_eq!(
            grids.metric("m").unwrap().to_rows(),
            vec![vec![Some(1.0), Some(3.0)], vec![Some(2.0), Some(4.0)]]
        );
        assert_eq!(grids.ids().get(1, 0), Some(&ResultId::from("b")));
    }

    #[test]
    fn test_duplicate_cell_rejected() {
        let samples = vec![
            sample(0.0, 0.0, "a", Some(1.0)),
            sample(0.0, 0.0, "b", Some(2.0)),
            sample(1.0, 1.0, "c", Some(3.0)),
            sample(1.0, 1.0, "d", Some(4.0)),
        ];
        let (ax, ay) = axes(&samples);
        assert_eq!(
            build_grid(&samples, &ax, &ay, SampleOrdering::ByCoordinate).unwrap_err(),
            GridError::DuplicateCell { row: 0, col: 0 }
        );
    }

    #[test]
    fn test_coordinate_off_axis() {
        let samples = vec![sample(0.0, 0.0, "a", Some(1.0))];
        let (ax, ay) = axes(&samples);
        let other = vec![sample(5.0, 0.0, "z", Some(1.0))];
        assert!(matches!(
            build_grid(&other, &ax, &ay, SampleOrdering::ByCoordinate),
            Err(GridError::UnknownCoordinate { axis: AxisId::X, .. })
        ));
    }

    #[test]
    fn test_metric_absent_in_later_sample_is_missing() {
        let samples = vec![
            Sample::new(0.0, 0.0, "a", MetricSet::new().with("m", Some(1.0))),
            Sample::new(0.0, 1.0, "b", MetricSet::new()),
        ];
        let (ax, ay) = axes(&samples);
        let grids = build_grid(&samples, &ax, &ay, SampleOrdering::ByCoordinate).unwrap();
        assert_eq!(grids.metric("m").unwrap().data(), &[Some(1.0), None]);
    }

    #[test]
    fn test_unknown_metric() {
        let samples = vec![sample(0.0, 0.0, "a", Some(1.0))];
        let (ax, ay) = axes(&samples);
        let grids = build_grid(&samples, &ax, &ay, SampleOrdering::ByCoordinate).unwrap();
        assert_eq!(
            grids.metric("nope").unwrap_err(),
            GridError::MissingMetric("nope".into())
        );
        assert_eq!(grids.default_metric(), Some("m"));
    }
}
