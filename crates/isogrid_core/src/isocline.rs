//! Isocline view over a parameter space exploration.
//!
//! `IsoclineModel` gathers the a priori axes and metric grids once, then
//! serves payloads for whichever metric the viewer selects.

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, normalize};
use crate::builder::{PseGrids, build_grid};
use crate::config::BuildOptions;
use crate::error::{AxisId, GridError, Result};
use crate::model::{CoordinateValue, MetricSet, ResultId, Sample};
use crate::orientation::{orient_for_display, orient_ids};
use crate::provider::{MetricsProvider, samples_from_provider};
use crate::summary::{IsoclinePayload, extremes, flatten_with_precision};

/// Per-result details shown when hovering a cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub result_id: ResultId,
    pub coordinate_x: CoordinateValue,
    pub coordinate_y: CoordinateValue,
    /// `[row, col]` in the unoriented grid
    pub cell: [usize; 2],
    pub metrics: MetricSet,
}

/// Axes and grids for one exploration
#[derive(Debug, Clone)]
pub struct IsoclineModel {
    x_name: String,
    y_name: String,
    axis_x: Axis,
    axis_y: Axis,
    grids: PseGrids,
    samples: Vec<Sample>,
}

impl IsoclineModel {
    /// Load and lay out every result of the exploration.
    ///
    /// Fails with `IncompleteExploration` while any run is still going.
    pub fn from_provider(provider: &dyn MetricsProvider, options: &BuildOptions) -> Result<Self> {
        if !provider.is_complete() {
            return Err(GridError::IncompleteExploration);
        }
        let samples = samples_from_provider(provider)?;
        Self::from_samples(provider.range1_key(), provider.range2_key(), samples, options)
    }

    pub fn from_samples(
        x_name: impl Into<String>,
        y_name: impl Into<String>,
        samples: Vec<Sample>,
        options: &BuildOptions,
    ) -> Result<Self> {
        if samples.iter().any(|s| !s.finished) {
            return Err(GridError::IncompleteExploration);
        }

        let xs: Vec<CoordinateValue> = samples.iter().map(|s| s.coordinate_x.clone()).collect();
        let ys: Vec<CoordinateValue> = samples.iter().map(|s| s.coordinate_y.clone()).collect();
        let axis_x = normalize(AxisId::X, &xs)?;
        let axis_y = normalize(AxisId::Y, &ys)?;

        let grids = build_grid(&samples, &axis_x, &axis_y, options.ordering)?;

        Ok(Self {
            x_name: x_name.into(),
            y_name: y_name.into(),
            axis_x,
            axis_y,
            grids,
            samples,
        })
    }

    pub fn axis_x(&self) -> &Axis {
        &self.axis_x
    }

    pub fn axis_y(&self) -> &Axis {
        &self.axis_y
    }

    pub fn grids(&self) -> &PseGrids {
        &self.grids
    }

    pub fn available_metrics(&self) -> &[String] {
        self.grids.metric_names()
    }

    /// Payload for `selected`, or for the first available metric when `None`.
    pub fn metric_matrix(
        &self,
        selected: Option<&str>,
        options: &BuildOptions,
    ) -> Result<IsoclinePayload> {
        let metric = match selected {
            Some(name) => name,
            None => self
                .grids
                .default_metric()
                .ok_or(GridError::NoMetrics)?,
        };
        let grid = self.grids.metric(metric)?;

        let oriented = orient_for_display(grid);
        let (vmin, vmax) = extremes(&oriented);
        let ids = orient_ids(self.grids.ids(), options.id_orientation);

        Ok(IsoclinePayload {
            matrix_data: flatten_with_precision(&oriented, options.precision),
            matrix_guids: ids.into_data().into_iter().map(|id| id.0).collect(),
            matrix_shape: [oriented.rows(), oriented.cols()],
            color_metric: metric.to_string(),
            x_axis_name: self.x_name.clone(),
            y_axis_name: self.y_name.clone(),
            available_metrics: self.grids.metric_names().to_vec(),
            x_min: self.axis_x.min(),
            x_max: self.axis_x.max(),
            y_min: self.axis_y.min(),
            y_max: self.axis_y.max(),
            vmin,
            vmax,
            x_labels: self.axis_x.labels().map(<[String]>::to_vec),
            y_labels: self.axis_y.labels().map(<[String]>::to_vec),
        })
    }

    /// Hover details for every result, in row-major grid order
    pub fn node_info(&self) -> Vec<NodeInfo> {
        self.grids
            .sample_indices()
            .iter()
            .map(|((row, col), &i)| {
                let sample = &self.samples[i];
                NodeInfo {
                    result_id: sample.result_id.clone(),
                    coordinate_x: sample.coordinate_x.clone(),
                    coordinate_y: sample.coordinate_y.clone(),
                    cell: [row, col],
                    metrics: sample.metrics.clone(),
                }
            })
            .collect()
    }
}
