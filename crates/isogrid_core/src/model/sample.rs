use serde::{Deserialize, Serialize};

use super::{CoordinateValue, MetricSet, ResultId};

/// One simulation run of a parameter space exploration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Value of the first swept parameter
    pub coordinate_x: CoordinateValue,
    /// Value of the second swept parameter
    pub coordinate_y: CoordinateValue,
    /// Identifier of the stored result, used to open an overlay for the run
    pub result_id: ResultId,
    /// Scalar metrics computed for the run
    #[serde(default)]
    pub metrics: MetricSet,
    /// Whether the operation producing this run has finished
    #[serde(default = "default_finished")]
    pub finished: bool,
}

fn default_finished() -> bool {
    true
}

impl Sample {
    pub fn new(
        coordinate_x: impl Into<CoordinateValue>,
        coordinate_y: impl Into<CoordinateValue>,
        result_id: impl Into<ResultId>,
        metrics: MetricSet,
    ) -> Self {
        Self {
            coordinate_x: coordinate_x.into(),
            coordinate_y: coordinate_y.into(),
            result_id: result_id.into(),
            metrics,
            finished: true,
        }
    }

    /// Mark the run as still in progress
    #[must_use]
    pub fn unfinished(mut self) -> Self {
        self.finished = false;
        self
    }
}
