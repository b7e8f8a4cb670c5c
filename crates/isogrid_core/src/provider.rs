//! Boundary to the layer that stores exploration results.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::model::{CoordinateValue, MetricSet, ResultId, Sample};

/// Source of the results of a two-parameter exploration.
///
/// `all_metrics`, `range1_interval` and `range2_interval` are aligned by
/// position: entry `i` of each describes the same run.
pub trait MetricsProvider {
    /// Metrics per result, in a fixed and reproducible order
    fn all_metrics(&self) -> Vec<(ResultId, MetricSet)>;

    /// Value of the first parameter for each result
    fn range1_interval(&self) -> Vec<CoordinateValue>;

    /// Value of the second parameter for each result
    fn range2_interval(&self) -> Vec<CoordinateValue>;

    /// Display name of the first parameter
    fn range1_key(&self) -> String;

    /// Display name of the second parameter
    fn range2_key(&self) -> String;

    /// Whether every operation of the exploration has finished
    fn is_complete(&self) -> bool {
        true
    }
}

/// Zip a provider's aligned sequences into samples.
pub fn samples_from_provider(provider: &dyn MetricsProvider) -> Result<Vec<Sample>> {
    let metrics = provider.all_metrics();
    let range1 = provider.range1_interval();
    let range2 = provider.range2_interval();

    if range1.len() != metrics.len() || range2.len() != metrics.len() {
        return Err(GridError::MisalignedRanges {
            metrics: metrics.len(),
            range1: range1.len(),
            range2: range2.len(),
        });
    }

    Ok(metrics
        .into_iter()
        .zip(range1)
        .zip(range2)
        .map(|(((result_id, metrics), x), y)| Sample {
            coordinate_x: x,
            coordinate_y: y,
            result_id,
            metrics,
            finished: true,
        })
        .collect())
}

/// In-memory exploration, as exported by the results store or written by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Name of the first swept parameter
    pub range1_key: String,
    /// Name of the second swept parameter
    pub range2_key: String,
    #[serde(default)]
    pub samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(range1_key: impl Into<String>, range2_key: impl Into<String>) -> Self {
        Self {
            range1_key: range1_key.into(),
            range2_key: range2_key.into(),
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sample(mut self, sample: Sample) -> Self {
        self.samples.push(sample);
        self
    }
}

impl MetricsProvider for SampleSet {
    fn all_metrics(&self) -> Vec<(ResultId, MetricSet)> {
        self.samples
            .iter()
            .map(|s| (s.result_id.clone(), s.metrics.clone()))
            .collect()
    }

    fn range1_interval(&self) -> Vec<CoordinateValue> {
        self.samples.iter().map(|s| s.coordinate_x.clone()).collect()
    }

    fn range2_interval(&self) -> Vec<CoordinateValue> {
        self.samples.iter().map(|s| s.coordinate_y.clone()).collect()
    }

    fn range1_key(&self) -> String {
        self.range1_key.clone()
    }

    fn range2_key(&self) -> String {
        self.range2_key.clone()
    }

    fn is_complete(&self) -> bool {
        self.samples.iter().all(|s| s.finished)
    }
}
