//! Axis normalization: turns the raw coordinate values observed along one
//! swept parameter into ordered plot ticks.
//!
//! Numeric ranges keep their sorted unique values. Label ranges are replaced
//! by their category index `0..N-1` over the sorted unique labels, with the
//! labels kept alongside for display. Sorting is explicit so the result never
//! depends on the order the upstream layer enumerated its runs in.

use rustc_hash::FxHashMap;

use crate::error::{AxisId, GridError, Result};
use crate::model::{CoordinateKey, CoordinateValue, cmp_numeric};

/// Ordered ticks for one dimension of the exploration grid
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    id: AxisId,
    ticks: Vec<f64>,
    labels: Option<Vec<String>>,
    positions: FxHashMap<CoordinateKey, usize>,
}

/// Build the axis for one dimension from every value observed along it.
///
/// Duplicates are expected: each value repeats once per distinct value of
/// the other dimension.
pub fn normalize(id: AxisId, values: &[CoordinateValue]) -> Result<Axis> {
    let first = values.first().ok_or(GridError::EmptyAxis { axis: id })?;

    if first.is_label() {
        let mut labels = Vec::with_capacity(values.len());
        for value in values {
            match value {
                CoordinateValue::Label(label) => labels.push(label.clone()),
                CoordinateValue::Numeric(_) => return Err(GridError::MixedAxisKinds { axis: id }),
            }
        }
        labels.sort_unstable();
        labels.dedup();

        let positions = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (CoordinateKey::Label(label.clone()), i))
            .collect();
        let ticks = (0..labels.len()).map(|i| i as f64).collect();
        return Ok(Axis {
            id,
            ticks,
            labels: Some(labels),
            positions,
        });
    }

    let mut ticks = Vec::with_capacity(values.len());
    for value in values {
        match value {
            CoordinateValue::Numeric(v) if v.is_nan() => {
                return Err(GridError::NanCoordinate { axis: id });
            }
            CoordinateValue::Numeric(v) => ticks.push(*v),
            CoordinateValue::Label(_) => return Err(GridError::MixedAxisKinds { axis: id }),
        }
    }
    ticks.sort_unstable_by(|a, b| cmp_numeric(*a, *b));
    ticks.dedup_by(|a, b| cmp_numeric(*a, *b).is_eq());

    let positions = ticks
        .iter()
        .enumerate()
        .map(|(i, v)| (CoordinateValue::Numeric(*v).key(), i))
        .collect();
    Ok(Axis {
        id,
        ticks,
        labels: None,
        positions,
    })
}

impl Axis {
    /// Which dimension this axis belongs to
    pub fn id(&self) -> AxisId {
        self.id
    }

    /// Plot ticks; category indices for label axes
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Sorted labels, only for label axes
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    pub fn is_categorical(&self) -> bool {
        self.labels.is_some()
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// First tick. Axes are never empty once built.
    pub fn min(&self) -> f64 {
        self.ticks[0]
    }

    /// Last tick
    pub fn max(&self) -> f64 {
        self.ticks[self.ticks.len() - 1]
    }

    /// Index of the tick a raw coordinate value maps to
    pub fn position(&self, value: &CoordinateValue) -> Option<usize> {
        self.positions.get(&value.key()).copied()
    }
}
