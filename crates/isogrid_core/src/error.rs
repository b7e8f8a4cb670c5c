use std::fmt;

/// Which of the two swept dimensions an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::X => write!(f, "x"),
            AxisId::Y => write!(f, "y"),
        }
    }
}

/// Errors raised while building isocline grids from exploration results
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// No coordinate values to build an axis from
    EmptyAxis { axis: AxisId },
    /// One axis holds both numeric values and labels
    MixedAxisKinds { axis: AxisId },
    /// A numeric coordinate is NaN and has no place on an ordered axis
    NanCoordinate { axis: AxisId },
    /// Sample count does not fill the `rows x cols` rectangle
    ShapeMismatch {
        rows: usize,
        cols: usize,
        samples: usize,
    },
    /// Two samples map onto the same grid cell
    DuplicateCell { row: usize, col: usize },
    /// A sample coordinate is not one of the axis ticks
    UnknownCoordinate { axis: AxisId, value: String },
    /// Requested metric is not present in the samples
    MissingMetric(String),
    /// No result of the exploration carries any metric
    NoMetrics,
    /// Provider returned range intervals that don't line up with its results
    MisalignedRanges {
        metrics: usize,
        range1: usize,
        range2: usize,
    },
    /// At least one run of the exploration has not finished
    IncompleteExploration,
}

impl GridError {
    /// Short message suitable for showing to an end user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            GridError::MissingMetric(_) => "invalid metric selection",
            GridError::NoMetrics => "no metrics were recorded for this exploration",
            GridError::IncompleteExploration => {
                "not all operations from this range are complete, cannot view until then"
            }
            GridError::EmptyAxis { .. }
            | GridError::MixedAxisKinds { .. }
            | GridError::NanCoordinate { .. }
            | GridError::ShapeMismatch { .. }
            | GridError::DuplicateCell { .. }
            | GridError::UnknownCoordinate { .. }
            | GridError::MisalignedRanges { .. } => "exploration is incomplete",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyAxis { axis } => {
                write!(f, "no coordinate values for the {axis} axis")
            }
            GridError::MixedAxisKinds { axis } => {
                write!(f, "the {axis} axis mixes numeric values and labels")
            }
            GridError::NanCoordinate { axis } => {
                write!(f, "the {axis} axis has a NaN coordinate")
            }
            GridError::ShapeMismatch {
                rows,
                cols,
                samples,
            } => write!(
                f,
                "expected {rows}x{cols}={} samples but got {samples}",
                rows * cols
            ),
            GridError::DuplicateCell { row, col } => {
                write!(f, "more than one sample for grid cell ({row}, {col})")
            }
            GridError::UnknownCoordinate { axis, value } => {
                write!(f, "coordinate {value} is not on the {axis} axis")
            }
            GridError::MissingMetric(name) => write!(f, "metric {name:?} not found"),
            GridError::NoMetrics => write!(f, "exploration results carry no metrics"),
            GridError::MisalignedRanges {
                metrics,
                range1,
                range2,
            } => write!(
                f,
                "range intervals ({range1}, {range2}) are not aligned with {metrics} results"
            ),
            GridError::IncompleteExploration => {
                write!(f, "exploration has unfinished operations")
            }
        }
    }
}

impl std::error::Error for GridError {}

pub type Result<T> = std::result::Result<T, GridError>;
