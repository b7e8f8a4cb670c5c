//! Options controlling how exploration results are laid out and serialized.

use serde::{Deserialize, Serialize};

/// How samples are assigned to grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleOrdering {
    /// Place each sample at the cell of its (x, y) coordinates
    #[default]
    ByCoordinate,
    /// Trust the provider's row-major enumeration (x slower, y faster) and
    /// reshape the flat sequence as-is
    Upstream,
}

/// Transform applied to the result identifier grid before flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdOrientation {
    /// Rotate only. The metric grid is also flipped, so identifiers and values
    /// end up in different layouts; kept for compatibility with existing viewers.
    #[default]
    RotateOnly,
    /// Same rotate-then-flip as the metric grid
    MatchMetric,
}

/// Options for building an isocline payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    #[serde(default)]
    pub ordering: SampleOrdering,
    #[serde(default)]
    pub id_orientation: IdOrientation,
    /// Decimal places kept in `matrix_data`; `None` keeps full precision
    #[serde(default = "default_precision")]
    pub precision: Option<u32>,
}

fn default_precision() -> Option<u32> {
    Some(3)
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            ordering: SampleOrdering::default(),
            id_orientation: IdOrientation::default(),
            precision: default_precision(),
        }
    }
}
