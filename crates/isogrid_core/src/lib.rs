//! Isocline grid construction for parameter space explorations.
//!
//! A parameter space exploration (PSE) runs a simulation over every
//! combination of two swept parameters and records scalar metrics for each
//! run. This crate turns those runs into dense 2D grids ready for heatmap
//! and isocline rendering:
//! - Axis normalization (numeric ranges and label ranges)
//! - Grid filling per metric, with missing values kept as empty cells
//! - Display orientation (rotate and flip for a bottom-left origin)
//! - Extremes and a serializable payload for the viewer
//!
//! ```ignore
//! use isogrid_core::{BuildOptions, IsoclineModel, SampleSet};
//!
//! let set: SampleSet = serde_json::from_str(&json)?;
//! let options = BuildOptions::default();
//! let model = IsoclineModel::from_provider(&set, &options)?;
//! let payload = model.metric_matrix(None, &options)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod axis;
pub mod builder;
pub mod error;
pub mod grid;
pub mod isocline;
pub mod orientation;
pub mod provider;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{BuildOptions, IdOrientation, SampleOrdering};
pub use error::{AxisId, GridError};
pub use isocline::{IsoclineModel, NodeInfo};
pub use provider::{MetricsProvider, SampleSet};
pub use summary::IsoclinePayload;
