//! Display orientation for heatmap rendering.
//!
//! Grids are built with rows along the first parameter. Viewers draw the
//! first tick at the bottom-left with y increasing upward, which is what a
//! counter-clockwise rotation followed by a vertical flip produces.

use crate::config::IdOrientation;
use crate::grid::Grid;
use crate::model::ResultId;

/// Rotate 90 degrees then flip vertically. Shape `(r, c)` becomes `(c, r)`.
pub fn orient_for_display<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    grid.rot90().flip_ud()
}

/// Orient the identifier grid according to `mode`
pub fn orient_ids(ids: &Grid<ResultId>, mode: IdOrientation) -> Grid<ResultId> {
    match mode {
        IdOrientation::RotateOnly => ids.rot90(),
        IdOrientation::MatchMetric => orient_for_display(ids),
    }
}
