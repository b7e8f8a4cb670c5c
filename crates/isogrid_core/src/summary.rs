//! Extremes and the serializable payload handed to the isocline viewer.

use serde::{Deserialize, Deserializer, Serialize};

use crate::grid::Grid;

/// Everything a viewer needs to draw one metric of an exploration.
///
/// Missing metric values appear as NaN in `matrix_data` and in `vmin`/`vmax`
/// when no cell has a value; JSON output writes them as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsoclinePayload {
    /// Oriented metric grid, flattened row-major
    #[serde(deserialize_with = "nan_from_null_seq")]
    pub matrix_data: Vec<f64>,
    /// Oriented result identifiers, flattened row-major
    pub matrix_guids: Vec<String>,
    /// `[rows, cols]` of the oriented grid
    pub matrix_shape: [usize; 2],
    pub color_metric: String,
    #[serde(rename = "xAxisName")]
    pub x_axis_name: String,
    #[serde(rename = "yAxisName")]
    pub y_axis_name: String,
    pub available_metrics: Vec<String>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub vmin: f64,
    #[serde(deserialize_with = "nan_from_null")]
    pub vmax: f64,
    /// Category labels when the first parameter ranges over labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_labels: Option<Vec<String>>,
    /// Category labels when the second parameter ranges over labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_labels: Option<Vec<String>>,
}

// serde_json writes NaN as `null`; read it back the same way
fn nan_from_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

fn nan_from_null_seq<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    let cells = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(cells.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Minimum and maximum over the present cells. `(NaN, NaN)` if every cell is missing.
#[must_use]
pub fn extremes(grid: &Grid<Option<f64>>) -> (f64, f64) {
    grid.data()
        .iter()
        .flatten()
        .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((f64::NAN, f64::NAN))
}

/// Flatten to floats, turning missing cells into NaN and rounding to `precision` decimals.
#[must_use]
pub fn flatten_with_precision(grid: &Grid<Option<f64>>, precision: Option<u32>) -> Vec<f64> {
    grid.data()
        .iter()
        .map(|cell| match cell {
            Some(v) => precision.map_or(*v, |p| round_to(*v, p)),
            None => f64::NAN,
        })
        .collect()
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(15) as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_skip_missing() {
        let grid = Grid::from_data(2, 2, vec![Some(1.0), None, Some(-2.5), Some(4.0)]).unwrap();
        assert_eq!(extremes(&grid), (-2.5, 4.0));
    }

    #[test]
    fn test_extremes_all_missing() {
        let grid: Grid<Option<f64>> = Grid::new(1, 2, None);
        let (lo, hi) = extremes(&grid);
        assert!(lo.is_nan() && hi.is_nan());
    }

    #[test]
    fn test_flatten_rounds_and_marks_missing() {
        let grid = Grid::from_data(1, 3, vec![Some(0.123456), None, Some(2.0)]).unwrap();
        let flat = flatten_with_precision(&grid, Some(3));
        assert_eq!(flat[0], 0.123);
        assert!(flat[1].is_nan());
        assert_eq!(flat[2], 2.0);

        let full = flatten_with_precision(&grid, None);
        assert_eq!(full[0], 0.123456);
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let grid = Grid::from_data(1, 2, vec![None, Some(1.0)]).unwrap();
        let json = serde_json::to_string(&flatten_with_precision(&grid, None)).unwrap();
        assert_eq!(json, "[null,1.0]");
    }

    #[test]
    fn test_payload_reads_back_missing_values() {
        let grid: Grid<Option<f64>> = Grid::new(1, 2, None);
        let (vmin, vmax) = extremes(&grid);
        let payload = IsoclinePayload {
            matrix_data: flatten_with_precision(&grid, Some(3)),
            matrix_guids: vec!["a".into(), "b".into()],
            matrix_shape: [1, 2],
            color_metric: "m".into(),
            x_axis_name: "x".into(),
            y_axis_name: "y".into(),
            available_metrics: vec!["m".into()],
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 0.0,
            vmin,
            vmax,
            x_labels: None,
            y_labels: Some(vec!["low".into()]),
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""matrix_data":[null,null]"#));
        assert!(json.contains(r#""vmin":null"#));

        let back: IsoclinePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.matrix_data.len(), 2);
        assert!(back.matrix_data.iter().all(|v| v.is_nan()));
        assert!(back.vmin.is_nan() && back.vmax.is_nan());
        assert_eq!(back.matrix_guids, payload.matrix_guids);
        assert_eq!(back.x_max, 1.0);
        assert_eq!(back.y_labels, payload.y_labels);
    }
}
