//! Turns a loaded exploration into the JSON handed to the viewer.

use color_eyre::eyre::{Result, eyre};
use isogrid_core::{BuildOptions, GridError, IsoclineModel, MetricsProvider};

/// What to emit for an exploration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Isocline payload for one metric
    #[default]
    Payload,
    /// Hover details for every result
    Nodes,
}

fn explain(err: GridError) -> color_eyre::Report {
    eyre!("{}: {err}", err.user_message())
}

/// Build the model and serialize the requested output as pretty JSON.
pub fn render(
    provider: &dyn MetricsProvider,
    metric: Option<&str>,
    options: &BuildOptions,
    kind: OutputKind,
) -> Result<String> {
    let model = IsoclineModel::from_provider(provider, options).map_err(explain)?;
    let (rows, cols) = model.grids().shape();
    tracing::info!(
        x = %provider.range1_key(),
        y = %provider.range2_key(),
        rows,
        cols,
        metrics = model.available_metrics().len(),
        "built isocline grids"
    );

    let json = match kind {
        OutputKind::Payload => {
            let payload = model.metric_matrix(metric, options).map_err(explain)?;
            if payload.vmin.is_nan() {
                tracing::warn!(metric = %payload.color_metric, "metric has no values");
            }
            serde_json::to_string_pretty(&payload)?
        }
        OutputKind::Nodes => serde_json::to_string_pretty(&model.node_info())?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isogrid_core::SampleSet;
    use isogrid_core::model::{MetricSet, Sample};

    fn sample_set() -> SampleSet {
        let mut set = SampleSet::new("speed", "coupling");
        for (i, x) in [1.0, 2.0].into_iter().enumerate() {
            for (j, y) in [0.1, 0.2].into_iter().enumerate() {
                let value = if i == 1 && j == 1 { None } else { Some((i + j) as f64) };
                set = set.with_sample(Sample::new(
                    x,
                    y,
                    format!("r{i}{j}"),
                    MetricSet::new().with("m", value),
                ));
            }
        }
        set
    }

    #[test]
    fn test_render_payload() {
        let json = render(&sample_set(), None, &BuildOptions::default(), OutputKind::Payload)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["color_metric"], "m");
        assert_eq!(value["matrix_shape"], serde_json::json!([2, 2]));
        assert_eq!(value["matrix_data"], serde_json::json!([0.0, 1.0, 1.0, null]));
        assert_eq!(value["vmax"], 1.0);
    }

    #[test]
    fn test_render_nodes() {
        let json =
            render(&sample_set(), None, &BuildOptions::default(), OutputKind::Nodes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(4));
        assert_eq!(value[1]["result_id"], "r01");
        assert_eq!(value[1]["cell"], serde_json::json!([0, 1]));
    }

    #[test]
    fn test_render_unknown_metric() {
        let err = render(
            &sample_set(),
            Some("entropy"),
            &BuildOptions::default(),
            OutputKind::Payload,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("invalid metric selection"));
    }
}
