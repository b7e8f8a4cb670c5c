//! Loading exploration results and build options from disk.
//!
//! Files ending in `.json` are read as JSON; everything else is YAML.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use isogrid_core::{BuildOptions, SampleSet};
use serde::de::DeserializeOwned;

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    if is_json(path) {
        serde_json::from_str(content).wrap_err("invalid JSON")
    } else {
        serde_saphyr::from_str(content).wrap_err("invalid YAML")
    }
}

/// Read an exploration exported as YAML or JSON
pub fn load_sample_set(path: &Path) -> Result<SampleSet> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let set: SampleSet =
        parse(path, &content).wrap_err_with(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        samples = set.samples.len(),
        "loaded exploration"
    );
    Ok(set)
}

/// Read build options; fields left out keep their defaults
pub fn load_options(path: &Path) -> Result<BuildOptions> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    parse(path, &content).wrap_err_with(|| format!("failed to parse {}", path.display()))
}
