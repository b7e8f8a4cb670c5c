mod coordinate;
mod ids;
mod metrics;
mod sample;

pub use coordinate::{CoordinateKey, CoordinateValue};
pub(crate) use coordinate::cmp_numeric;
pub use ids::ResultId;
pub use metrics::MetricSet;
pub use sample::Sample;
