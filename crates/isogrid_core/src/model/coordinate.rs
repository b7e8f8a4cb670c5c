//! Raw coordinate values along a swept parameter

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value a swept parameter took in one run.
///
/// Numeric ranges (coupling strength, noise, ...) produce `Numeric`; ranges over
/// datatypes or named options produce `Label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Numeric(f64),
    Label(String),
}

impl CoordinateValue {
    #[must_use]
    pub fn is_label(&self) -> bool {
        matches!(self, CoordinateValue::Label(_))
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CoordinateValue::Numeric(v) => Some(*v),
            CoordinateValue::Label(_) => None,
        }
    }

    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            CoordinateValue::Numeric(_) => None,
            CoordinateValue::Label(s) => Some(s),
        }
    }

    /// Hashable identity of the value. `-0.0` and `0.0` share a key, as do all NaNs.
    #[must_use]
    pub fn key(&self) -> CoordinateKey {
        match self {
            CoordinateValue::Numeric(v) => CoordinateKey::Numeric(canonical_bits(*v)),
            CoordinateValue::Label(s) => CoordinateKey::Label(s.clone()),
        }
    }
}

impl fmt::Display for CoordinateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateValue::Numeric(v) => write!(f, "{v}"),
            CoordinateValue::Label(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CoordinateValue {
    fn from(v: f64) -> Self {
        CoordinateValue::Numeric(v)
    }
}

impl From<&str> for CoordinateValue {
    fn from(s: &str) -> Self {
        CoordinateValue::Label(s.to_string())
    }
}

impl From<String> for CoordinateValue {
    fn from(s: String) -> Self {
        CoordinateValue::Label(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoordinateKey {
    Numeric(u64),
    Label(String),
}

pub(crate) fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0_f64.to_bits()
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

/// Total order used to sort numeric ticks; equal keys compare equal.
pub(crate) fn cmp_numeric(a: f64, b: f64) -> Ordering {
    if canonical_bits(a) == canonical_bits(b) {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}
