use crate::reports::format_shortest;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// A number whose concrete kind depends on what the source populated.
///
/// Comparisons only make sense between values of the same kind; the ordering
/// engine reports a mismatch rather than coercing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpaqueNumber {
    Int(i64),
    Float(f64),
}

impl OpaqueNumber {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
        }
    }

    /// Widen to a float for fixed-precision display.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "display only")]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl Display for OpaqueNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => f.write_str(&format_shortest(*v)),
        }
    }
}

impl From<i64> for OpaqueNumber {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for OpaqueNumber {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
