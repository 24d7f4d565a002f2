//! Snapshot data model for table statistics
//!
//! A [`Snapshot`] is a two-level tree: an ordered list of
//! [`KeyspaceStatistics`], each holding its [`TableStatistics`] in discovery
//! order. The tree is assembled once by whatever gathered the numbers and is
//! never mutated afterwards; reports only read and reorder references into it.
//!
//! # Value Representations
//!
//! Table fields come in four shapes, and the ordering engine handles each one
//! with its own rule:
//!
//! - **Native numbers**: plain `i64` / `f64` fields. Latencies use NaN to mean
//!   "no samples observed".
//! - **Opaque numbers**: [`OpaqueNumber`] values that may be an integer or a
//!   float, wrapped in an `Option` for fields the source may not populate.
//! - **Encoded sizes**: [`ByteSize`] text, either a plain byte count or a
//!   human-readable `<number> <unit>` string.
//! - **Presence-gated sizes**: `Option<ByteSize>`, absent when the table does
//!   not report that category of off-heap memory.

mod byte_size;
mod keyspace_statistics;
mod opaque_number;
mod snapshot;
mod table_statistics;

pub use byte_size::ByteSize;
pub use keyspace_statistics::KeyspaceStatistics;
pub use opaque_number::OpaqueNumber;
pub use snapshot::Snapshot;
pub use table_statistics::TableStatistics;

/// Serde helpers for floats where NaN is meaningful.
///
/// JSON has no NaN, and `serde_json` writes NaN as `null`, so `null` is read
/// back as NaN.
pub(crate) mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
