//! Ordering of tables by a named statistic
//!
//! This module turns a sort-key name into a comparator over
//! [`TableStatistics`](crate::stats::TableStatistics) records.
//!
//! # Implementation Model
//!
//! The vocabulary of sort keys is a static registry in `sort_key_def.rs`. Each
//! entry pairs a key name with a [`Rule`] describing how to pull the value out
//! of a table and how that value's representation orders:
//!
//! - `Count` / `Ratio`: native integers and floats, compared directly
//! - `Opaque`: integer-or-float values that must agree in kind
//! - `Size`: encoded size strings, parsed to a byte count first
//! - `Latency`: floats where NaN means "no samples" and ranks lowest
//! - `OffHeap`: sizes that may be absent, where absent ranks lowest
//! - `Name`: text identities
//!
//! A [`TableOrdering`] binds a key to a direction. Every named key is largest
//! first unless ascending order is requested. Without a key, tables are ordered
//! by `keyspace.table` name, ascending, whatever direction was requested.
//!
//! Sorting extracts each table's value once and validates it before any
//! comparison runs, so a malformed value or an unsupported key surfaces as an
//! [`OrderingError`] rather than a half-sorted sequence.

mod error;
mod size_parser;
mod sort_key;
mod sort_key_def;
mod table_ordering;

pub use error::OrderingError;
pub use size_parser::parse_byte_size;
pub use sort_key::SortKey;
pub use sort_key_def::{Rule, SortKeyDef};
pub use table_ordering::TableOrdering;
