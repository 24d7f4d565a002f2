//! Report generation for table statistics snapshots
//!
//! This module renders a [`Snapshot`](crate::stats::Snapshot) for human
//! consumption or programmatic processing.
//!
//! # Implementation Model
//!
//! Two report generators are provided, each accessed through a `generate` function:
//! - **Text**: the classic line-oriented listing, one `Label: value` per line
//! - **JSON**: machine-readable structured data
//!
//! Both generators take the same [`ReportOptions`] and operate in one of two modes:
//!
//! - **Grouped**: when no sort key is given, every keyspace is listed in snapshot
//!   order with its aggregate counters, followed by its tables in stored order.
//! - **Flat sorted**: when a sort key is given, tables from all keyspaces are
//!   flattened, ordered with [`TableOrdering`](crate::ordering::TableOrdering),
//!   optionally truncated to the first `top` entries, and listed without
//!   keyspace blocks.
//!
//! Ordering happens before any output is produced, so a failed sort leaves the
//! writer untouched.

mod common;
mod json;
mod report_options;
mod text;

pub use common::format_shortest;
pub use json::generate as generate_json;
pub use report_options::ReportOptions;
pub use text::generate as generate_text;
