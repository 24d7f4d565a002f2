#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for tablestats
//!
//! This library renders a point-in-time snapshot of per-table storage-engine
//! statistics as a report, either grouped by keyspace or flattened and sorted
//! by any one of the named metrics.
//!
//! # Module Organization
//!
//! - [`stats`]: The snapshot data model (keyspaces, tables, typed metric values)
//! - [`ordering`]: Sort-key vocabulary and the comparator built from it
//! - [`reports`]: Text and JSON report generation
//! - `commands`: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

mod commands;
pub mod ordering;
pub mod reports;
pub mod stats;

pub use crate::commands::{Host, run};
