use super::{ReportOptions, common};
use crate::Result;
use crate::stats::{KeyspaceStatistics, Snapshot, TableStatistics};
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(snapshot: &Snapshot, options: &ReportOptions, writer: &mut W) -> Result<()> {
    let output = if options.is_grouped() {
        let keyspaces = snapshot.keyspaces.iter().map(keyspace_to_json).collect::<Result<Vec<_>>>()?;
        json!({
            "total_number_of_tables": snapshot.table_count,
            "keyspaces": keyspaces,
        })
    } else {
        let tables = common::select_tables(snapshot, options)?;
        json!({
            "total_number_of_tables": snapshot.table_count,
            "tables": tables.into_iter().map(table_to_json).collect::<Result<Vec<_>>>()?,
        })
    };

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn keyspace_to_json(keyspace: &KeyspaceStatistics) -> Result<serde_json::Value> {
    Ok(json!({
        "name": keyspace.name.as_str(),
        "read_count": keyspace.read_count,
        "read_latency_ms": finite_or_null(keyspace.read_latency_ms()),
        "write_count": keyspace.write_count,
        "write_latency_ms": finite_or_null(keyspace.write_latency_ms()),
        "pending_flushes": keyspace.pending_flushes,
        "tables": keyspace.tables.iter().map(table_to_json).collect::<Result<Vec<_>>>()?,
    }))
}

#[expect(unused_results, reason = "the key is new, so insert never replaces a value")]
fn table_to_json(table: &TableStatistics) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(table)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("full_name".to_string(), json!(table.full_name().as_str()));
    }
    Ok(value)
}

fn finite_or_null(value: f64) -> serde_json::Value {
    if value.is_finite() { json!(value) } else { serde_json::Value::Null }
}
