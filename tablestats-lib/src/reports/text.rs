use super::{ReportOptions, common};
use crate::Result;
use crate::stats::{KeyspaceStatistics, Snapshot, TableStatistics};
use core::fmt::Write;

const LOG_TARGET: &str = "   reports";
const SEPARATOR: &str = "----------------";

pub fn generate<W: Write>(snapshot: &Snapshot, options: &ReportOptions, writer: &mut W) -> Result<()> {
    if options.is_grouped() {
        generate_grouped(snapshot, writer)
    } else {
        let tables = common::select_tables(snapshot, options)?;
        generate_flat(snapshot, &tables, writer)
    }
}

fn generate_grouped<W: Write>(snapshot: &Snapshot, writer: &mut W) -> Result<()> {
    writeln!(writer, "Total number of tables: {}", snapshot.table_count)?;
    writeln!(writer, "{SEPARATOR}")?;

    for keyspace in &snapshot.keyspaces {
        write_keyspace(keyspace, writer)?;
        for table in &keyspace.tables {
            write_table(table, &table.table_name, "\t\t", writer)?;
        }
        writeln!(writer, "{SEPARATOR}")?;
    }

    log::info!(
        target: LOG_TARGET,
        "Rendered {} keyspaces grouped by keyspace",
        snapshot.keyspaces.len()
    );
    Ok(())
}

fn generate_flat<W: Write>(snapshot: &Snapshot, tables: &[&TableStatistics], writer: &mut W) -> Result<()> {
    writeln!(writer, "Total number of tables: {}", snapshot.table_count)?;
    writeln!(writer, "{SEPARATOR}")?;

    for table in tables {
        write_table(table, &table.full_name(), "\t", writer)?;
    }
    writeln!(writer, "{SEPARATOR}")?;

    log::info!(target: LOG_TARGET, "Rendered {} tables in sorted order", tables.len());
    Ok(())
}

fn write_keyspace<W: Write>(keyspace: &KeyspaceStatistics, writer: &mut W) -> Result<()> {
    writeln!(writer, "Keyspace : {}", keyspace.name)?;
    writeln!(writer, "\tRead Count: {}", keyspace.read_count)?;
    writeln!(writer, "\tRead Latency: {} ms", common::format_shortest(keyspace.read_latency_ms()))?;
    writeln!(writer, "\tWrite Count: {}", keyspace.write_count)?;
    writeln!(writer, "\tWrite Latency: {} ms", common::format_shortest(keyspace.write_latency_ms()))?;
    writeln!(writer, "\tPending Flushes: {}", keyspace.pending_flushes)?;
    Ok(())
}

fn write_table<W: Write>(table: &TableStatistics, name: &str, indent: &str, writer: &mut W) -> Result<()> {
    let mut line = |label: &str, value: &dyn core::fmt::Display| writeln!(writer, "{indent}{label}: {value}");

    if table.is_index {
        line("Table (index)", &name)?;
    } else {
        line("Table", &name)?;
    }
    line("SSTable count", &common::format_opaque(table.sstable_count.as_ref()))?;
    if let Some(levels) = &table.sstables_in_each_level {
        line("SSTables in each level", &format_args!("[{}]", levels.join(", ")))?;
    }
    line("Space used (live)", &table.space_used_live)?;
    line("Space used (total)", &table.space_used_total)?;
    line("Space used by snapshots (total)", &table.space_used_by_snapshots_total)?;
    if let Some(size) = &table.off_heap_memory_used_total {
        line("Off heap memory used (total)", size)?;
    }
    line("SSTable Compression Ratio", &common::format_opaque(table.sstable_compression_ratio.as_ref()))?;
    line("Number of partitions (estimate)", &common::format_opaque(table.number_of_partitions_estimate.as_ref()))?;
    line("Memtable cell count", &common::format_opaque(table.memtable_cell_count.as_ref()))?;
    line("Memtable data size", &table.memtable_data_size)?;
    if let Some(size) = &table.memtable_off_heap_memory_used {
        line("Memtable off heap memory used", size)?;
    }
    line("Memtable switch count", &common::format_opaque(table.memtable_switch_count.as_ref()))?;
    line("Local read count", &table.local_read_count)?;
    line("Local read latency", &format_args!("{:.3} ms", table.local_read_latency_ms))?;
    line("Local write count", &table.local_write_count)?;
    line("Local write latency", &format_args!("{:.3} ms", table.local_write_latency_ms))?;
    line("Pending flushes", &common::format_opaque(table.pending_flushes.as_ref()))?;
    line("Percent repaired", &common::format_hundredths(table.percent_repaired))?;
    line("Bloom filter false positives", &common::format_opaque(table.bloom_filter_false_positives.as_ref()))?;
    line("Bloom filter false ratio", &common::format_opaque_fixed(table.bloom_filter_false_ratio.as_ref(), 5))?;
    line("Bloom filter space used", &table.bloom_filter_space_used)?;
    if let Some(size) = &table.bloom_filter_off_heap_memory_used {
        line("Bloom filter off heap memory used", size)?;
    }
    if let Some(size) = &table.index_summary_off_heap_memory_used {
        line("Index summary off heap memory used", size)?;
    }
    if let Some(size) = &table.compression_metadata_off_heap_memory_used {
        line("Compression metadata off heap memory used", size)?;
    }
    line("Compacted partition minimum bytes", &table.compacted_partition_minimum_bytes)?;
    line("Compacted partition maximum bytes", &table.compacted_partition_maximum_bytes)?;
    line("Compacted partition mean bytes", &table.compacted_partition_mean_bytes)?;
    line(
        "Average live cells per slice (last five minutes)",
        &common::format_shortest(table.average_live_cells_per_slice_last_five_minutes),
    )?;
    line(
        "Maximum live cells per slice (last five minutes)",
        &table.maximum_live_cells_per_slice_last_five_minutes,
    )?;
    line(
        "Average tombstones per slice (last five minutes)",
        &common::format_shortest(table.average_tombstones_per_slice_last_five_minutes),
    )?;
    line(
        "Maximum tombstones per slice (last five minutes)",
        &table.maximum_tombstones_per_slice_last_five_minutes,
    )?;
    line("Dropped Mutations", &table.dropped_mutations)?;
    writeln!(writer)?;
    Ok(())
}
