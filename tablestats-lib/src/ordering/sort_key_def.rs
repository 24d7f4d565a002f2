use crate::stats::{ByteSize, OpaqueNumber, TableStatistics};
use compact_str::CompactString;
use strum::{Display, IntoStaticStr};

/// How a sort key's value is pulled from a table and how it orders.
#[derive(Debug, Clone, Copy, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Rule {
    /// Native integer, ordered numerically.
    Count(fn(&TableStatistics) -> i64),

    /// Native float, ordered by IEEE total order.
    Ratio(fn(&TableStatistics) -> f64),

    /// Integer-or-float value; both operands must hold the same kind.
    Opaque(fn(&TableStatistics) -> Option<OpaqueNumber>),

    /// Encoded size, ordered by parsed byte count.
    Size(fn(&TableStatistics) -> &ByteSize),

    /// Float where NaN means no samples were observed and ranks lowest.
    Latency(fn(&TableStatistics) -> f64),

    /// Encoded size that may be absent; absent ranks lowest.
    OffHeap(fn(&TableStatistics) -> Option<&ByteSize>),

    /// Text identity, ordered lexicographically.
    Name(fn(&TableStatistics) -> CompactString),
}

#[derive(Debug)]
pub struct SortKeyDef {
    pub name: &'static str,
    pub description: &'static str,
    pub rule: Rule,

    /// Short names accepted in place of `name`.
    pub aliases: &'static [&'static str],
}

macro_rules! sort_key_def {
    ($name:expr, $description:expr, $rule:ident, $extractor:expr $(, aliases = [$($alias:expr),+])?) => {
        SortKeyDef {
            name: $name,
            description: $description,
            rule: Rule::$rule($extractor),
            aliases: &[$($($alias),+)?],
        }
    };
}

/// The sort-key vocabulary, in alphabetical order.
pub const SORT_KEY_DEFINITIONS: &[SortKeyDef] = &[
    sort_key_def!(
        "average_live_cells_per_slice_last_five_minutes",
        "Average live cells scanned per read slice over the last five minutes",
        Ratio,
        |t| t.average_live_cells_per_slice_last_five_minutes,
        aliases = ["average_live"]
    ),
    sort_key_def!(
        "average_tombstones_per_slice_last_five_minutes",
        "Average tombstones scanned per read slice over the last five minutes",
        Ratio,
        |t| t.average_tombstones_per_slice_last_five_minutes,
        aliases = ["average_tombstones"]
    ),
    sort_key_def!(
        "bloom_filter_false_positives",
        "Number of bloom filter false positives",
        Opaque,
        |t| t.bloom_filter_false_positives
    ),
    sort_key_def!(
        "bloom_filter_false_ratio",
        "Ratio of bloom filter false positives to all bloom filter checks",
        Opaque,
        |t| t.bloom_filter_false_ratio
    ),
    sort_key_def!(
        "bloom_filter_off_heap_memory_used",
        "Off-heap memory used by bloom filters",
        OffHeap,
        |t| t.bloom_filter_off_heap_memory_used.as_ref()
    ),
    sort_key_def!(
        "bloom_filter_space_used",
        "Disk space used by bloom filters",
        Size,
        |t| &t.bloom_filter_space_used
    ),
    sort_key_def!(
        "bytes_pending_repair",
        "Bytes in sstables pending repair",
        Count,
        |t| t.bytes_pending_repair
    ),
    sort_key_def!("bytes_repaired", "Bytes in repaired sstables", Count, |t| t.bytes_repaired),
    sort_key_def!("bytes_unrepaired", "Bytes in unrepaired sstables", Count, |t| t.bytes_unrepaired),
    sort_key_def!(
        "compacted_partition_maximum_bytes",
        "Size of the largest compacted partition",
        Count,
        |t| t.compacted_partition_maximum_bytes,
        aliases = ["compacted_maximum"]
    ),
    sort_key_def!(
        "compacted_partition_mean_bytes",
        "Mean size of compacted partitions",
        Count,
        |t| t.compacted_partition_mean_bytes,
        aliases = ["compacted_mean"]
    ),
    sort_key_def!(
        "compacted_partition_minimum_bytes",
        "Size of the smallest compacted partition",
        Count,
        |t| t.compacted_partition_minimum_bytes,
        aliases = ["compacted_minimum"]
    ),
    sort_key_def!(
        "compression_metadata_off_heap_memory_used",
        "Off-heap memory used by compression metadata",
        OffHeap,
        |t| t.compression_metadata_off_heap_memory_used.as_ref()
    ),
    sort_key_def!("dropped_mutations", "Number of dropped mutations", Size, |t| &t.dropped_mutations),
    sort_key_def!("full_name", "Keyspace and table name, as keyspace.table", Name, |t| t.full_name()),
    sort_key_def!(
        "index_summary_off_heap_memory_used",
        "Off-heap memory used by index summaries",
        OffHeap,
        |t| t.index_summary_off_heap_memory_used.as_ref()
    ),
    sort_key_def!(
        "maximum_live_cells_per_slice_last_five_minutes",
        "Most live cells scanned by a single read slice over the last five minutes",
        Count,
        |t| t.maximum_live_cells_per_slice_last_five_minutes,
        aliases = ["maximum_live"]
    ),
    sort_key_def!(
        "maximum_tombstones_per_slice_last_five_minutes",
        "Most tombstones scanned by a single read slice over the last five minutes",
        Count,
        |t| t.maximum_tombstones_per_slice_last_five_minutes,
        aliases = ["maximum_tombstones"]
    ),
    sort_key_def!("memtable_cell_count", "Number of cells in the memtable", Opaque, |t| t.memtable_cell_count),
    sort_key_def!("memtable_data_size", "Size of data held in the memtable", Size, |t| &t.memtable_data_size),
    sort_key_def!(
        "memtable_off_heap_memory_used",
        "Off-heap memory used by the memtable",
        OffHeap,
        |t| t.memtable_off_heap_memory_used.as_ref()
    ),
    sort_key_def!(
        "memtable_switch_count",
        "Number of times the memtable was flushed and replaced",
        Opaque,
        |t| t.memtable_switch_count
    ),
    sort_key_def!(
        "number_of_partitions_estimate",
        "Estimated number of partitions",
        Opaque,
        |t| t.number_of_partitions_estimate,
        aliases = ["partitions"]
    ),
    sort_key_def!(
        "off_heap_memory_used_total",
        "Total off-heap memory used by the table",
        OffHeap,
        |t| t.off_heap_memory_used_total.as_ref()
    ),
    sort_key_def!("pending_flushes", "Number of pending memtable flushes", Opaque, |t| t.pending_flushes),
    sort_key_def!("percent_repaired", "Percentage of data marked as repaired", Ratio, |t| t.percent_repaired),
    sort_key_def!("read_latency", "Mean local read latency in milliseconds", Latency, |t| t.local_read_latency_ms),
    sort_key_def!("reads", "Number of local reads", Count, |t| t.local_read_count),
    sort_key_def!(
        "space_used_by_snapshots_total",
        "Disk space used by snapshots",
        Size,
        |t| &t.space_used_by_snapshots_total
    ),
    sort_key_def!("space_used_live", "Disk space used by live sstables", Size, |t| &t.space_used_live),
    sort_key_def!(
        "space_used_total",
        "Disk space used by all sstables, live or awaiting deletion",
        Size,
        |t| &t.space_used_total
    ),
    sort_key_def!(
        "sstable_compression_ratio",
        "Ratio of compressed to uncompressed sstable size",
        Opaque,
        |t| t.sstable_compression_ratio
    ),
    sort_key_def!("sstable_count", "Number of sstables", Opaque, |t| t.sstable_count),
    sort_key_def!("table_name", "Table name, without the keyspace", Name, |t| t.table_name.clone()),
    sort_key_def!("write_latency", "Mean local write latency in milliseconds", Latency, |t| t.local_write_latency_ms),
    sort_key_def!("writes", "Number of local writes", Count, |t| t.local_write_count),
];
