use super::nan_as_null;
use super::{ByteSize, OpaqueNumber};
use compact_str::{CompactString, format_compact};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "     stats";

/// Statistics for a single table, as captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStatistics {
    pub keyspace_name: CompactString,
    pub table_name: CompactString,
    #[serde(default)]
    pub is_index: bool,

    /// Per-level sstable counts, only reported under leveled compaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sstables_in_each_level: Option<Vec<CompactString>>,

    pub sstable_count: Option<OpaqueNumber>,
    pub space_used_live: ByteSize,
    pub space_used_total: ByteSize,
    pub space_used_by_snapshots_total: ByteSize,
    #[serde(default)]
    pub off_heap_memory_used_total: Option<ByteSize>,
    pub sstable_compression_ratio: Option<OpaqueNumber>,
    pub number_of_partitions_estimate: Option<OpaqueNumber>,

    pub memtable_cell_count: Option<OpaqueNumber>,
    pub memtable_data_size: ByteSize,
    #[serde(default)]
    pub memtable_off_heap_memory_used: Option<ByteSize>,
    pub memtable_switch_count: Option<OpaqueNumber>,

    pub local_read_count: i64,
    #[serde(with = "nan_as_null")]
    pub local_read_latency_ms: f64,
    pub local_write_count: i64,
    #[serde(with = "nan_as_null")]
    pub local_write_latency_ms: f64,
    pub pending_flushes: Option<OpaqueNumber>,

    pub percent_repaired: f64,
    #[serde(default)]
    pub bytes_repaired: i64,
    #[serde(default)]
    pub bytes_unrepaired: i64,
    #[serde(default)]
    pub bytes_pending_repair: i64,

    pub bloom_filter_false_positives: Option<OpaqueNumber>,
    pub bloom_filter_false_ratio: Option<OpaqueNumber>,
    pub bloom_filter_space_used: ByteSize,
    #[serde(default)]
    pub bloom_filter_off_heap_memory_used: Option<ByteSize>,
    #[serde(default)]
    pub index_summary_off_heap_memory_used: Option<ByteSize>,
    #[serde(default)]
    pub compression_metadata_off_heap_memory_used: Option<ByteSize>,

    pub compacted_partition_minimum_bytes: i64,
    pub compacted_partition_maximum_bytes: i64,
    pub compacted_partition_mean_bytes: i64,

    #[serde(with = "nan_as_null")]
    pub average_live_cells_per_slice_last_five_minutes: f64,
    pub maximum_live_cells_per_slice_last_five_minutes: i64,
    #[serde(with = "nan_as_null")]
    pub average_tombstones_per_slice_last_five_minutes: f64,
    pub maximum_tombstones_per_slice_last_five_minutes: i64,

    pub dropped_mutations: ByteSize,
}

impl TableStatistics {
    /// Statistics for a table that has seen no traffic.
    ///
    /// Counters are zero, sizes are `"0"`, latencies and per-slice averages are
    /// NaN, and no off-heap categories are reported. A compression ratio of
    /// `-1.0` means the table is not compressed.
    #[must_use]
    pub fn new(keyspace_name: impl Into<CompactString>, table_name: impl Into<CompactString>) -> Self {
        Self {
            keyspace_name: keyspace_name.into(),
            table_name: table_name.into(),
            is_index: false,
            sstables_in_each_level: None,
            sstable_count: Some(OpaqueNumber::Int(0)),
            space_used_live: ByteSize::default(),
            space_used_total: ByteSize::default(),
            space_used_by_snapshots_total: ByteSize::default(),
            off_heap_memory_used_total: None,
            sstable_compression_ratio: Some(OpaqueNumber::Float(-1.0)),
            number_of_partitions_estimate: Some(OpaqueNumber::Int(0)),
            memtable_cell_count: Some(OpaqueNumber::Int(0)),
            memtable_data_size: ByteSize::default(),
            memtable_off_heap_memory_used: None,
            memtable_switch_count: Some(OpaqueNumber::Int(0)),
            local_read_count: 0,
            local_read_latency_ms: f64::NAN,
            local_write_count: 0,
            local_write_latency_ms: f64::NAN,
            pending_flushes: Some(OpaqueNumber::Int(0)),
            percent_repaired: 100.0,
            bytes_repaired: 0,
            bytes_unrepaired: 0,
            bytes_pending_repair: 0,
            bloom_filter_false_positives: Some(OpaqueNumber::Int(0)),
            bloom_filter_false_ratio: Some(OpaqueNumber::Float(0.0)),
            bloom_filter_space_used: ByteSize::default(),
            bloom_filter_off_heap_memory_used: None,
            index_summary_off_heap_memory_used: None,
            compression_metadata_off_heap_memory_used: None,
            compacted_partition_minimum_bytes: 0,
            compacted_partition_maximum_bytes: 0,
            compacted_partition_mean_bytes: 0,
            average_live_cells_per_slice_last_five_minutes: f64::NAN,
            maximum_live_cells_per_slice_last_five_minutes: 0,
            average_tombstones_per_slice_last_five_minutes: f64::NAN,
            maximum_tombstones_per_slice_last_five_minutes: 0,
            dropped_mutations: ByteSize::default(),
        }
    }

    /// The `keyspace.table` identity used by name ordering and flat listings.
    #[must_use]
    pub fn full_name(&self) -> CompactString {
        format_compact!("{}.{}", self.keyspace_name, self.table_name)
    }

    /// Pending flushes as a plain count, for keyspace aggregation.
    ///
    /// A float holding a whole number counts as that number. Absent values, and
    /// floats that are fractional or out of range, contribute nothing and are
    /// logged.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "the value is checked to be whole and within i64 range first")]
    pub fn pending_flush_count(&self) -> i64 {
        match self.pending_flushes {
            Some(OpaqueNumber::Int(count)) => count,
            Some(OpaqueNumber::Float(value)) if value.fract() == 0.0 && value.abs() < 9.0e18 => value as i64,
            Some(OpaqueNumber::Float(value)) => {
                log::debug!(
                    target: LOG_TARGET,
                    "Pending flushes of {} is {value}, not a whole count; leaving it out of the keyspace total",
                    self.full_name()
                );
                0
            }
            None => {
                log::debug!(target: LOG_TARGET, "Pending flushes of {} not reported; leaving it out of the keyspace total", self.full_name());
                0
            }
        }
    }
}
