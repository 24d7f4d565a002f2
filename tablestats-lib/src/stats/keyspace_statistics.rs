use super::TableStatistics;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A keyspace and its tables, with totals computed once at assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyspaceStatistics {
    pub name: CompactString,
    pub read_count: i64,
    pub write_count: i64,
    pub pending_flushes: i64,
    #[serde(default)]
    pub total_read_time_micros: f64,
    #[serde(default)]
    pub total_write_time_micros: f64,

    /// Tables in discovery order.
    pub tables: Vec<TableStatistics>,
}

impl KeyspaceStatistics {
    /// Assemble a keyspace from its tables, summing read/write counts and
    /// pending flushes.
    ///
    /// Total read and write times are not derivable from per-table averages, so
    /// they start at zero; use [`Self::with_total_times`] when the source
    /// reports them.
    #[must_use]
    pub fn new(name: impl Into<CompactString>, tables: Vec<TableStatistics>) -> Self {
        let read_count = tables.iter().map(|t| t.local_read_count).sum();
        let write_count = tables.iter().map(|t| t.local_write_count).sum();
        let pending_flushes = tables.iter().map(TableStatistics::pending_flush_count).sum();

        Self {
            name: name.into(),
            read_count,
            write_count,
            pending_flushes,
            total_read_time_micros: 0.0,
            total_write_time_micros: 0.0,
            tables,
        }
    }

    #[must_use]
    pub const fn with_total_times(mut self, read_micros: f64, write_micros: f64) -> Self {
        self.total_read_time_micros = read_micros;
        self.total_write_time_micros = write_micros;
        self
    }

    /// Mean read latency across the keyspace; NaN when nothing was read.
    #[must_use]
    pub fn read_latency_ms(&self) -> f64 {
        mean_latency_ms(self.total_read_time_micros, self.read_count)
    }

    /// Mean write latency across the keyspace; NaN when nothing was written.
    #[must_use]
    pub fn write_latency_ms(&self) -> f64 {
        mean_latency_ms(self.total_write_time_micros, self.write_count)
    }
}

#[expect(clippy::cast_precision_loss, reason = "operation counts are far below 2^52")]
fn mean_latency_ms(total_micros: f64, count: i64) -> f64 {
    if count == 0 {
        f64::NAN
    } else {
        total_micros / count as f64 / 1000.0
    }
}
