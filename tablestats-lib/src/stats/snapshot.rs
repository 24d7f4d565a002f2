use super::{KeyspaceStatistics, TableStatistics};
use serde::{Deserialize, Serialize};

/// An immutable point-in-time capture of keyspace and table statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Number of tables on the node. May exceed the listed tables when the
    /// snapshot was filtered down to a few keyspaces.
    pub table_count: usize,
    pub keyspaces: Vec<KeyspaceStatistics>,
}

impl Snapshot {
    #[must_use]
    pub fn new(keyspaces: Vec<KeyspaceStatistics>) -> Self {
        let table_count = keyspaces.iter().map(|ks| ks.tables.len()).sum();
        Self { table_count, keyspaces }
    }

    #[must_use]
    pub const fn with_table_count(mut self, table_count: usize) -> Self {
        self.table_count = table_count;
        self
    }

    /// All tables across all keyspaces, in snapshot order.
    pub fn tables(&self) -> impl Iterator<Item = &TableStatistics> {
        self.keyspaces.iter().flat_map(|ks| ks.tables.iter())
    }
}
