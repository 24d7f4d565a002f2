use super::sort_key_def::Rule;
use super::{OrderingError, SortKey};
use crate::stats::{OpaqueNumber, TableStatistics};
use compact_str::{CompactString, format_compact};
use core::cmp::Ordering;

const LOG_TARGET: &str = "  ordering";

/// A table's value under some sort key, ready to compare.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    /// No samples, or an off-heap category the table does not report. Ranks below everything.
    Missing,
    Int(i64),
    Float(f64),
    Bytes(u64),
    Text(CompactString),
}

impl SortValue {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bytes(_) => "size",
            Self::Text(_) => "text",
        }
    }

    /// Natural ascending order, or `None` when the kinds cannot be compared.
    fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Missing, Self::Missing) => Some(Ordering::Equal),
            (Self::Missing, _) => Some(Ordering::Less),
            (_, Self::Missing) => Some(Ordering::Greater),
            (Self::Int(x), Self::Int(y)) => Some(x.cmp(y)),
            (Self::Float(x), Self::Float(y)) => Some(x.total_cmp(y)),
            (Self::Bytes(x), Self::Bytes(y)) => Some(x.cmp(y)),
            (Self::Text(x), Self::Text(y)) => Some(x.cmp(y)),
            _ => None,
        }
    }
}

/// Orders tables by a sort key and direction.
///
/// Named keys order largest first unless `ascending` is set; NaN latencies and
/// absent off-heap sizes rank lowest in either direction, so they trail a
/// descending listing and lead an ascending one. Without a key, tables are
/// ordered by `keyspace.table`, ascending, and the direction is ignored.
///
/// Equal values compare equal; ties are left to the stability of the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOrdering {
    key: Option<SortKey>,
    ascending: bool,
    human_readable: bool,
}

impl TableOrdering {
    /// Build an ordering from an optional key name.
    ///
    /// An empty name is the same as no name.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::UnsupportedSortKey`] if the name is not in the vocabulary.
    pub fn new(sort_key: Option<&str>, ascending: bool, human_readable: bool) -> Result<Self, OrderingError> {
        let key = sort_key.filter(|name| !name.is_empty()).map(SortKey::parse).transpose()?;
        Ok(Self {
            key,
            ascending,
            human_readable,
        })
    }

    #[must_use]
    pub const fn by_key(key: SortKey, ascending: bool, human_readable: bool) -> Self {
        Self {
            key: Some(key),
            ascending,
            human_readable,
        }
    }

    /// Ascending `keyspace.table` order.
    #[must_use]
    pub const fn by_name() -> Self {
        Self {
            key: None,
            ascending: true,
            human_readable: false,
        }
    }

    #[must_use]
    pub const fn key(&self) -> Option<SortKey> {
        self.key
    }

    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Compare two tables.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::TypeMismatch`] if the values cannot be compared and
    /// [`OrderingError::MalformedNumericString`] if a size does not parse.
    pub fn compare(&self, x: &TableStatistics, y: &TableStatistics) -> Result<Ordering, OrderingError> {
        let vx = self.value_of(x)?;
        let vy = self.value_of(y)?;
        let natural = vx
            .compare(&vy)
            .ok_or_else(|| self.mismatch(x, &vx, y, &vy))?;
        Ok(self.directed(natural))
    }

    /// Compare two tables either of which may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::NullRecord`] if either record is missing, otherwise
    /// as [`Self::compare`].
    pub fn compare_records(&self, x: Option<&TableStatistics>, y: Option<&TableStatistics>) -> Result<Ordering, OrderingError> {
        match (x, y) {
            (Some(x), Some(y)) => self.compare(x, y),
            _ => Err(OrderingError::NullRecord),
        }
    }

    /// Stable sort of tables in place.
    ///
    /// Every value is extracted and checked before anything moves, so on error
    /// the slice is left in its original order.
    ///
    /// # Errors
    ///
    /// As [`Self::compare`], reported for the first offending table.
    pub fn sort(&self, tables: &mut [&TableStatistics]) -> Result<(), OrderingError> {
        let mut decorated = tables
            .iter()
            .map(|&table| self.value_of(table).map(|value| (value, table)))
            .collect::<Result<Vec<_>, _>>()?;

        // Missing ranks against every kind, so only the present values need to agree.
        let mut present = decorated.iter().filter(|(value, _)| *value != SortValue::Missing);
        if let Some((first_value, first_table)) = present.next()
            && let Some((other_value, other_table)) = present.find(|(value, _)| first_value.compare(value).is_none())
        {
            return Err(self.mismatch(first_table, first_value, other_table, other_value));
        }

        decorated.sort_by(|(vx, _), (vy, _)| self.directed(vx.compare(vy).unwrap_or(Ordering::Equal)));

        for (slot, (_, table)) in tables.iter_mut().zip(decorated) {
            *slot = table;
        }

        log::debug!(
            target: LOG_TARGET,
            "Sorted {} tables by '{}' ({})",
            tables.len(),
            self.key_name(),
            if self.is_name_fallback() || self.ascending { "ascending" } else { "descending" }
        );

        Ok(())
    }

    const fn is_name_fallback(&self) -> bool {
        self.key.is_none()
    }

    const fn directed(&self, natural: Ordering) -> Ordering {
        if self.is_name_fallback() || self.ascending {
            natural
        } else {
            natural.reverse()
        }
    }

    fn key_name(&self) -> &'static str {
        self.key.map_or("full_name", |key| key.name())
    }

    fn value_of(&self, table: &TableStatistics) -> Result<SortValue, OrderingError> {
        let Some(key) = self.key else {
            return Ok(SortValue::Text(table.full_name()));
        };

        Ok(match key.rule() {
            Rule::Count(extract) => SortValue::Int(extract(table)),
            Rule::Ratio(extract) => SortValue::Float(extract(table)),
            Rule::Opaque(extract) => match extract(table) {
                Some(OpaqueNumber::Int(value)) => SortValue::Int(value),
                Some(OpaqueNumber::Float(value)) => SortValue::Float(value),
                None => {
                    return Err(OrderingError::TypeMismatch {
                        key: key.name(),
                        left: format_compact!("{} (absent)", table.full_name()),
                        right: "an integer or float".into(),
                    });
                }
            },
            Rule::Size(extract) => SortValue::Bytes(extract(table).bytes(self.human_readable)?),
            Rule::Latency(extract) => {
                let value = extract(table);
                if value.is_nan() { SortValue::Missing } else { SortValue::Float(value) }
            }
            Rule::OffHeap(extract) => match extract(table) {
                Some(size) => SortValue::Bytes(size.bytes(self.human_readable)?),
                None => SortValue::Missing,
            },
            Rule::Name(extract) => SortValue::Text(extract(table)),
        })
    }

    fn mismatch(&self, x: &TableStatistics, vx: &SortValue, y: &TableStatistics, vy: &SortValue) -> OrderingError {
        OrderingError::TypeMismatch {
            key: self.key_name(),
            left: format_compact!("{} ({})", x.full_name(), vx.kind()),
            right: format_compact!("{} ({})", y.full_name(), vy.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ByteSize;

    fn names<'a>(tables: &[&'a TableStatistics]) -> Vec<&'a str> {
        tables.iter().map(|t| t.table_name.as_str()).collect()
    }

    fn sorted<'a>(tables: &'a [TableStatistics], key: &str, ascending: bool) -> Vec<&'a str> {
        let ordering = TableOrdering::new(Some(key), ascending, false).unwrap();
        let mut refs: Vec<_> = tables.iter().collect();
        ordering.sort(&mut refs).unwrap();
        names(&refs)
    }

    /// Six tables across three keyspaces, each metric arranged in a distinct order.
    fn create_test_tables() -> Vec<TableStatistics> {
        let reads = [0, 1, 2, 3, 4, 5];
        let writes = [5, 4, 3, 2, 1, 0];
        let read_latency = [2.0, 3.0, 4.0, f64::NAN, 0.0, 1.0];
        let write_latency = [0.05, 0.0, f64::NAN, 2.0, 1.0, 0.5];
        let space_used_total = ["9001", "1024", "512", "256", "64", "0"];
        let memtable_data_size = ["0", "900", "1999", "3000", "20000", "1000000"];
        let sstable_count = [60000, 3000, 50000, 2000, 40000, 1000];
        let false_positives = [30, 600, 20, 500, 10, 400];
        let false_ratio = [0.40, 0.01, 0.50, 0.02, 0.60, 0.03];
        let off_heap_total = [None, Some("314159363"), None, Some("441213814"), None, Some("162470806")];
        let keyspaces = ["keyspace1", "keyspace1", "keyspace1", "keyspace2", "keyspace2", "keyspace3"];

        (0..6)
            .map(|i| TableStatistics {
                local_read_count: reads[i],
                local_write_count: writes[i],
                local_read_latency_ms: read_latency[i],
                local_write_latency_ms: write_latency[i],
                space_used_total: space_used_total[i].into(),
                memtable_data_size: memtable_data_size[i].into(),
                sstable_count: Some(OpaqueNumber::Int(sstable_count[i])),
                bloom_filter_false_positives: Some(OpaqueNumber::Int(false_positives[i])),
                bloom_filter_false_ratio: Some(OpaqueNumber::Float(false_ratio[i])),
                off_heap_memory_used_total: off_heap_total[i].map(ByteSize::from),
                ..TableStatistics::new(keyspaces[i], format!("table{}", i + 1))
            })
            .collect()
    }

    #[test]
    fn test_sort_by_reads_descending() {
        let tables = create_test_tables();
        assert_eq!(sorted(&tables, "reads", false), ["table6", "table5", "table4", "table3", "table2", "table1"]);
    }

    #[test]
    fn test_sort_by_reads_ascending() {
        let tables = create_test_tables();
        assert_eq!(sorted(&tables, "reads", true), ["table1", "table2", "table3", "table4", "table5", "table6"]);
    }

    #[test]
    fn test_sort_by_writes() {
        let tables = create_test_tables();
        assert_eq!(sorted(&tables, "writes", false), ["table1", "table2", "table3", "table4", "table5", "table6"]);
    }

    #[test]
    fn test_sort_by_read_latency_puts_nan_last_when_descending() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "read_latency", false),
            ["table3", "table2", "table1", "table6", "table5", "table4"]
        );
    }

    #[test]
    fn test_sort_by_read_latency_puts_nan_first_when_ascending() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "read_latency", true),
            ["table4", "table5", "table6", "table1", "table2", "table3"]
        );
    }

    #[test]
    fn test_sort_by_write_latency() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "write_latency", false),
            ["table4", "table5", "table6", "table1", "table2", "table3"]
        );
    }

    #[test]
    fn test_nan_latency_ranks_below_zero() {
        let tables = create_test_tables();
        let descending = TableOrdering::new(Some("read_latency"), false, false).unwrap();
        let ascending = TableOrdering::new(Some("read_latency"), true, false).unwrap();

        // table4 has no read samples, table5 has a latency of exactly zero
        assert_eq!(descending.compare(&tables[3], &tables[4]).unwrap(), Ordering::Greater);
        assert_eq!(ascending.compare(&tables[3], &tables[4]).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_two_nan_latencies_are_equal() {
        let a = TableStatistics::new("ks", "a");
        let b = TableStatistics::new("ks", "b");
        for ascending in [false, true] {
            let ordering = TableOrdering::new(Some("read_latency"), ascending, false).unwrap();
            assert_eq!(ordering.compare(&a, &b).unwrap(), Ordering::Equal);
        }
    }

    #[test]
    fn test_sort_by_space_used_total() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "space_used_total", false),
            ["table1", "table2", "table3", "table4", "table5", "table6"]
        );
    }

    #[test]
    fn test_sort_by_memtable_data_size() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "memtable_data_size", false),
            ["table6", "table5", "table4", "table3", "table2", "table1"]
        );
    }

    #[test]
    fn test_sort_by_sstable_count() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "sstable_count", false),
            ["table1", "table3", "table5", "table2", "table4", "table6"]
        );
    }

    #[test]
    fn test_sstable_count_larger_first() {
        let big = TableStatistics {
            sstable_count: Some(OpaqueNumber::Int(60000)),
            ..TableStatistics::new("ks", "big")
        };
        let small = TableStatistics {
            sstable_count: Some(OpaqueNumber::Int(1000)),
            ..TableStatistics::new("ks", "small")
        };

        let ordering = TableOrdering::new(Some("sstable_count"), false, false).unwrap();
        let mut refs = vec![&small, &big];
        ordering.sort(&mut refs).unwrap();
        assert_eq!(names(&refs), ["big", "small"]);
    }

    #[test]
    fn test_sort_by_bloom_filter_false_positives() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "bloom_filter_false_positives", false),
            ["table2", "table4", "table6", "table1", "table3", "table5"]
        );
    }

    #[test]
    fn test_sort_by_bloom_filter_false_ratio() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "bloom_filter_false_ratio", false),
            ["table5", "table3", "table1", "table6", "table4", "table2"]
        );
    }

    #[test]
    fn test_sort_by_off_heap_total_puts_absent_last_and_keeps_their_order() {
        let tables = create_test_tables();
        assert_eq!(
            sorted(&tables, "off_heap_memory_used_total", false),
            ["table4", "table2", "table6", "table1", "table3", "table5"]
        );
    }

    #[test]
    fn test_off_heap_absent_ranks_below_present_in_both_directions() {
        let tables = create_test_tables();
        let with = &tables[1];
        let without = &tables[0];
        for ascending in [false, true] {
            let ordering = TableOrdering::new(Some("off_heap_memory_used_total"), ascending, false).unwrap();
            let expected = if ascending { Ordering::Less } else { Ordering::Greater };
            assert_eq!(ordering.compare(without, with).unwrap(), expected);
            assert_eq!(ordering.compare(without, &tables[2]).unwrap(), Ordering::Equal);
        }
    }

    #[test]
    fn test_human_readable_sizes() {
        let space = ["999 bytes", "5 KiB", "40 KiB", "3 MiB", "2 GiB", "1 TiB"];
        let memtable = ["1.21 TiB", "42 KiB", "2.71 GiB", "999 bytes", "3.14 MiB", "0 bytes"];
        let tables: Vec<_> = (0..6)
            .map(|i| TableStatistics {
                space_used_total: space[i].into(),
                memtable_data_size: memtable[i].into(),
                ..TableStatistics::new("ks", format!("table{}", i + 1))
            })
            .collect();

        let mut refs: Vec<_> = tables.iter().collect();
        TableOrdering::new(Some("space_used_total"), false, true).unwrap().sort(&mut refs).unwrap();
        assert_eq!(names(&refs), ["table6", "table5", "table4", "table3", "table2", "table1"]);

        let mut refs: Vec<_> = tables.iter().collect();
        TableOrdering::new(Some("memtable_data_size"), false, true).unwrap().sort(&mut refs).unwrap();
        assert_eq!(names(&refs), ["table1", "table3", "table5", "table2", "table4", "table6"]);
    }

    #[test]
    fn test_human_readable_size_in_raw_mode_fails() {
        let table = TableStatistics {
            space_used_total: "5 KiB".into(),
            ..TableStatistics::new("ks", "t")
        };
        let other = TableStatistics::new("ks", "u");
        let ordering = TableOrdering::new(Some("space_used_total"), false, false).unwrap();

        assert_eq!(
            ordering.compare(&table, &other),
            Err(OrderingError::MalformedNumericString("5 KiB".into()))
        );
    }

    #[test]
    fn test_sort_failure_leaves_slice_untouched() {
        let mut tables = create_test_tables();
        tables[4].space_used_total = "lots".into();
        let ordering = TableOrdering::new(Some("space_used_total"), false, false).unwrap();

        let mut refs: Vec<_> = tables.iter().collect();
        let result = ordering.sort(&mut refs);
        assert_eq!(result, Err(OrderingError::MalformedNumericString("lots".into())));
        assert_eq!(names(&refs), ["table1", "table2", "table3", "table4", "table5", "table6"]);
    }

    #[test]
    fn test_opaque_kind_mismatch_fails() {
        let int = TableStatistics {
            sstable_count: Some(OpaqueNumber::Int(3)),
            ..TableStatistics::new("ks", "int")
        };
        let float = TableStatistics {
            sstable_count: Some(OpaqueNumber::Float(3.0)),
            ..TableStatistics::new("ks", "float")
        };
        let ordering = TableOrdering::new(Some("sstable_count"), false, false).unwrap();

        let err = ordering.compare(&int, &float).unwrap_err();
        assert!(matches!(err, OrderingError::TypeMismatch { key: "sstable_count", .. }), "{err:?}");

        let mut refs = vec![&int, &float];
        assert!(matches!(ordering.sort(&mut refs), Err(OrderingError::TypeMismatch { .. })));
    }

    #[test]
    fn test_opaque_absent_fails() {
        let absent = TableStatistics {
            pending_flushes: None,
            ..TableStatistics::new("ks", "absent")
        };
        let present = TableStatistics::new("ks", "present");
        let ordering = TableOrdering::new(Some("pending_flushes"), false, false).unwrap();

        assert!(matches!(
            ordering.compare(&absent, &present),
            Err(OrderingError::TypeMismatch { key: "pending_flushes", .. })
        ));
    }

    #[test]
    fn test_null_record() {
        let table = TableStatistics::new("ks", "t");
        let ordering = TableOrdering::new(Some("reads"), false, false).unwrap();

        assert_eq!(ordering.compare_records(Some(&table), None), Err(OrderingError::NullRecord));
        assert_eq!(ordering.compare_records(None, Some(&table)), Err(OrderingError::NullRecord));
        assert_eq!(ordering.compare_records(Some(&table), Some(&table)), Ok(Ordering::Equal));
    }

    #[test]
    fn test_unsupported_key_fails_before_comparing() {
        assert_eq!(
            TableOrdering::new(Some("bogus_key"), false, false),
            Err(OrderingError::UnsupportedSortKey("bogus_key".into()))
        );
    }

    #[test]
    fn test_no_key_orders_by_full_name_ignoring_direction() {
        let tables = vec![
            TableStatistics::new("keyspace2", "alpha"),
            TableStatistics::new("keyspace1", "zeta"),
            TableStatistics::new("keyspace1", "beta"),
        ];

        for ascending in [false, true] {
            let ordering = TableOrdering::new(None, ascending, false).unwrap();
            let mut refs: Vec<_> = tables.iter().collect();
            ordering.sort(&mut refs).unwrap();
            assert_eq!(names(&refs), ["beta", "zeta", "alpha"]);
        }

        let empty = TableOrdering::new(Some(""), false, false).unwrap();
        assert_eq!(empty.key(), None);
        assert_eq!(TableOrdering::by_name().key(), None);
    }

    #[test]
    fn test_name_keys_follow_direction() {
        let tables = create_test_tables();
        assert_eq!(sorted(&tables, "table_name", true), ["table1", "table2", "table3", "table4", "table5", "table6"]);
        assert_eq!(sorted(&tables, "full_name", false), ["table6", "table5", "table4", "table3", "table2", "table1"]);
    }

    #[test]
    fn test_reversing_direction_reverses_distinct_values_for_every_key() {
        let tables = create_test_tables();
        for key in SortKey::all() {
            let descending = TableOrdering::by_key(key, false, false);
            let ascending = TableOrdering::by_key(key, true, false);
            for x in &tables {
                for y in &tables {
                    let down = descending.compare(x, y).unwrap();
                    let up = ascending.compare(x, y).unwrap();
                    assert_eq!(down, up.reverse(), "key '{key}' on {} vs {}", x.full_name(), y.full_name());
                    assert_eq!(down, descending.compare(y, x).unwrap().reverse(), "key '{key}' is not antisymmetric");
                }
            }
        }
    }

    #[test]
    fn test_sort_is_stable_and_repeatable() {
        let tables: Vec<_> = (0..5).map(|i| TableStatistics::new("ks", format!("t{i}"))).collect();
        let ordering = TableOrdering::new(Some("reads"), false, false).unwrap();

        let mut refs: Vec<_> = tables.iter().collect();
        ordering.sort(&mut refs).unwrap();
        assert_eq!(names(&refs), ["t0", "t1", "t2", "t3", "t4"]);

        let first = names(&refs);
        ordering.sort(&mut refs).unwrap();
        assert_eq!(names(&refs), first);
    }
}
