use compact_str::CompactString;

/// Failures raised while resolving a sort key or comparing tables.
///
/// None of these are transient: they point at a bad key or a malformed
/// snapshot and are returned to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderingError {
    /// The key is not part of the sort-key vocabulary.
    #[error("unsupported sort key '{0}'")]
    UnsupportedSortKey(CompactString),

    /// The two values cannot be compared, because their kinds differ or one is absent.
    #[error("cannot order by '{key}': {left} is not comparable with {right}")]
    TypeMismatch {
        key: &'static str,
        left: CompactString,
        right: CompactString,
    },

    /// One of the records to compare is missing.
    #[error("cannot order a missing table record")]
    NullRecord,

    /// A size string does not match the expected encoding.
    #[error("malformed numeric string '{0}'")]
    MalformedNumericString(CompactString),
}
