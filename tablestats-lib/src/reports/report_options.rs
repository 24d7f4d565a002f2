use crate::ordering::{SortKey, TableOrdering};

/// Controls how a snapshot is ordered and truncated in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Sort key for the flat sorted layout; `None` selects the grouped layout.
    pub sort_key: Option<SortKey>,

    /// Order smallest first instead of largest first.
    pub ascending: bool,

    /// Keep only the first `top` tables of the sorted listing; zero keeps all.
    pub top: usize,

    /// Size fields are `<number> <unit>` strings rather than plain byte counts.
    pub human_readable: bool,
}

impl ReportOptions {
    #[must_use]
    pub const fn is_grouped(&self) -> bool {
        self.sort_key.is_none()
    }

    #[must_use]
    pub const fn ordering(&self) -> TableOrdering {
        match self.sort_key {
            Some(key) => TableOrdering::by_key(key, self.ascending, self.human_readable),
            None => TableOrdering::by_name(),
        }
    }
}
