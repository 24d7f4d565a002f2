use super::OrderingError;
use super::sort_key_def::{Rule, SORT_KEY_DEFINITIONS, SortKeyDef};
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

/// A resolved entry of the sort-key vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct SortKey {
    def: &'static SortKeyDef,
}

impl SortKey {
    /// Resolve a sort-key name or one of its short aliases.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::UnsupportedSortKey`] if the name is not in the vocabulary.
    pub fn parse(name: &str) -> Result<Self, OrderingError> {
        SORT_KEY_DEFINITIONS
            .iter()
            .find(|def| def.name == name || def.aliases.contains(&name))
            .map(|def| Self { def })
            .ok_or_else(|| OrderingError::UnsupportedSortKey(name.into()))
    }

    /// Every supported sort key, in alphabetical order.
    pub fn all() -> impl Iterator<Item = Self> {
        SORT_KEY_DEFINITIONS.iter().map(|def| Self { def })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.def.name
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.def.description
    }

    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        self.def.aliases
    }

    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.def.rule
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.def.name == other.def.name
    }
}

impl Eq for SortKey {}

impl FromStr for SortKey {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.def.name)
    }
}
