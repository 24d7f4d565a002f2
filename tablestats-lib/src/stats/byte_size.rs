use crate::ordering::{OrderingError, parse_byte_size};
use compact_str::CompactString;
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// A size as the node reported it: a plain byte count such as `"9001"`, or a
/// human-readable string such as `"3.14 MiB"`.
///
/// The text is kept verbatim for display. [`ByteSize::bytes`] recovers the
/// magnitude when the value has to be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteSize(CompactString);

impl ByteSize {
    #[must_use]
    pub fn new(text: impl Into<CompactString>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the text into a byte count.
    ///
    /// # Errors
    ///
    /// Returns [`OrderingError::MalformedNumericString`] if the text does not
    /// match the requested encoding.
    pub fn bytes(&self, human_readable: bool) -> Result<u64, OrderingError> {
        parse_byte_size(&self.0, human_readable)
    }
}

impl Display for ByteSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ByteSize {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Default for ByteSize {
    fn default() -> Self {
        Self::new("0")
    }
}
