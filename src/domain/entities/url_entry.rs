//! Url entry entity representing a committed lookup table row.

use crate::utils::numeral_codec;

/// A canonical URL together with the sequential identifier allocated to it.
///
/// Entries are immutable once committed: the identifier for a canonical URL
/// never changes for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub id: u64,
    pub canonical_url: String,
}

impl UrlEntry {
    /// Creates a new UrlEntry instance.
    pub fn new(id: u64, canonical_url: String) -> Self {
        Self { id, canonical_url }
    }

    /// Returns the short code for this entry's identifier.
    pub fn code(&self) -> String {
        numeral_codec::encode(self.id)
    }
}

/// Outcome of a get-or-allocate call against the lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// The canonical URL was already known.
    Existing(UrlEntry),
    /// A new identifier was allocated by this call.
    Created(UrlEntry),
}

impl Allocation {
    /// Returns true if this call allocated the identifier.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// Borrows the entry, whether found or created.
    pub fn entry(&self) -> &UrlEntry {
        match self {
            Self::Existing(entry) | Self::Created(entry) => entry,
        }
    }

    /// Consumes the allocation and returns its entry.
    pub fn into_entry(self) -> UrlEntry {
        match self {
            Self::Existing(entry) | Self::Created(entry) => entry,
        }
    }
}
