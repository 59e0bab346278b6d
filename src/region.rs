//! Region catalog: the ordered, immutable list of geographic regions.
//!
//! Every other table in the cost fabric (latency matrix, bandwidth arrays,
//! region distribution) is indexed by position in this catalog, so all of
//! them must share its cardinality. A region index is a plain `usize`; the
//! catalog backs it with a human-readable name.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from region name lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegionError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}

// ---------------------------------------------------------------------------
// RegionCatalog
// ---------------------------------------------------------------------------

/// Fixed ordered list of region names.
///
/// Immutable after construction; lookups never allocate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCatalog {
    names: Vec<String>,
}

impl RegionCatalog {
    /// Build a catalog from an ordered list of names.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of regions in the catalog.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the region at `index`, or `None` when out of range.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of `name` in the catalog.
    pub fn index_of(&self, name: &str) -> Result<usize, RegionError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| RegionError::UnknownRegion(name.to_string()))
    }

    /// Iterate over region names in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
