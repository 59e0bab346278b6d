//! Per-region download and upload bandwidth.
//!
//! Two parallel arrays in bits/second, one entry per region plus one extra
//! reserved slot at the end. The extra slot is the default/cross-region
//! value: it stands in for any link whose endpoint has no region-specific
//! figure, and for synthetic regions added outside the modeled set.

use serde::{Deserialize, Serialize};

use crate::table::TableError;

/// Per-region bandwidth arrays with a trailing default slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandwidthTable {
    download: Vec<u64>,
    upload: Vec<u64>,
}

impl BandwidthTable {
    /// Validate and wrap download/upload arrays.
    ///
    /// Both arrays must have the same length, at least 2 (one region plus
    /// the default slot), and every entry must be positive -- a zero
    /// bandwidth would make transmission time infinite.
    pub fn new(download: Vec<u64>, upload: Vec<u64>) -> Result<Self, TableError> {
        if download.len() != upload.len() {
            return Err(TableError::LengthMismatch {
                download: download.len(),
                upload: upload.len(),
            });
        }
        if download.len() < 2 {
            return Err(TableError::Empty { table: "bandwidth" });
        }
        for (slot, &bw) in download.iter().enumerate() {
            if bw == 0 {
                return Err(TableError::ZeroBandwidth { direction: "download", slot });
            }
        }
        for (slot, &bw) in upload.iter().enumerate() {
            if bw == 0 {
                return Err(TableError::ZeroBandwidth { direction: "upload", slot });
            }
        }
        Ok(Self { download, upload })
    }

    /// Number of modeled regions (array length minus the default slot).
    pub fn region_count(&self) -> usize {
        self.download.len() - 1
    }

    /// Index of the reserved default/cross-region slot.
    pub fn default_slot(&self) -> usize {
        self.region_count()
    }

    /// Download bandwidth for `region` in bits/second, or `None` past the
    /// default slot.
    pub fn download(&self, region: usize) -> Option<u64> {
        self.download.get(region).copied()
    }

    /// Upload bandwidth for `region` in bits/second, or `None` past the
    /// default slot.
    pub fn upload(&self, region: usize) -> Option<u64> {
        self.upload.get(region).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
