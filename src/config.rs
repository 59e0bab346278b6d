//! Raw table data, decoupled from the validated model types.
//!
//! [`NetworkConfig`] is the swap point for external data sources: the
//! bundled presets resolve into one, and the same shape deserializes from
//! JSON, so a simulation can feed the model from a file without touching
//! the sampler or delay-computation contracts. Validation happens once,
//! in [`NetworkCostModel::from_config`](crate::NetworkCostModel::from_config).

use serde::{Deserialize, Serialize};

use crate::presets::{PresetSelection, REGIONS};

/// Unvalidated cost-fabric table data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Ordered region names; all other tables are indexed in this order.
    pub regions: Vec<String>,
    /// One-way latency matrix, milliseconds.
    pub latency_ms: Vec<Vec<u64>>,
    /// Per-region download bandwidth plus trailing default slot, bits/second.
    pub download_bps: Vec<u64>,
    /// Per-region upload bandwidth plus trailing default slot, bits/second.
    pub upload_bps: Vec<u64>,
    /// Fraction of nodes placed in each region.
    pub region_distribution: Vec<f64>,
    /// Cumulative distribution over out-degree buckets.
    pub degree_distribution: Vec<f64>,
}

impl NetworkConfig {
    /// Resolve a preset selection into raw table data.
    pub fn from_presets(selection: &PresetSelection) -> Self {
        let (download_bps, upload_bps) = selection.bandwidth.arrays();
        Self {
            regions: REGIONS.iter().map(|r| r.to_string()).collect(),
            latency_ms: selection.latency.matrix(),
            download_bps,
            upload_bps,
            region_distribution: selection.region_distribution.pmf(),
            degree_distribution: selection.degree_distribution.cdf(),
        }
    }

    /// Parse raw table data from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::from_presets(&PresetSelection::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
