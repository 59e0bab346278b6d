// Copyright 2026 Netfabric Developers. All rights reserved.
// P2P Network Simulation Suite - Cost Fabric

//! The composed network cost model.
//!
//! [`NetworkCostModel`] ties the catalog, latency matrix, bandwidth arrays
//! and the two empirical distributions together behind three queries:
//! sample a region, sample an out-degree, and compute the delay of one
//! message between two regions. Cross-table cardinality is checked once at
//! construction; after that every query either succeeds or, for delay
//! computation with an index past the default slot, fails fast with
//! [`ModelError::InvalidIndex`].
//!
//! The model is immutable and shareable: all queries take `&self`, and the
//! samplers consume a caller-owned RNG, so concurrent use from many worker
//! threads needs no locking.

use rand::Rng;

use crate::bandwidth::BandwidthTable;
use crate::config::NetworkConfig;
use crate::distribution::{DegreeDistribution, DistributionError, RegionDistribution};
use crate::latency::LatencyTable;
use crate::presets::PresetSelection;
use crate::region::RegionCatalog;
use crate::table::TableError;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from model construction and delay computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A region index past the reserved default slot. Sampler clamping does
    /// not apply here: an index the tables cannot answer for is a caller
    /// bug, not floating-point slack.
    #[error("region index {index} is out of bounds (default slot is {default_slot})")]
    InvalidIndex { index: usize, default_slot: usize },

    #[error("{table} table covers {actual} regions, catalog has {expected}")]
    TableMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

// ---------------------------------------------------------------------------
// NetworkCostModel
// ---------------------------------------------------------------------------

/// Immutable composition of the four cost tables.
#[derive(Debug, Clone)]
pub struct NetworkCostModel {
    catalog: RegionCatalog,
    latency: LatencyTable,
    bandwidth: BandwidthTable,
    regions: RegionDistribution,
    degrees: DegreeDistribution,
}

impl NetworkCostModel {
    /// Compose pre-built tables, rejecting any whose cardinality disagrees
    /// with the catalog.
    pub fn new(
        catalog: RegionCatalog,
        latency: LatencyTable,
        bandwidth: BandwidthTable,
        regions: RegionDistribution,
        degrees: DegreeDistribution,
    ) -> Result<Self, ModelError> {
        let expected = catalog.len();
        if latency.region_count() != expected {
            return Err(ModelError::TableMismatch {
                table: "latency",
                expected,
                actual: latency.region_count(),
            });
        }
        if bandwidth.region_count() != expected {
            return Err(ModelError::TableMismatch {
                table: "bandwidth",
                expected,
                actual: bandwidth.region_count(),
            });
        }
        if regions.region_count() != expected {
            return Err(ModelError::TableMismatch {
                table: "region distribution",
                expected,
                actual: regions.region_count(),
            });
        }
        Ok(Self {
            catalog,
            latency,
            bandwidth,
            regions,
            degrees,
        })
    }

    /// Validate raw table data and build the model from it.
    pub fn from_config(config: NetworkConfig) -> Result<Self, ModelError> {
        let catalog = RegionCatalog::new(config.regions);
        let latency = LatencyTable::new(config.latency_ms)?;
        let bandwidth = BandwidthTable::new(config.download_bps, config.upload_bps)?;
        let regions = RegionDistribution::new(config.region_distribution)?;
        let degrees = DegreeDistribution::new(config.degree_distribution)?;
        Self::new(catalog, latency, bandwidth, regions, degrees)
    }

    /// Build the model from bundled presets.
    pub fn from_presets(selection: &PresetSelection) -> Result<Self, ModelError> {
        Self::from_config(NetworkConfig::from_presets(selection))
    }

    /// Number of modeled regions.
    pub fn region_count(&self) -> usize {
        self.catalog.len()
    }

    /// Index of the reserved default/cross-region bandwidth slot.
    pub fn default_slot(&self) -> usize {
        self.bandwidth.default_slot()
    }

    /// The region catalog backing this model.
    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Sample a home region for a new node.
    pub fn sample_region<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.regions.sample(rng)
    }

    /// Sample an out-degree bucket index for a new node. The mapping from
    /// bucket index to an outbound-connection count is the caller's policy.
    pub fn sample_degree<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.degrees.sample(rng)
    }

    /// Delay in milliseconds for one message of `size_bits` from a node in
    /// `sender` to a node in `receiver`.
    ///
    /// `delay = L[sender][receiver] + size_bits / min(upload[sender],
    /// download[receiver]) * 1000`. Either side may be the reserved default
    /// slot (`index == region_count`): that side then uses the default
    /// bandwidth, and a pair involving it contributes no propagation
    /// latency, since the latency matrix has no row for it. Indices past
    /// the default slot fail with [`ModelError::InvalidIndex`].
    ///
    /// A zero-size message costs exactly the propagation latency.
    pub fn transmission_delay(
        &self,
        sender: usize,
        receiver: usize,
        size_bits: u64,
    ) -> Result<u64, ModelError> {
        let default_slot = self.bandwidth.default_slot();
        let upload = self
            .bandwidth
            .upload(sender)
            .ok_or(ModelError::InvalidIndex { index: sender, default_slot })?;
        let download = self
            .bandwidth
            .download(receiver)
            .ok_or(ModelError::InvalidIndex { index: receiver, default_slot })?;

        let propagation = self.latency.between(sender, receiver).unwrap_or(0);
        let effective = upload.min(download);
        // Widened intermediate: size_bits * 1000 can exceed u64.
        let transmission = (u128::from(size_bits) * 1000 / u128::from(effective)) as u64;
        Ok(propagation + transmission)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> NetworkCostModel {
        // Two regions; upload is the bottleneck on every pair.
        let config = NetworkConfig {
            regions: vec!["WEST".to_string(), "EAST".to_string()],
            latency_ms: vec![vec![10, 120], vec![118, 12]],
            download_bps: vec![50_000_000, 40_000_000, 6_000_000],
            upload_bps: vec![20_000_000, 10_000_000, 6_000_000],
            region_distribution: vec![0.5, 0.5],
            degree_distribution: vec![0.5, 1.0],
        };
        NetworkCostModel::from_config(config).expect("test: valid config")
    }

    #[test]
    fn zero_size_is_pure_propagation() {
        let m = model();
        for sender in 0..m.region_count() {
            for receiver in 0..m.region_count() {
                let delay = m
                    .transmission_delay(sender, receiver, 0)
                    .expect("test: in-range delay");
                assert_eq!(Some(delay), m.latency.between(sender, receiver));
            }
        }
    }

    #[test]
    fn delay_formula() {
        let m = model();
        // 0 -> 1: latency 120ms, min(upload 20Mbps, download 40Mbps) = 20Mbps.
        // 10 Mbit / 20 Mbps = 0.5 s = 500 ms.
        let delay = m
            .transmission_delay(0, 1, 10_000_000)
            .expect("test: in-range delay");
        assert_eq!(delay, 120 + 500);
    }

    #[test]
    fn delay_monotonic_in_size() {
        let m = model();
        let mut previous = 0;
        for size in [0u64, 1, 1_000, 1_000_000, 50_000_000, 1_000_000_000] {
            let delay = m
                .transmission_delay(1, 0, size)
                .expect("test: in-range delay");
            assert!(delay >= previous, "delay decreased at size {size}");
            previous = delay;
        }
    }

    #[test]
    fn default_slot_succeeds_with_default_bandwidth() {
        let m = model();
        let slot = m.default_slot();
        // Sender in the default slot: upload 6Mbps is the bottleneck, and
        // no latency row exists, so 6 Mbit takes exactly 1000 ms.
        let delay = m
            .transmission_delay(slot, 0, 6_000_000)
            .expect("test: default slot accepted");
        assert_eq!(delay, 1000);
        // Receiver side behaves the same way.
        let delay = m
            .transmission_delay(0, slot, 6_000_000)
            .expect("test: default slot accepted");
        assert_eq!(delay, 1000);
    }

    #[test]
    fn past_default_slot_fails_fast() {
        let m = model();
        let bad = m.default_slot() + 1;
        let err = m.transmission_delay(bad, 0, 0);
        assert_eq!(
            err,
            Err(ModelError::InvalidIndex { index: bad, default_slot: m.default_slot() })
        );
        let err = m.transmission_delay(0, bad, 0);
        assert_eq!(
            err,
            Err(ModelError::InvalidIndex { index: bad, default_slot: m.default_slot() })
        );
    }

    #[test]
    fn cardinality_mismatch_rejected() {
        // Three-region latency matrix against a two-region catalog.
        let config = NetworkConfig {
            regions: vec!["WEST".to_string(), "EAST".to_string()],
            latency_ms: vec![vec![10, 20, 30], vec![20, 10, 30], vec![30, 30, 10]],
            download_bps: vec![50_000_000, 40_000_000, 6_000_000],
            upload_bps: vec![20_000_000, 10_000_000, 6_000_000],
            region_distribution: vec![0.5, 0.5],
            degree_distribution: vec![1.0],
        };
        let err = NetworkCostModel::from_config(config);
        assert!(matches!(
            err,
            Err(ModelError::TableMismatch { table: "latency", expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn malformed_distribution_rejected_at_load() {
        let config = NetworkConfig {
            region_distribution: vec![0.75, 0.75],
            ..NetworkConfig::default()
        };
        let err = NetworkCostModel::from_config(config);
        assert!(matches!(
            err,
            Err(ModelError::Distribution(DistributionError::BadMassSum { .. }))
        ));
    }

    #[test]
    fn large_message_does_not_overflow() {
        let m = model();
        // u64::MAX bits * 1000 overflows u64; the widened intermediate must
        // carry it.
        let delay = m.transmission_delay(0, 1, u64::MAX);
        assert!(delay.is_ok());
    }
}
