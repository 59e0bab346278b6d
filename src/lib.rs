// Copyright 2026 Netfabric Developers. All rights reserved.
// P2P Network Simulation Suite - Cost Fabric

//! Network cost fabric for a peer-to-peer network simulator.
//!
//! Given a population of simulated nodes, this crate assigns each node a
//! geographic region drawn from an empirical distribution, assigns it an
//! outbound-connection count drawn from an empirical cumulative
//! distribution, and prices every point-to-point message as propagation
//! latency (region pair) plus transmission time (message size over the
//! slower of sender upload and receiver download bandwidth).
//!
//! The scheduler that drives simulated time, the topology builder that
//! wires peers, and block/transaction propagation all live outside this
//! crate; they call in for region, degree, and delay values.
//!
//! Every table is loaded once (from bundled [`presets`] or external data
//! through [`NetworkConfig`]) and immutable afterwards, so one
//! [`NetworkCostModel`] can be shared freely across threads and runs. The
//! only mutable state per call is the caller-supplied [`rand::Rng`]; with a
//! seeded generator the whole fabric is deterministic.

pub mod bandwidth;
pub mod config;
pub mod distribution;
pub mod latency;
pub mod model;
pub mod presets;
pub mod region;
pub mod table;

pub use bandwidth::BandwidthTable;
pub use config::NetworkConfig;
pub use distribution::{DegreeDistribution, DistributionError, RegionDistribution};
pub use latency::LatencyTable;
pub use model::{ModelError, NetworkCostModel};
pub use presets::{
    BandwidthPreset, DegreeDistributionPreset, LatencyPreset, PresetSelection,
    RegionDistributionPreset,
};
pub use region::{RegionCatalog, RegionError};
pub use table::TableError;
