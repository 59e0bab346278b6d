// Copyright 2026 Netfabric Developers. All rights reserved.
// P2P Network Simulation Suite - Cost Fabric

//! Bundled measurement datasets.
//!
//! Each table ships as a set of named presets: latency and bandwidth
//! snapshots from two measurement years, node-population distributions for
//! several coins, and a degree CDF. Exactly one preset per table is active
//! for a simulation run, selected through [`PresetSelection`]; the raw
//! constants here are never addressed directly by the rest of the crate,
//! which keeps a stale snapshot from leaking into a run that selected
//! another one.

use serde::{Deserialize, Serialize};

/// Regions a simulated node can live in. Every bundled table below is
/// indexed in this order.
pub const REGIONS: [&str; 6] = [
    "NORTH_AMERICA",
    "EUROPE",
    "SOUTH_AMERICA",
    "ASIA_PACIFIC",
    "JAPAN",
    "AUSTRALIA",
];

// ---------------------------------------------------------------------------
// Latency snapshots (one-way, milliseconds)
// ---------------------------------------------------------------------------

const LATENCY_2015: [[u64; 6]; 6] = [
    [36, 119, 255, 310, 154, 208],
    [119, 12, 221, 242, 266, 350],
    [255, 221, 137, 347, 256, 269],
    [310, 242, 347, 99, 172, 278],
    [154, 266, 256, 172, 9, 163],
    [208, 350, 269, 278, 163, 22],
];

const LATENCY_2019: [[u64; 6]; 6] = [
    [32, 124, 184, 198, 151, 189],
    [124, 11, 227, 237, 252, 294],
    [184, 227, 88, 325, 301, 322],
    [198, 237, 325, 85, 58, 198],
    [151, 252, 301, 58, 12, 126],
    [189, 294, 322, 198, 126, 16],
];

/// Named latency snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatencyPreset {
    #[serde(rename = "2015")]
    Year2015,
    #[serde(rename = "2019")]
    Year2019,
}

impl LatencyPreset {
    /// Raw matrix data for this snapshot.
    pub fn matrix(&self) -> Vec<Vec<u64>> {
        let data = match self {
            Self::Year2015 => &LATENCY_2015,
            Self::Year2019 => &LATENCY_2019,
        };
        data.iter().map(|row| row.to_vec()).collect()
    }
}

// ---------------------------------------------------------------------------
// Bandwidth snapshots (bits/second; last slot = default/cross-region)
// ---------------------------------------------------------------------------

const DOWNLOAD_2015: [u64; 7] = [
    25_000_000, 24_000_000, 6_500_000, 10_000_000, 17_500_000, 14_000_000, 6_000_000,
];
const UPLOAD_2015: [u64; 7] = [
    4_700_000, 8_100_000, 1_800_000, 5_300_000, 3_400_000, 5_200_000, 6_000_000,
];

const DOWNLOAD_2019: [u64; 7] = [
    52_000_000, 40_000_000, 18_000_000, 22_800_000, 22_800_000, 29_900_000, 6_000_000,
];
const UPLOAD_2019: [u64; 7] = [
    19_200_000, 20_700_000, 5_800_000, 15_700_000, 10_200_000, 11_300_000, 6_000_000,
];

/// Named bandwidth snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandwidthPreset {
    #[serde(rename = "2015")]
    Year2015,
    #[serde(rename = "2019")]
    Year2019,
}

impl BandwidthPreset {
    /// Raw `(download, upload)` arrays for this snapshot.
    pub fn arrays(&self) -> (Vec<u64>, Vec<u64>) {
        match self {
            Self::Year2015 => (DOWNLOAD_2015.to_vec(), UPLOAD_2015.to_vec()),
            Self::Year2019 => (DOWNLOAD_2019.to_vec(), UPLOAD_2019.to_vec()),
        }
    }
}

// ---------------------------------------------------------------------------
// Region distributions (fraction of nodes per region)
// ---------------------------------------------------------------------------

const REGION_BITCOIN_2015: [f64; 6] = [0.3869, 0.5159, 0.0113, 0.0574, 0.0119, 0.0166];
const REGION_BITCOIN_2019: [f64; 6] = [0.3316, 0.4998, 0.0090, 0.1177, 0.0224, 0.0195];
const REGION_LITECOIN: [f64; 6] = [0.3661, 0.4791, 0.0149, 0.1022, 0.0238, 0.0139];
const REGION_DOGECOIN: [f64; 6] = [0.3924, 0.4879, 0.0212, 0.0697, 0.0106, 0.0182];

/// Named node-population distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegionDistributionPreset {
    #[serde(rename = "bitcoin-2015")]
    Bitcoin2015,
    #[serde(rename = "bitcoin-2019")]
    Bitcoin2019,
    Litecoin,
    Dogecoin,
}

impl RegionDistributionPreset {
    /// Raw probability mass function for this snapshot.
    pub fn pmf(&self) -> Vec<f64> {
        let data = match self {
            Self::Bitcoin2015 => &REGION_BITCOIN_2015,
            Self::Bitcoin2019 => &REGION_BITCOIN_2019,
            Self::Litecoin => &REGION_LITECOIN,
            Self::Dogecoin => &REGION_DOGECOIN,
        };
        data.to_vec()
    }
}

// ---------------------------------------------------------------------------
// Degree distributions (cumulative, by outbound-link bucket)
// ---------------------------------------------------------------------------

const DEGREE_BITCOIN_2015: [f64; 20] = [
    0.025, 0.050, 0.075, 0.10, 0.20, 0.30, 0.40, 0.50, 0.60, 0.70, 0.80, 0.85, 0.90, 0.95, 0.97,
    0.97, 0.98, 0.99, 0.995, 1.0,
];

/// Named out-degree distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegreeDistributionPreset {
    #[serde(rename = "bitcoin-2015")]
    Bitcoin2015,
}

impl DegreeDistributionPreset {
    /// Raw cumulative distribution for this snapshot.
    pub fn cdf(&self) -> Vec<f64> {
        match self {
            Self::Bitcoin2015 => DEGREE_BITCOIN_2015.to_vec(),
        }
    }
}

// ---------------------------------------------------------------------------
// PresetSelection
// ---------------------------------------------------------------------------

/// One active preset per table.
///
/// The default mirrors the newest bundled snapshots: 2019 latency and
/// bandwidth, the bitcoin-2019 node population, and the bitcoin-2015 degree
/// data (the only degree snapshot available).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetSelection {
    pub latency: LatencyPreset,
    pub bandwidth: BandwidthPreset,
    pub region_distribution: RegionDistributionPreset,
    pub degree_distribution: DegreeDistributionPreset,
}

impl Default for PresetSelection {
    fn default() -> Self {
        Self {
            latency: LatencyPreset::Year2019,
            bandwidth: BandwidthPreset::Year2019,
            region_distribution: RegionDistributionPreset::Bitcoin2019,
            degree_distribution: DegreeDistributionPreset::Bitcoin2015,
        }
    }
}

impl PresetSelection {
    /// Parse a selection from JSON, e.g.
    /// `{"latency":"2019","region_distribution":"bitcoin-2019"}`.
    /// Omitted fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
