//! Empirical distributions for node placement and out-degree.
//!
//! Both samplers use inverse-transform sampling with a first-crossing
//! linear scan. The scan rule is deliberately part of the contract: given
//! the same seed and the same uniform draw sequence, two runs assign
//! identical regions and degrees. Alias tables or binary search would be
//! faster but would not pin down tie-breaking the same way, and the tables
//! here have at most a few dozen entries.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tolerance for floating error in a distribution that should sum to 1.
const MASS_TOLERANCE: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised when distribution data is malformed.
///
/// All of these fire at construction time; a distribution that constructs
/// can serve every query without error. Rounding slack *inside* a validated
/// distribution is absorbed by end-of-array clamping, never raised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributionError {
    #[error("distribution is empty")]
    Empty,

    #[error("probability at index {index} is negative ({value})")]
    NegativeMass { index: usize, value: f64 },

    #[error("probabilities sum to {sum}, expected 1.0 within tolerance")]
    BadMassSum { sum: f64 },

    #[error("cumulative value at index {index} decreases ({value} after {previous})")]
    NotMonotonic { index: usize, previous: f64, value: f64 },

    #[error("cumulative value at index {index} is outside [0, 1] ({value})")]
    OutOfRange { index: usize, value: f64 },

    #[error("final cumulative value is {value}, expected 1.0 within tolerance")]
    BadFinalValue { value: f64 },
}

// ---------------------------------------------------------------------------
// RegionDistribution
// ---------------------------------------------------------------------------

/// Probability mass over regions; samples a node's home region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionDistribution {
    pmf: Vec<f64>,
}

impl RegionDistribution {
    /// Validate and wrap a probability mass function.
    ///
    /// Every entry must be non-negative and the total mass must be 1.0
    /// within `1e-6`.
    pub fn new(pmf: Vec<f64>) -> Result<Self, DistributionError> {
        if pmf.is_empty() {
            return Err(DistributionError::Empty);
        }
        let mut sum = 0.0;
        for (index, &value) in pmf.iter().enumerate() {
            if value < 0.0 {
                return Err(DistributionError::NegativeMass { index, value });
            }
            sum += value;
        }
        if (sum - 1.0).abs() > MASS_TOLERANCE {
            return Err(DistributionError::BadMassSum { sum });
        }
        Ok(Self { pmf })
    }

    /// Number of regions covered.
    pub fn region_count(&self) -> usize {
        self.pmf.len()
    }

    /// Deterministic core of the sampler: return the first region index at
    /// which the running PMF sum reaches `u`.
    ///
    /// When floating accumulation falls short of 1.0 and `u` lands in the
    /// shortfall, the last region is returned rather than failing; every
    /// `u` in `[0, 1]` maps to a valid index.
    pub fn pick(&self, u: f64) -> usize {
        let mut acc = 0.0;
        for (index, &mass) in self.pmf.iter().enumerate() {
            acc += mass;
            if acc >= u {
                return index;
            }
        }
        self.pmf.len() - 1
    }

    /// Sample a region index from `rng`.
    ///
    /// Draws `u = 1.0 - rng.gen::<f64>()`, uniform in `(0, 1]`, so a
    /// leading zero-mass region can never absorb the `u == 0` corner.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.pick(1.0 - rng.gen::<f64>())
    }
}

// ---------------------------------------------------------------------------
// DegreeDistribution
// ---------------------------------------------------------------------------

/// Cumulative distribution over out-degree buckets.
///
/// The value returned by [`sample`](Self::sample) is the raw bucket index;
/// mapping it to an actual outbound-connection count (index + 1, a scaled
/// value, ...) is the caller's policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeDistribution {
    cdf: Vec<f64>,
}

impl DegreeDistribution {
    /// Validate and wrap a cumulative distribution.
    ///
    /// Values must lie in `[0, 1]`, never decrease, and end at 1.0 within
    /// `1e-6`. Plateaus are legal: equal consecutive values mark zero-mass
    /// buckets.
    pub fn new(cdf: Vec<f64>) -> Result<Self, DistributionError> {
        if cdf.is_empty() {
            return Err(DistributionError::Empty);
        }
        let mut previous = 0.0;
        for (index, &value) in cdf.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(DistributionError::OutOfRange { index, value });
            }
            if value < previous {
                return Err(DistributionError::NotMonotonic { index, previous, value });
            }
            previous = value;
        }
        let last = cdf[cdf.len() - 1];
        if (last - 1.0).abs() > MASS_TOLERANCE {
            return Err(DistributionError::BadFinalValue { value: last });
        }
        Ok(Self { cdf })
    }

    /// Number of degree buckets.
    pub fn bucket_count(&self) -> usize {
        self.cdf.len()
    }

    /// Deterministic core of the sampler: smallest bucket index whose
    /// cumulative value reaches `u`, clamped to the last bucket when
    /// rounding leaves the final value just short of `u`.
    pub fn pick(&self, u: f64) -> usize {
        for (index, &cumulative) in self.cdf.iter().enumerate() {
            if cumulative >= u {
                return index;
            }
        }
        self.cdf.len() - 1
    }

    /// Sample a degree bucket index from `rng`.
    ///
    /// Same `(0, 1]` draw as [`RegionDistribution::sample`], so a bucket
    /// with zero cumulative mass is never selected.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.pick(1.0 - rng.gen::<f64>())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
