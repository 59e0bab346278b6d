//! Region-to-region propagation latency.
//!
//! A square matrix `L[i][j]` of one-way delays in whole milliseconds. The
//! matrix is directed: `L[i][j]` and `L[j][i]` may differ, and no symmetry
//! is assumed or enforced. The diagonal holds intra-region latency and must
//! be strictly positive.

use serde::{Deserialize, Serialize};

use crate::table::TableError;

/// Directed region-pair latency matrix (milliseconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyTable {
    matrix: Vec<Vec<u64>>,
}

impl LatencyTable {
    /// Validate and wrap a latency matrix.
    ///
    /// The matrix must be non-empty, square, and have a strictly positive
    /// diagonal. Off-diagonal zeros are accepted (two regions can share a
    /// datacenter).
    pub fn new(matrix: Vec<Vec<u64>>) -> Result<Self, TableError> {
        if matrix.is_empty() {
            return Err(TableError::Empty { table: "latency" });
        }
        let n = matrix.len();
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(TableError::NotSquare {
                    rows: n,
                    row: i,
                    width: row.len(),
                });
            }
            if row[i] == 0 {
                return Err(TableError::ZeroDiagonal { region: i });
            }
        }
        Ok(Self { matrix })
    }

    /// Number of regions covered by the matrix.
    pub fn region_count(&self) -> usize {
        self.matrix.len()
    }

    /// One-way latency from region `from` to region `to`, or `None` when
    /// either index is out of range.
    pub fn between(&self, from: usize, to: usize) -> Option<u64> {
        self.matrix.get(from).and_then(|row| row.get(to)).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
