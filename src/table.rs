//! Shared construction errors for the static cost tables.

/// Errors raised while validating latency or bandwidth table data.
///
/// All variants are load-time failures: once a table constructs, every
/// lookup on it is infallible apart from plain out-of-range misses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("{table} table is empty")]
    Empty { table: &'static str },

    #[error("latency matrix is not square: row {row} has width {width}, expected {rows}")]
    NotSquare { rows: usize, row: usize, width: usize },

    #[error("intra-region latency for region {region} must be positive")]
    ZeroDiagonal { region: usize },

    #[error("download and upload arrays differ in length: {download} vs {upload}")]
    LengthMismatch { download: usize, upload: usize },

    #[error("{direction} bandwidth in slot {slot} must be positive")]
    ZeroBandwidth { direction: &'static str, slot: usize },
}
