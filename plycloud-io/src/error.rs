//! Error types for PLY export

use thiserror::Error;

/// Errors produced while writing a point cloud
///
/// Every destination failure maps to [`WriteError::SinkUnavailable`]:
/// a path that cannot be created, a permission denial, a full disk, or a
/// stream that fails mid-write. Length mismatches between points and colors
/// are deliberately not errors; the writer omits colors instead.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Sink unavailable: {0}")]
    SinkUnavailable(#[from] std::io::Error),
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, WriteError>;
