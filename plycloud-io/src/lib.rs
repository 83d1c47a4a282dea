//! ASCII PLY export for point clouds
//!
//! This crate writes plycloud point clouds as ASCII PLY files: a plain-text
//! header describing the vertex schema followed by one line per point.
//! Colors are optional, gamma-encoded on output, and emitted only when they
//! pair positionally with the points. The [`PlyExporter`] wrapper adds the
//! activation flag and last-written-path memory of an on-demand export node.

pub mod error;
pub mod exporter;
pub mod ply;

pub use error::*;
pub use exporter::{ExportStatus, PlyExporter};
pub use ply::{ColorEncoding, PlyWriteOptions, PlyWriter};

use plycloud_core::PointCloud;

/// Trait for writing point clouds to files
pub trait PointCloudWriter {
    /// Write `cloud` to `path`, returning whether colors were emitted
    fn write_point_cloud<P: AsRef<std::path::Path>>(cloud: &PointCloud, path: P) -> Result<bool>;
}
